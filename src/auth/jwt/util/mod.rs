use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::{app::util::time, auth::jwt::models::claims::Claims};

use super::config::JWT_EXP;

pub fn sign_jwt(id: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = time::current_time_in_secs();
    let exp = iat + JWT_EXP;

    let claims = Claims {
        id: id.to_string(),
        iat,
        exp,
    };

    encode_claims(&claims, secret)
}

pub fn encode_claims(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

pub fn decode_jwt(jwt: &str, secret: &str) -> Result<Claims, ErrorKind> {
    let result = decode::<Claims>(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    );

    match result {
        Ok(data) => Ok(data.claims),
        Err(e) => Err(e.kind().to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-secret";

    #[test]
    fn signed_token_decodes_with_same_secret() {
        let token = sign_jwt("alice", SECRET).unwrap();

        let claims = decode_jwt(&token, SECRET).unwrap();

        assert_eq!(claims.id, "alice");
        assert_eq!(claims.exp - claims.iat, JWT_EXP);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign_jwt("alice", SECRET).unwrap();

        let kind = decode_jwt(&token, "other-secret").unwrap_err();

        assert!(matches!(kind, ErrorKind::InvalidSignature));
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = time::current_time_in_secs();
        let claims = Claims {
            id: "alice".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode_claims(&claims, SECRET).unwrap();

        let kind = decode_jwt(&token, SECRET).unwrap_err();

        assert!(matches!(kind, ErrorKind::ExpiredSignature));
    }
}
