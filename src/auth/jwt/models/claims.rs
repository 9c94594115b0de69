use axum::{
    async_trait,
    extract::FromRequestParts,
    headers::{authorization::Bearer, Authorization},
    http::request::Parts,
    TypedHeader,
};
use jsonwebtoken::errors::ErrorKind;
use serde::{Deserialize, Serialize};

use crate::{
    app::models::api_error::ApiError,
    auth::{errors::AuthApiError, jwt::util::decode_jwt},
    AppState,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub iat: u64,
    pub exp: u64,
}

impl Claims {
    pub fn from_header(authorization: Authorization<Bearer>, secret: &str) -> Result<Self, ApiError> {
        match decode_jwt(authorization.0.token(), secret) {
            Ok(claims) => Ok(claims),
            Err(e) => match e {
                ErrorKind::ExpiredSignature => Err(AuthApiError::TokenExpired.value()),
                _ => Err(AuthApiError::InvalidToken.value()),
            },
        }
    }
}

/// Guards a handler: the request is rejected before the handler body runs
/// unless it carries a valid bearer token.
#[async_trait]
impl FromRequestParts<AppState> for Claims {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(authorization) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AuthApiError::MissingToken.value())?;

        let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
        tracing::debug!(subject = %claims.id, "authorized");

        Ok(claims)
    }
}
