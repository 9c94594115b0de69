use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AuthApiError {
    MissingToken,
    InvalidToken,
    TokenExpired,
}

impl AuthApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingToken => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Missing authorization token".to_string(),
            },
            Self::InvalidToken => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid token".to_string(),
            },
            Self::TokenExpired => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Token expired".to_string(),
            },
        }
    }
}
