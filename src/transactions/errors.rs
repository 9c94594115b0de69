use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    TransactionNotFound,
    CategoryDoesNotExist,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::TransactionNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Transaction not found".to_string(),
            },
            Self::CategoryDoesNotExist => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Category does not exist".to_string(),
            },
        }
    }
}
