use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::ValidationErrors;

use crate::app::errors::DefaultApiError;

use super::message::Message;

/// Every failure a handler can produce. Serialized as `{"message": ...}`
/// with `code` as the response status.
#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, Json(Message::new(self.message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

// Ids that do not parse never match a record.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("path rejected: {}", rejection.body_text());

        DefaultApiError::NotFound.value()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let mut messages = Vec::new();

        for (field, field_errors) in fields {
            for e in field_errors {
                match &e.message {
                    Some(message) => messages.push(message.to_string()),
                    None => messages.push(format!("{} is invalid", field)),
                }
            }
        }

        Self {
            code: StatusCode::BAD_REQUEST,
            message: messages.join("; "),
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::ValidationError;

    use super::*;

    #[tokio::test]
    async fn renders_message_body_with_status() {
        let response = ApiError {
            code: StatusCode::NOT_FOUND,
            message: "Category not found".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Category not found" }));
    }

    #[test]
    fn validation_errors_are_sorted_by_field() {
        let mut errors = ValidationErrors::new();

        let mut name = ValidationError::new("required");
        name.message = Some("Name is required".into());
        errors.add("name", name);

        let mut amount = ValidationError::new("required");
        amount.message = Some("Amount is required".into());
        errors.add("amount", amount);

        errors.add("category_id", ValidationError::new("range"));

        let e = ApiError::from(errors);

        assert_eq!(e.code, StatusCode::BAD_REQUEST);
        assert_eq!(
            e.message,
            "Amount is required; category_id is invalid; Name is required"
        );
    }
}
