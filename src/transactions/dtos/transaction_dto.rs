use serde::Deserialize;
use validator::Validate;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

/// Body of `POST /transactions` and `PUT /transactions/:id`. All three fields
/// are required; an update replaces every one of them.
#[derive(Debug, Deserialize, Validate)]
pub struct TransactionDto {
    #[serde(default, deserialize_with = "crate::app::util::json::typed_or_none")]
    #[validate(
        required(message = "Description is required"),
        length(
            min = 1,
            max = 255,
            message = "description must be between 1 and 255 characters."
        )
    )]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::app::util::json::typed_or_none")]
    #[validate(required(message = "Amount is required"))]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "crate::app::util::json::typed_or_none")]
    #[validate(required(message = "Category ID is required"))]
    pub category_id: Option<i64>,
}

#[derive(Debug)]
pub struct ValidTransactionDto {
    pub description: String,
    pub amount: f64,
    pub category_id: i64,
}

impl TransactionDto {
    pub fn into_valid(mut self) -> Result<ValidTransactionDto, ApiError> {
        self.description = self.description.map(|d| d.trim().to_string());
        self.validate()?;

        let (Some(description), Some(amount), Some(category_id)) =
            (self.description, self.amount, self.category_id)
        else {
            return Err(DefaultApiError::InternalServerError.value());
        };

        Ok(ValidTransactionDto {
            description,
            amount,
            category_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> Result<ValidTransactionDto, ApiError> {
        serde_json::from_value::<TransactionDto>(value)
            .unwrap()
            .into_valid()
    }

    #[test]
    fn accepts_a_complete_body() {
        let dto = parse(json!({ "description": "Lunch", "amount": 12.5, "category_id": 1 })).unwrap();

        assert_eq!(dto.description, "Lunch");
        assert_eq!(dto.amount, 12.5);
        assert_eq!(dto.category_id, 1);
    }

    #[test]
    fn amount_sign_is_unconstrained() {
        let dto = parse(json!({ "description": "Refund", "amount": -40, "category_id": 3 })).unwrap();

        assert_eq!(dto.amount, -40.0);
    }

    #[test]
    fn each_missing_field_is_named() {
        let e = parse(json!({ "description": "Lunch", "category_id": 1 })).unwrap_err();
        assert_eq!(e.code, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Amount is required");

        let e = parse(json!({ "amount": 1, "category_id": 1 })).unwrap_err();
        assert_eq!(e.message, "Description is required");

        let e = parse(json!({ "description": "Lunch", "amount": 1 })).unwrap_err();
        assert_eq!(e.message, "Category ID is required");
    }

    #[test]
    fn wrong_types_are_reported_as_missing() {
        let e = parse(json!({ "description": 5, "amount": "12.5", "category_id": 1.5 })).unwrap_err();

        assert_eq!(
            e.message,
            "Amount is required; Category ID is required; Description is required"
        );
    }

    #[test]
    fn description_is_trimmed_and_blank_is_rejected() {
        let dto = parse(json!({ "description": "  Lunch ", "amount": 1, "category_id": 1 })).unwrap();
        assert_eq!(dto.description, "Lunch");

        let e = parse(json!({ "description": "   ", "amount": 1, "category_id": 1 })).unwrap_err();
        assert_eq!(e.code, StatusCode::BAD_REQUEST);
        assert_eq!(
            e.message,
            "description must be between 1 and 255 characters."
        );
    }

    #[test]
    fn empty_description_is_rejected() {
        let e = parse(json!({ "description": "", "amount": 1, "category_id": 1 })).unwrap_err();

        assert_eq!(
            e.message,
            "description must be between 1 and 255 characters."
        );
    }
}
