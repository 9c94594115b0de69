use serde::Deserialize;
use validator::Validate;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

/// Body of `POST /categories` and `PUT /categories/:id`.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryDto {
    #[serde(default, deserialize_with = "crate::app::util::json::typed_or_none")]
    #[validate(
        required(message = "Name is required"),
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters.")
    )]
    pub name: Option<String>,
}

#[derive(Debug)]
pub struct ValidCategoryDto {
    pub name: String,
}

impl CategoryDto {
    pub fn into_valid(mut self) -> Result<ValidCategoryDto, ApiError> {
        self.name = self.name.map(|n| n.trim().to_string());
        self.validate()?;

        let Some(name) = self.name
        else {
            return Err(DefaultApiError::InternalServerError.value());
        };

        Ok(ValidCategoryDto { name })
    }
}
