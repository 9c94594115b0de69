use crate::app::models::api_error::ApiError;

pub async fn get_root() -> Result<(), ApiError> {
    Ok(())
}
