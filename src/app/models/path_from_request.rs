use axum::extract::Path;
use axum_macros::FromRequestParts;

use super::api_error::ApiError;

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct PathFromRequest<T>(pub T);
