use axum::{extract::State, http::StatusCode, Json};

use crate::{
    app::models::{
        api_error::ApiError, json_from_request::JsonFromRequest, message::Message,
        path_from_request::PathFromRequest,
    },
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{dtos::category_dto::CategoryDto, models::category::Category, service};

pub async fn get_categories(
    State(state): State<AppState>,
    _claims: Claims,
) -> Result<Json<Vec<Category>>, ApiError> {
    match service::get_categories(&state.pool).await {
        Ok(categories) => Ok(Json(categories)),
        Err(e) => Err(e),
    }
}

pub async fn get_category_by_id(
    State(state): State<AppState>,
    _claims: Claims,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<Json<Category>, ApiError> {
    match service::get_category_by_id(id, &state.pool).await {
        Ok(category) => Ok(Json(category)),
        Err(e) => Err(e),
    }
}

pub async fn create_category(
    State(state): State<AppState>,
    _claims: Claims,
    JsonFromRequest(dto): JsonFromRequest<CategoryDto>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let dto = dto.into_valid()?;

    match service::create_category(&dto, &state.pool).await {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(Message::new("Category created successfully")),
        )),
        Err(e) => Err(e),
    }
}

pub async fn edit_category_by_id(
    State(state): State<AppState>,
    _claims: Claims,
    PathFromRequest(id): PathFromRequest<i64>,
    body: Result<JsonFromRequest<CategoryDto>, ApiError>,
) -> Result<Json<Message>, ApiError> {
    // a missing category wins over a bad body
    service::get_category_by_id(id, &state.pool).await?;

    let JsonFromRequest(dto) = body?;
    let dto = dto.into_valid()?;

    match service::edit_category_by_id(id, &dto, &state.pool).await {
        Ok(_) => Ok(Json(Message::new("Category updated successfully"))),
        Err(e) => Err(e),
    }
}

pub async fn delete_category_by_id(
    State(state): State<AppState>,
    _claims: Claims,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<Json<Message>, ApiError> {
    match service::delete_category_by_id(id, &state.pool).await {
        Ok(_) => Ok(Json(Message::new("Category deleted successfully"))),
        Err(e) => Err(e),
    }
}
