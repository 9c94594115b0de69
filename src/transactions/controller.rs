use axum::{extract::State, http::StatusCode, Json};

use crate::{
    app::models::{
        api_error::ApiError, json_from_request::JsonFromRequest, message::Message,
        path_from_request::PathFromRequest,
    },
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{dtos::transaction_dto::TransactionDto, models::transaction::Transaction, service};

pub async fn get_transactions(
    State(state): State<AppState>,
    _claims: Claims,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    match service::get_transactions(&state.pool).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => Err(e),
    }
}

pub async fn get_transaction_by_id(
    State(state): State<AppState>,
    _claims: Claims,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<Json<Transaction>, ApiError> {
    match service::get_transaction_by_id(id, &state.pool).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

pub async fn create_transaction(
    State(state): State<AppState>,
    _claims: Claims,
    JsonFromRequest(dto): JsonFromRequest<TransactionDto>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let dto = dto.into_valid()?;

    match service::create_transaction(&dto, &state.pool).await {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(Message::new("Transaction created successfully")),
        )),
        Err(e) => Err(e),
    }
}

pub async fn edit_transaction_by_id(
    State(state): State<AppState>,
    _claims: Claims,
    PathFromRequest(id): PathFromRequest<i64>,
    body: Result<JsonFromRequest<TransactionDto>, ApiError>,
) -> Result<Json<Message>, ApiError> {
    service::get_transaction_by_id(id, &state.pool).await?;

    let JsonFromRequest(dto) = body?;
    let dto = dto.into_valid()?;

    match service::edit_transaction_by_id(id, &dto, &state.pool).await {
        Ok(_) => Ok(Json(Message::new("Transaction updated successfully"))),
        Err(e) => Err(e),
    }
}

pub async fn delete_transaction_by_id(
    State(state): State<AppState>,
    _claims: Claims,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<Json<Message>, ApiError> {
    match service::delete_transaction_by_id(id, &state.pool).await {
        Ok(_) => Ok(Json(Message::new("Transaction deleted successfully"))),
        Err(e) => Err(e),
    }
}
