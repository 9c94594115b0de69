use sqlx::SqlitePool;

use crate::app::{
    errors::DefaultApiError, models::api_error::ApiError, util::sqlx::is_foreign_key_violation,
};

use super::{
    dtos::transaction_dto::ValidTransactionDto, errors::TransactionsApiError,
    models::transaction::Transaction,
};

fn map_write_err(e: sqlx::Error) -> ApiError {
    if is_foreign_key_violation(&e) {
        return TransactionsApiError::CategoryDoesNotExist.value();
    }

    tracing::error!(%e);
    DefaultApiError::InternalServerError.value()
}

pub async fn create_transaction(
    dto: &ValidTransactionDto,
    pool: &SqlitePool,
) -> Result<Transaction, ApiError> {
    // whole-number REALs come back typed INTEGER unless cast
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        r#"
        INSERT INTO "transaction" (description, amount, category_id)
        VALUES (?, ?, ?)
        RETURNING id, description, CAST(amount AS REAL) AS amount, category_id
        "#,
    )
    .bind(&dto.description)
    .bind(dto.amount)
    .bind(dto.category_id)
    .fetch_one(pool)
    .await;

    match sqlx_result {
        Ok(transaction) => {
            tracing::info!(id = transaction.id, "transaction created");
            Ok(transaction)
        }
        Err(e) => Err(map_write_err(e)),
    }
}

pub async fn get_transactions(pool: &SqlitePool) -> Result<Vec<Transaction>, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        r#"
        SELECT id, description, CAST(amount AS REAL) AS amount, category_id FROM "transaction"
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(transactions) => Ok(transactions),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_transaction_by_id(id: i64, pool: &SqlitePool) -> Result<Transaction, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        r#"
        SELECT id, description, CAST(amount AS REAL) AS amount, category_id FROM "transaction"
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(transaction) => match transaction {
            Some(transaction) => Ok(transaction),
            None => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_transaction_by_id(
    id: i64,
    dto: &ValidTransactionDto,
    pool: &SqlitePool,
) -> Result<Transaction, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        r#"
        UPDATE "transaction" SET description = ?, amount = ?, category_id = ?
        WHERE id = ?
        RETURNING id, description, CAST(amount AS REAL) AS amount, category_id
        "#,
    )
    .bind(&dto.description)
    .bind(dto.amount)
    .bind(dto.category_id)
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(transaction) => match transaction {
            Some(transaction) => Ok(transaction),
            None => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => Err(map_write_err(e)),
    }
}

pub async fn delete_transaction_by_id(id: i64, pool: &SqlitePool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        r#"
        DELETE FROM "transaction"
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => {
                tracing::info!(id, "transaction deleted");
                Ok(())
            }
            false => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
