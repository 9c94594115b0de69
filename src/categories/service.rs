use sqlx::SqlitePool;

use crate::app::{
    errors::DefaultApiError, models::api_error::ApiError, util::sqlx::is_foreign_key_violation,
};

use super::{dtos::category_dto::ValidCategoryDto, errors::CategoriesApiError, models::category::Category};

pub async fn create_category(dto: &ValidCategoryDto, pool: &SqlitePool) -> Result<Category, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Category>(
        "
        INSERT INTO category (name)
        VALUES (?)
        RETURNING id, name
        ",
    )
    .bind(&dto.name)
    .fetch_one(pool)
    .await;

    match sqlx_result {
        Ok(category) => {
            tracing::info!(id = category.id, "category created");
            Ok(category)
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_categories(pool: &SqlitePool) -> Result<Vec<Category>, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Category>(
        "
        SELECT id, name FROM category
        ORDER BY id
        ",
    )
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(categories) => Ok(categories),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_category_by_id(id: i64, pool: &SqlitePool) -> Result<Category, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Category>(
        "
        SELECT id, name FROM category
        WHERE id = ?
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(category) => match category {
            Some(category) => Ok(category),
            None => Err(CategoriesApiError::CategoryNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_category_by_id(
    id: i64,
    dto: &ValidCategoryDto,
    pool: &SqlitePool,
) -> Result<Category, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Category>(
        "
        UPDATE category SET name = ?
        WHERE id = ?
        RETURNING id, name
        ",
    )
    .bind(&dto.name)
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(category) => match category {
            Some(category) => Ok(category),
            None => Err(CategoriesApiError::CategoryNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn delete_category_by_id(id: i64, pool: &SqlitePool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM category
        WHERE id = ?
        ",
    )
    .bind(id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => {
                tracing::info!(id, "category deleted");
                Ok(())
            }
            false => Err(CategoriesApiError::CategoryNotFound.value()),
        },
        Err(e) => {
            // deletion is restricted while transactions reference the category
            if is_foreign_key_violation(&e) {
                return Err(CategoriesApiError::CategoryInUse.value());
            }

            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_utils::test_state;

    use super::*;

    fn dto(name: &str) -> ValidCategoryDto {
        ValidCategoryDto {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_generated_in_order() {
        let state = test_state().await;

        let food = create_category(&dto("Food"), &state.pool).await.unwrap();
        let rent = create_category(&dto("Rent"), &state.pool).await.unwrap();

        assert!(rent.id > food.id);
        assert_eq!(get_categories(&state.pool).await.unwrap(), vec![food, rent]);
    }

    #[tokio::test]
    async fn edit_of_missing_category_is_not_found() {
        let state = test_state().await;

        let e = edit_category_by_id(999, &dto("Food"), &state.pool)
            .await
            .unwrap_err();

        assert_eq!(e.message, "Category not found");
        assert!(get_categories(&state.pool).await.unwrap().is_empty());
    }
}
