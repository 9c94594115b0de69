use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{categories, transactions, AppState};

use super::controller;

const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(controller::get_root))
        // categories
        .route(
            "/categories",
            get(categories::controller::get_categories)
                .post(categories::controller::create_category),
        )
        .route(
            "/categories/:id",
            get(categories::controller::get_category_by_id)
                .put(categories::controller::edit_category_by_id)
                .delete(categories::controller::delete_category_by_id),
        )
        // transactions
        .route(
            "/transactions",
            get(transactions::controller::get_transactions)
                .post(transactions::controller::create_transaction),
        )
        .route(
            "/transactions/:id",
            get(transactions::controller::get_transaction_by_id)
                .put(transactions::controller::edit_transaction_by_id)
                .delete(transactions::controller::delete_transaction_by_id),
        )
        // layers
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
