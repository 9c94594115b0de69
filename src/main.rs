use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    BoxError,
};
use sqlx::SqlitePool;
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::app::{db, env::Envy, errors::DefaultApiError};

mod app;
mod auth;
mod categories;
mod transactions;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub envy: Arc<Envy>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("finance_api=debug,tower_http=debug")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    // `finance-api token <subject>` issues an access token and exits
    let args: Vec<String> = env::args().collect();
    if let Some(result) = token_command(&args, env::var("JWT_SECRET").ok()) {
        match result {
            Ok(token) => println!("{}", token),
            Err(e) => tracing::error!("{}", e),
        }
        return;
    }

    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let rate_limit = envy.rate_limit_per_sec.to_owned().unwrap_or(50);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET, Method::PUT, Method::DELETE]);

    let pool = db::connect(&envy.database_url, envy.max_connections.unwrap_or(5))
        .await
        .expect("failed to connect to database");

    db::migrate(&pool).await.expect("failed to run migrations");

    tracing::info!(app_env = %envy.app_env, "connected to db");

    let state = AppState {
        pool,
        envy: Arc::new(envy),
    };

    // app
    let app = app::router::router(state).layer(cors).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|err: BoxError| async move {
                tracing::error!("unhandled service error: {}", err);
                DefaultApiError::InternalServerError.value()
            }))
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server failed: {}", e);
    }
}

/// Handles the `token` subcommand. Needs only the JWT secret, never the
/// database settings. `None` means the arguments name no subcommand.
fn token_command(args: &[String], jwt_secret: Option<String>) -> Option<Result<String, String>> {
    if args.get(1).map(String::as_str) != Some("token") {
        return None;
    }

    let Some(secret) = jwt_secret
    else {
        return Some(Err("JWT_SECRET must be set to issue a token".to_string()));
    };

    let subject = args.get(2).map(String::as_str).unwrap_or("admin");
    Some(
        auth::jwt::util::sign_jwt(subject, &secret)
            .map_err(|e| format!("failed to sign token: {}", e)),
    )
}
