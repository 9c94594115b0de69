use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    app::{db, env::Envy, router},
    auth::jwt::util::sign_jwt,
    AppState,
};

pub const TEST_SECRET: &str = "test-secret";

pub async fn test_state() -> AppState {
    let pool = db::connect("sqlite::memory:", 1).await.unwrap();
    db::migrate(&pool).await.unwrap();

    AppState {
        pool,
        envy: Arc::new(Envy {
            app_env: "test".to_string(),
            port: None,
            database_url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
            jwt_secret: TEST_SECRET.to_string(),
            rate_limit_per_sec: None,
        }),
    }
}

pub async fn test_app() -> Router {
    router::router(test_state().await)
}

pub fn token() -> String {
    sign_jwt("tester", TEST_SECRET).unwrap()
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    match body {
        Some(body) => {
            let bytes = serde_json::to_vec(&body).unwrap();
            send_raw(app, method, uri, Some("application/json"), bytes, token).await
        }
        None => send_raw(app, method, uri, None, Vec::new(), token).await,
    }
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: Vec<u8>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    let request = builder.body(Body::from(body)).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();

    if bytes.is_empty() {
        return (status, Value::Null);
    }

    (status, serde_json::from_slice(&bytes).unwrap())
}
