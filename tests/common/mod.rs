#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use bakery_api::{app, ensure_schema, seed::seed, AppState, ServerConfig, SqliteStore};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tower::ServiceExt;

/// One connection that never expires: every query sees the same in-memory database.
pub async fn memory_store() -> SqliteStore {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await
        .expect("in-memory pool");
    ensure_schema(&pool).await.expect("schema");
    SqliteStore::new(pool)
}

pub async fn empty_app() -> (Router, SqliteStore) {
    app_with(ServerConfig::default()).await
}

pub async fn app_with(config: ServerConfig) -> (Router, SqliteStore) {
    let store = memory_store().await;
    let router = app(AppState::new(store.clone()), &config);
    (router, store)
}

pub async fn seeded_app() -> (Router, SqliteStore) {
    let (router, store) = empty_app().await;
    seed(&store).await.expect("seed");
    (router, store)
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    send(app, req).await
}

pub async fn form(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    send(app, req).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    send(app, req).await
}
