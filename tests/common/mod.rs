#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use barangay::{
    api::{self, state::AppState},
    config::Settings,
    service::ServiceContext,
    web,
};
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// Single-connection in-memory database with migrations applied. One
/// connection keeps every query on the same in-memory database.
pub async fn test_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await?;

    Ok(pool)
}

pub fn test_state(pool: SqlitePool) -> AppState {
    let mut settings = Settings::default();
    settings.site.name = "Barangay Test".to_string();

    AppState::new(
        Arc::new(ServiceContext::from_pool(pool)),
        Arc::new(settings),
    )
}

pub fn test_app(pool: SqlitePool) -> Router {
    let state = test_state(pool);
    api::create_app(state.clone()).merge(web::create_web_routes(state))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = serde_json::from_slice(&body).expect("response body was not json");
    (status, json)
}

pub async fn read_text(resp: Response) -> (StatusCode, String) {
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, String::from_utf8(body.to_vec()).expect("response body was not utf-8"))
}
