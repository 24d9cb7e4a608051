//! Shared test harness: router construction and request helpers.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so
//! integration tests exercise the same middleware stack (CORS, request ID,
//! timeout, tracing, panic recovery) that production uses.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use printdesk_api::cache::ConfigCache;
use printdesk_api::config::ServerConfig;
use printdesk_api::router::build_app_router;
use printdesk_api::state::AppState;

/// Plaintext of the admin secret seeded by the migrations.
pub const ADMIN_TOKEN: &str = "printdesk2025";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        config_cache_ttl_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let config_cache = Arc::new(ConfigCache::new(Duration::from_secs(
        config.config_cache_ttl_secs,
    )));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        config_cache,
    };
    build_app_router(state, &config)
}

/// GET `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET `uri` with the admin token header.
pub async fn get_admin(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("X-Admin-Token", ADMIN_TOKEN)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a JSON body to `uri`.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a JSON body to `uri` with the admin token header.
pub async fn post_json_admin(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("X-Admin-Token", ADMIN_TOKEN)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// PATCH a JSON body to `uri` with the admin token header.
pub async fn patch_json_admin(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("X-Admin-Token", ADMIN_TOKEN)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// PUT a JSON body to `uri` with the admin token header.
pub async fn put_json_admin(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("X-Admin-Token", ADMIN_TOKEN)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Submit a minimal valid order and return its JSON representation.
pub async fn create_order(app: Router, pages: i64) -> serde_json::Value {
    let body = serde_json::json!({
        "studentName": "Asha",
        "mobile": "9876543210",
        "fileName": "notes.pdf",
        "pages": pages,
        "copies": 1,
        "color": "bw",
        "sides": "single",
        "size": "A4"
    });
    let response = post_json(app, "/api/v1/orders", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
