#![allow(dead_code)]

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use portfolio_api::config::{
    AppConfig, DatabaseConfig, Environment, SecurityConfig, ServerConfig,
};
use portfolio_api::database::{manager, seed};
use portfolio_api::state::AppState;

/// The bearer token the test router is configured with.
pub const TEST_TOKEN: &str = "test-token";

/// Build the real application over a fresh, seeded, in-memory store.
///
/// One connection per pool: every in-memory SQLite connection is its own
/// database, so a second connection would see empty tables.
pub async fn test_app() -> Result<Router> {
    let pool = manager::connect("sqlite::memory:", 1).await?;
    manager::ensure_schema(&pool).await?;
    seed::seed_if_empty(&pool).await?;

    let config = AppConfig {
        environment: Environment::Development,
        server: ServerConfig { port: 0, static_dir: "public".to_string() },
        database: DatabaseConfig { url: "sqlite::memory:".to_string(), max_connections: 1 },
        security: SecurityConfig { admin_token: TEST_TOKEN.to_string() },
    };

    Ok(portfolio_api::app(AppState::new(pool, config)))
}

/// Run one request against the router; returns the status and the JSON body
/// (Null for empty bodies such as 204 responses).
pub async fn send(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Build a request with an optional bearer token and optional JSON body.
pub fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Shorthand for an authenticated request with the correct test token.
pub fn authed(method: Method, uri: &str, body: Option<&Value>) -> Request<Body> {
    request(method, uri, Some(TEST_TOKEN), body)
}
