// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use releaf_sync::config::Config;
use releaf_sync::models::LiveMetrics;
use releaf_sync::routes::create_router;
use releaf_sync::services::{FixedMetrics, FootprintStore, MetricsService, SessionService};
use releaf_sync::store::SessionStore;
use releaf_sync::AppState;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

/// Deterministic metrics fixture served by the test app.
#[allow(dead_code)]
pub fn metrics_fixture() -> LiveMetrics {
    LiveMetrics {
        active_users: 1200,
        api_calls: 24_000,
        data_processed: 1.14,
        uptime: 99.88,
        last_update: "2025-01-01T00:00:00Z".to_string(),
    }
}

/// Create a test app over an isolated session file.
///
/// The returned `TempDir` keeps the session file alive; drop it and the
/// persisted state is gone.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut config = Config::test_default();
    config.session_file = dir.path().join("releaf_auth_token.json");

    let store = SessionStore::new(config.session_file.clone());
    let sessions = SessionService::new(store, Duration::from_millis(config.auth_delay_ms));
    sessions.restore();

    let state = Arc::new(AppState {
        config,
        sessions,
        history: FootprintStore::seeded(),
        metrics: MetricsService::new(Arc::new(FixedMetrics(metrics_fixture()))),
    });

    (create_router(state.clone()), state, dir)
}

/// POST a JSON body and return the response.
#[allow(dead_code)]
pub async fn post_json(
    app: &axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// GET with an optional bearer token.
#[allow(dead_code)]
pub async fn get_with_token(app: &axum::Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as a string.
#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Register a default account and return its session token value.
#[allow(dead_code)]
pub async fn register_and_token(app: &axum::Router) -> String {
    let response = post_json(
        app,
        "/auth/register",
        serde_json::json!({
            "email": "ada@example.com",
            "password": "Str0ng!pass",
            "name": "Ada",
            "role": "individual"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["token"].as_str().expect("token in response").to_string()
}
