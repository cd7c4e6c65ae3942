// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication routes.
//!
//! Thin HTTP adapters over [`crate::services::SessionService`]; every
//! failure is a structured result from the service, mapped to a status
//! code in `error.rs`; nothing is thrown across the boundary.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{Role, SessionToken};
use crate::services::SessionSnapshot;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

/// Authenticate and issue a session token.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionToken>> {
    let token = state.sessions.login(&req.email, &req.password).await?;
    Ok(Json(token))
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    email: String,
    password: String,
    name: String,
    role: Role,
}

/// Create an account and issue a session token.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<SessionToken>> {
    let token = state
        .sessions
        .register(&req.email, &req.password, &req.name, req.role)
        .await?;
    Ok(Json(token))
}

/// Tear down the session and delete the persisted token. Idempotent.
async fn logout(State(state): State<Arc<AppState>>) -> StatusCode {
    state.sessions.logout();
    StatusCode::NO_CONTENT
}

/// Current session state for the presentation layer.
async fn session(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    Json(state.sessions.snapshot())
}
