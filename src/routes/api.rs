// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::middleware::auth::AuthUser;
use crate::models::{FootprintEntry, LiveMetrics, UserProfile};
use crate::services::calculator::{self, CalculatorInput};
use crate::services::reports::{self, ReportSummary};
use crate::time_utils::{epoch_millis, today_iso_date};
use crate::AppState;

/// API routes (require an active session).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/footprint", get(get_history).post(add_entry))
        .route("/api/footprint/summary", get(get_summary))
        .route("/api/footprint/export", get(export_csv))
        .route("/api/metrics", get(get_metrics))
}

// ─── User Profile ────────────────────────────────────────────

/// Get current user profile.
async fn get_me(Extension(user): Extension<AuthUser>) -> Json<UserProfile> {
    Json(user.profile)
}

// ─── Footprint History ───────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HistoryResponse {
    /// Entries in list order, most-recent first
    pub entries: Vec<FootprintEntry>,
    pub total: u32,
}

/// Get the footprint history, most-recent first.
async fn get_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let entries = state.history.snapshot();
    Json(HistoryResponse {
        total: entries.len() as u32,
        entries,
    })
}

/// Submit a calculator form: compute the entry and prepend it.
async fn add_entry(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CalculatorInput>,
) -> Json<FootprintEntry> {
    let entry = calculator::build_entry(
        &input,
        epoch_millis().to_string(),
        user.profile.id.clone(),
        today_iso_date(),
    );

    tracing::info!(
        user_id = %entry.user_id,
        entry_id = %entry.id,
        total = entry.total,
        "Footprint entry recorded"
    );

    state.history.prepend(entry.clone());
    Json(entry)
}

// ─── Reports ─────────────────────────────────────────────────

/// Aggregate stats over the history.
async fn get_summary(State(state): State<Arc<AppState>>) -> Json<ReportSummary> {
    Json(reports::summarize(&state.history.snapshot()))
}

/// Download the history as CSV.
async fn export_csv(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let csv = reports::to_csv(&state.history.snapshot());
    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"carbon-footprint-report.csv\"",
            ),
        ],
        csv,
    )
}

// ─── Live Metrics ────────────────────────────────────────────

/// Latest simulated platform metrics snapshot.
async fn get_metrics(State(state): State<Arc<AppState>>) -> Json<LiveMetrics> {
    Json(state.metrics.latest())
}
