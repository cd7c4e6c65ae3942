// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ReLeaf Sync API Server
//!
//! Serves the session lifecycle, footprint calculator, report projections
//! and simulated live metrics behind the dashboard frontend.

use releaf_sync::{
    config::Config,
    services::{metrics, FootprintStore, MetricsService, SessionService, SimulatedMetrics},
    store::SessionStore,
    AppState,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting ReLeaf Sync API");

    // Resolve the persisted session once, before serving anything
    let store = SessionStore::new(config.session_file.clone());
    let sessions = SessionService::new(store, Duration::from_millis(config.auth_delay_ms));
    sessions.restore();
    let snapshot = sessions.snapshot();
    tracing::info!(
        authenticated = snapshot.is_authenticated,
        "Session state restored"
    );

    // Demo footprint history
    let history = FootprintStore::seeded();
    tracing::info!(count = history.len(), "Footprint history seeded");

    // Simulated live metrics
    let metrics_service = MetricsService::new(Arc::new(SimulatedMetrics::new()));

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        sessions,
        history,
        metrics: metrics_service,
    });

    // Regenerate metrics on a timer; aborted on teardown
    let sampler = metrics::spawn_sampler(
        state.clone(),
        Duration::from_secs(config.metrics_interval_secs),
    );

    // Build router
    let app = releaf_sync::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;

    sampler.abort();
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("releaf_sync=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
