// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! ReLeaf Sync: carbon footprint tracking core
//!
//! This crate provides the backend API for the ReLeaf Sync dashboard:
//! the session/authentication lifecycle, the footprint calculator,
//! report projections over the footprint history, and the simulated
//! live-metrics feed the dashboard panels consume.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::{FootprintStore, MetricsService, SessionService};

/// Shared application state.
///
/// Constructed once at process start and injected into every consumer;
/// there is no module-level session or credential state anywhere else.
pub struct AppState {
    pub config: Config,
    pub sessions: SessionService,
    pub history: FootprintStore,
    pub metrics: MetricsService,
}
