// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod calculator;
pub mod history;
pub mod metrics;
pub mod reports;
pub mod session;
pub mod validation;

pub use history::FootprintStore;
pub use metrics::{FixedMetrics, MetricsService, MetricsSource, SimulatedMetrics};
pub use reports::ReportSummary;
pub use session::{AuthError, SessionService, SessionSnapshot};
