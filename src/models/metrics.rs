//! Live platform metrics model.
//!
//! These are presentation fixtures for the dashboard, not telemetry:
//! values are synthesized by a [`crate::services::metrics::MetricsSource`].

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One snapshot of the simulated platform metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LiveMetrics {
    /// Concurrent active users
    pub active_users: u32,
    /// API calls made by those users in the sampled window
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub api_calls: u64,
    /// Data processed, in terabytes
    pub data_processed: f64,
    /// Service uptime percentage
    pub uptime: f64,
    /// When this snapshot was generated (RFC3339)
    pub last_update: String,
}
