// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report projections over the footprint history.
//!
//! Pure read-only aggregation: nothing here mutates the history, and all
//! figures are integers matching what the dashboard displays.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::FootprintEntry;

/// Quick stats for the reports and dashboard panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ReportSummary {
    /// Number of recorded entries
    pub total_records: u32,
    /// Mean of entry totals, rounded for display
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub average_total: i64,
    /// Most recent total minus the one before it (0 with fewer than 2)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub net_change: i64,
    /// Linear forecast for the next period, floored at zero
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub forecast: i64,
}

/// Aggregate the history list (expected most-recent first).
pub fn summarize(entries: &[FootprintEntry]) -> ReportSummary {
    let count = entries.len();
    if count == 0 {
        return ReportSummary {
            total_records: 0,
            average_total: 0,
            net_change: 0,
            forecast: 0,
        };
    }

    let sum: i64 = entries.iter().map(|e| e.total).sum();
    let average_total = (sum as f64 / count as f64).round() as i64;

    let current = entries[0].total;
    let net_change = if count > 1 {
        current - entries[1].total
    } else {
        0
    };

    // Trend: average of (newest - oldest) spread over the list length.
    let trend = if count > 1 {
        (current - entries[count - 1].total) as f64 / count as f64
    } else {
        0.0
    };
    let forecast = (current as f64 + trend).max(0.0).round() as i64;

    ReportSummary {
        total_records: count as u32,
        average_total,
        net_change,
        forecast,
    }
}

/// Serialize the history as CSV.
///
/// Fixed column order with no field quoting; every value is a date or a
/// number, so commas cannot appear inside a field.
pub fn to_csv(entries: &[FootprintEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push("Date,Travel,Home Energy,Food & Purchases,Total".to_string());
    for entry in entries {
        lines.push(format!(
            "{},{},{},{},{}",
            entry.date, entry.travel, entry.home_energy, entry.food_purchases, entry.total
        ));
    }
    lines.join("\n")
}
