//! Footprint entry model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// How an entry entered the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum EntrySource {
    Manual,
    Api,
    Integration,
}

/// One dated record of estimated carbon emissions (kg CO2e), split into
/// travel / home-energy / food categories plus total.
///
/// The producer guarantees `total` equals the sum of the three subtotals;
/// ingestion does not re-validate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FootprintEntry {
    pub id: String,
    pub user_id: String,
    /// ISO `YYYY-MM-DD` date
    pub date: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub travel: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub home_energy: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub food_purchases: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total: i64,
    pub source: EntrySource,
}
