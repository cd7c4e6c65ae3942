//! Session token model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::UserProfile;

/// Ephemeral proof of authentication with an embedded profile snapshot.
///
/// This is the single piece of durable client state; it is persisted as
/// JSON under one fixed key and must stay backward-readable across
/// restarts (`{token, expiresAt, user}`, expiry in epoch milliseconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionToken {
    /// Opaque token value
    pub token: String,
    /// Expiry as milliseconds since the Unix epoch
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub expires_at: i64,
    /// Profile snapshot taken at issuance
    pub user: UserProfile,
}

impl SessionToken {
    /// A token is valid iff the current time is strictly before its expiry.
    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        now_ms < self.expires_at
    }
}
