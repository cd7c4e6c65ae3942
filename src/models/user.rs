//! User profile model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Account role, mirroring the tiers the dashboard understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Role {
    Individual,
    OrgAdmin,
    OrgMember,
}

impl Role {
    /// Whether the role belongs to an organization.
    pub fn is_org(&self) -> bool {
        !matches!(self, Role::Individual)
    }
}

/// User identity record.
///
/// Created at registration and embedded as a snapshot inside the session
/// token. Serialized in camelCase for compatibility with the web client's
/// stored records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserProfile {
    pub id: String,
    /// Email address, the unique key into the identity store
    pub email: String,
    /// Display name (trimmed at registration)
    pub name: String,
    pub role: Role,
    /// Generated organization reference for non-individual roles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    /// When the account was created (RFC3339)
    pub created_at: String,
}
