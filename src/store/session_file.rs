// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed session token record.
//!
//! Holds the one durable piece of client state: a JSON document of the
//! shape `{token, expiresAt, user}`, the same record the web client kept
//! under its `releaf_auth_token` localStorage key. There is no migration
//! path for schema changes; unreadable data is discarded.

use std::fs;
use std::path::PathBuf;

use crate::models::SessionToken;

/// Typed wrapper around the persisted session record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted token, if any.
    ///
    /// Corrupt JSON is treated as absent: the record is deleted and `None`
    /// returned, so the session falls back to unauthenticated instead of
    /// being left half-initialized.
    pub fn load(&self) -> Option<SessionToken> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(token) => Some(token),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Discarding corrupt session record"
                );
                self.clear();
                None
            }
        }
    }

    /// Persist a freshly issued token, replacing any previous record.
    pub fn save(&self, token: &SessionToken) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        let json =
            serde_json::to_string(token).map_err(|e| StoreError::Serialize(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StoreError::Io(e.to_string()))
    }

    /// Delete the persisted record. Idempotent; a missing file is fine.
    pub fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Failed to delete session record"
                );
            }
        }
    }
}

/// Errors from session record operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to write session record: {0}")]
    Io(String),

    #[error("Failed to serialize session record: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserProfile};

    fn make_token(expires_at: i64) -> SessionToken {
        SessionToken {
            token: "token_deadbeef".to_string(),
            expires_at,
            user: UserProfile {
                id: "1".to_string(),
                email: "a@b.co".to_string(),
                name: "Ada".to_string(),
                role: Role::Individual,
                organization_id: None,
                created_at: "2025-01-01T00:00:00Z".to_string(),
            },
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("releaf_auth_token.json"));

        let token = make_token(i64::MAX);
        store.save(&token).unwrap();

        assert_eq!(store.load(), Some(token));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("releaf_auth_token.json"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupt_record_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("releaf_auth_token.json");
        fs::write(&path, "{not json").unwrap();

        let store = SessionStore::new(path.clone());
        assert_eq!(store.load(), None);
        // The corrupt file must be gone so the next startup is clean.
        assert!(!path.exists());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("releaf_auth_token.json"));

        store.save(&make_token(1)).unwrap();
        store.clear();
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_reads_records_written_by_web_client() {
        // Wire format the frontend produced: camelCase keys, epoch-ms expiry.
        let raw = r#"{
            "token": "token_x1y2z3_abc",
            "expiresAt": 9999999999999,
            "user": {
                "id": "1700000000000",
                "email": "ada@example.com",
                "name": "Ada",
                "role": "org_admin",
                "organizationId": "org_1700000000000",
                "createdAt": "2024-01-15T12:00:00Z"
            }
        }"#;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("releaf_auth_token.json");
        fs::write(&path, raw).unwrap();

        let token = SessionStore::new(path).load().expect("record should parse");
        assert_eq!(token.user.role, Role::OrgAdmin);
        assert_eq!(token.user.organization_id.as_deref(), Some("org_1700000000000"));
    }
}
