// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session lifecycle service.
//!
//! Owns the mock identity store and the single current session:
//! 1. Restore a persisted token at startup (expiry checked once, here)
//! 2. Issue tokens on login/registration and persist them
//! 3. Clear everything on logout
//!
//! The credential store is an in-memory map holding plaintext-equivalent
//! passwords. It is a placeholder for a real identity provider, not a
//! security boundary; a salted-hash implementation could replace
//! `verify_credentials` without touching callers.

use std::sync::Mutex;
use std::time::Duration;

use dashmap::DashMap;
use ring::rand::{SecureRandom, SystemRandom};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Role, SessionToken, UserProfile};
use crate::services::validation::{check_password_policy, is_valid_email};
use crate::store::SessionStore;
use crate::time_utils::{epoch_millis, format_utc_rfc3339};

/// Sessions live for 24 hours from issuance.
const SESSION_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// A stored (profile, password) pair in the mock identity store.
#[derive(Debug, Clone)]
struct CredentialEntry {
    user: UserProfile,
    password: String,
}

/// Where the session lifecycle currently stands.
#[derive(Debug, Clone)]
enum SessionState {
    /// Startup: the persisted token has not been checked yet
    Authenticating,
    Unauthenticated,
    Authenticated(SessionToken),
}

/// Session state as the presentation layer consumes it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionSnapshot {
    pub user: Option<UserProfile>,
    pub is_loading: bool,
    pub is_authenticated: bool,
}

/// Authentication failures, returned as values across the service
/// boundary (never panicked). Display strings are the user-facing
/// messages the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password is required")]
    MissingPassword,

    #[error("{0}")]
    WeakPassword(&'static str),

    #[error("Name must be at least 2 characters long")]
    InvalidName,

    #[error("An account with this email already exists")]
    DuplicateAccount,

    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Orchestrates login, registration and logout for the one session this
/// process holds.
pub struct SessionService {
    users: DashMap<String, CredentialEntry>,
    current: Mutex<SessionState>,
    store: SessionStore,
    auth_delay: Duration,
    rng: SystemRandom,
}

impl SessionService {
    /// Create the service in the `Authenticating` state; call
    /// [`restore`](Self::restore) once at startup to resolve it.
    pub fn new(store: SessionStore, auth_delay: Duration) -> Self {
        Self {
            users: DashMap::new(),
            current: Mutex::new(SessionState::Authenticating),
            store,
            auth_delay,
            rng: SystemRandom::new(),
        }
    }

    /// Resolve the startup state from the persisted token.
    ///
    /// A non-expired token restores the session; anything else (absent,
    /// expired, corrupt) leaves the process unauthenticated with the
    /// stored record removed. This is the only place expiry is checked;
    /// an established session does not self-expire while running.
    pub fn restore(&self) {
        let next = match self.store.load() {
            Some(token) if token.is_valid_at(epoch_millis()) => {
                tracing::info!(email = %token.user.email, "Restored persisted session");
                SessionState::Authenticated(token)
            }
            Some(token) => {
                tracing::info!(email = %token.user.email, "Persisted session expired, discarding");
                self.store.clear();
                SessionState::Unauthenticated
            }
            None => SessionState::Unauthenticated,
        };
        *self.lock_current() = next;
    }

    /// Authenticate against the identity store and establish a session.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(AuthError::MissingPassword);
        }

        // Emulated network latency; no ordering guarantee across calls.
        tokio::time::sleep(self.auth_delay).await;

        let user = self.verify_credentials(email, password)?;
        tracing::info!(email, "Login successful");
        Ok(self.establish(user))
    }

    /// Create an account and establish a session in one step.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<SessionToken, AuthError> {
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }
        check_password_policy(password).map_err(AuthError::WeakPassword)?;

        let name = name.trim();
        if name.chars().count() < 2 {
            return Err(AuthError::InvalidName);
        }

        // Unlike login, duplicates are reported openly: signup UX has to
        // tell the user why the account cannot be created.
        if self.users.contains_key(email) {
            return Err(AuthError::DuplicateAccount);
        }

        tokio::time::sleep(self.auth_delay).await;

        let now_ms = epoch_millis();
        let user = UserProfile {
            id: now_ms.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            organization_id: role.is_org().then(|| format!("org_{now_ms}")),
            created_at: format_utc_rfc3339(chrono::Utc::now()),
        };

        self.users.insert(
            email.to_string(),
            CredentialEntry {
                user: user.clone(),
                password: password.to_string(),
            },
        );

        tracing::info!(email, role = ?role, "Account registered");
        Ok(self.establish(user))
    }

    /// Tear down the current session. Always succeeds; idempotent.
    pub fn logout(&self) {
        *self.lock_current() = SessionState::Unauthenticated;
        self.store.clear();
        tracing::info!("Session cleared");
    }

    /// Session state for the presentation layer.
    pub fn snapshot(&self) -> SessionSnapshot {
        match &*self.lock_current() {
            SessionState::Authenticating => SessionSnapshot {
                user: None,
                is_loading: true,
                is_authenticated: false,
            },
            SessionState::Unauthenticated => SessionSnapshot {
                user: None,
                is_loading: false,
                is_authenticated: false,
            },
            SessionState::Authenticated(token) => SessionSnapshot {
                user: Some(token.user.clone()),
                is_loading: false,
                is_authenticated: true,
            },
        }
    }

    /// Resolve a presented token against the active session.
    ///
    /// Expiry is deliberately not re-checked here (it is enforced once at
    /// restore); a token authorizes iff it matches the live session.
    pub fn authorize(&self, token: &str) -> Option<UserProfile> {
        match &*self.lock_current() {
            SessionState::Authenticated(active) if active.token == token => {
                Some(active.user.clone())
            }
            _ => None,
        }
    }

    /// Plaintext comparison against the mock store. Unknown email and
    /// wrong password collapse into one error so callers cannot tell
    /// which factor failed.
    fn verify_credentials(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let entry = self.users.get(email).ok_or(AuthError::InvalidCredentials)?;
        if entry.password != password {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(entry.user.clone())
    }

    /// Issue a fresh token, persist it and flip to `Authenticated`.
    fn establish(&self, user: UserProfile) -> SessionToken {
        let token = SessionToken {
            token: self.generate_token(),
            expires_at: epoch_millis() + SESSION_TTL_MS,
            user,
        };

        // A failed write degrades to an in-memory session; login itself
        // still succeeds and the next startup simply finds no record.
        if let Err(err) = self.store.save(&token) {
            tracing::warn!(error = %err, "Failed to persist session token");
        }

        *self.lock_current() = SessionState::Authenticated(token.clone());
        token
    }

    /// Opaque token value: prefix plus 96 random bits.
    ///
    /// Collision probability is negligible for a session's lifetime.
    /// Known limitation: tokens carry no confidentiality guarantee, which
    /// matches the mock store not being a security boundary.
    fn generate_token(&self) -> String {
        let mut bytes = [0u8; 12];
        if self.rng.fill(&mut bytes).is_err() {
            // SystemRandom failure is effectively unreachable; fall back
            // to a timestamp so token issuance cannot fail.
            return format!("token_{:x}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0));
        }
        format!("token_{}", hex::encode(bytes))
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // Recover from poisoning: the state itself is always coherent.
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
