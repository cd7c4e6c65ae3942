// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token middleware.

use crate::error::AppError;
use crate::models::UserProfile;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Authenticated user extracted from the presented token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub profile: UserProfile,
}

/// Middleware that requires the active session's token.
///
/// The token travels either in a `releaf_token` cookie or as a bearer
/// header; it authorizes only while it matches the live session.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Try cookie first, then header
    let token = if let Some(cookie) = jar.get("releaf_token") {
        cookie.value().to_string()
    } else {
        let auth_header = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        match auth_header {
            Some(h) if h.starts_with("Bearer ") => h[7..].to_string(),
            _ => return Err(AppError::Unauthorized),
        }
    };

    let profile = state
        .sessions
        .authorize(&token)
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(AuthUser { profile });

    Ok(next.run(request).await)
}
