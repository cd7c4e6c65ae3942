// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod footprint;
pub mod metrics;
pub mod session;
pub mod user;

pub use footprint::{EntrySource, FootprintEntry};
pub use metrics::LiveMetrics;
pub use session::SessionToken;
pub use user::{Role, UserProfile};
