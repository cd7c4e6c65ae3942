// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-persisted state.

pub mod session_file;

pub use session_file::{SessionStore, StoreError};
