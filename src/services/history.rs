// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory footprint history.
//!
//! Append-ordered, most-recent first, never persisted beyond the process.
//! Seeded with the demo fixtures the dashboard ships with.

use std::sync::RwLock;

use crate::models::{EntrySource, FootprintEntry};

/// Shared history list held at the application root.
#[derive(Default)]
pub struct FootprintStore {
    entries: RwLock<Vec<FootprintEntry>>,
}

impl FootprintStore {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History pre-populated with the demo fixture entries.
    pub fn seeded() -> Self {
        Self {
            entries: RwLock::new(seed_entries()),
        }
    }

    /// Prepend an entry: the newest record always sits at the front.
    pub fn prepend(&self, entry: FootprintEntry) {
        self.write_entries().insert(0, entry);
    }

    /// Clone of the full list, most-recent first.
    pub fn snapshot(&self) -> Vec<FootprintEntry> {
        self.read_entries().clone()
    }

    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, Vec<FootprintEntry>> {
        self.entries.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write_entries(&self) -> std::sync::RwLockWriteGuard<'_, Vec<FootprintEntry>> {
        self.entries.write().unwrap_or_else(|p| p.into_inner())
    }
}

/// Demo history shown before the user records anything.
fn seed_entries() -> Vec<FootprintEntry> {
    let fixture = |id: &str, date: &str, travel, home_energy, food_purchases, total, source| {
        FootprintEntry {
            id: id.to_string(),
            user_id: "user_1".to_string(),
            date: date.to_string(),
            travel,
            home_energy,
            food_purchases,
            total,
            source,
        }
    };

    vec![
        fixture("1", "2024-12-01", 120, 85, 45, 250, EntrySource::Manual),
        fixture("2", "2024-11-01", 95, 92, 38, 225, EntrySource::Manual),
        fixture("3", "2024-10-01", 140, 78, 52, 270, EntrySource::Manual),
        fixture("4", "2024-09-01", 110, 88, 42, 240, EntrySource::Api),
        fixture("5", "2024-08-01", 130, 95, 55, 280, EntrySource::Integration),
        fixture("6", "2024-07-01", 125, 82, 48, 255, EntrySource::Manual),
    ]
}
