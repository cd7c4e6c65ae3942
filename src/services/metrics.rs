// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Simulated live platform metrics.
//!
//! The dashboard's "real-time" panels are display fixtures fed by a
//! random generator, not telemetry. The generator sits behind the
//! [`MetricsSource`] trait so tests inject deterministic values.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{Datelike, Timelike, Utc};
use ring::rand::{SecureRandom, SystemRandom};

use crate::models::LiveMetrics;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

/// A source of metric snapshots.
pub trait MetricsSource: Send + Sync {
    fn sample(&self) -> LiveMetrics;
}

/// Random metrics shaped like plausible SaaS traffic: user counts follow
/// working hours and weekdays, API volume follows users.
pub struct SimulatedMetrics {
    rng: SystemRandom,
}

impl SimulatedMetrics {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    /// Uniform value in [0, 1).
    fn random_unit(&self) -> f64 {
        let mut bytes = [0u8; 8];
        if self.rng.fill(&mut bytes).is_err() {
            return 0.5;
        }
        u64::from_le_bytes(bytes) as f64 / (u64::MAX as f64 + 1.0)
    }
}

impl Default for SimulatedMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for SimulatedMetrics {
    fn sample(&self) -> LiveMetrics {
        let now = Utc::now();
        let hour = now.hour();
        let weekday = now.weekday().number_from_monday(); // 1 = Monday

        let mut base_users = 850.0;
        if (9..=17).contains(&hour) {
            base_users += 400.0; // work hours
        }
        if weekday <= 5 {
            base_users += 200.0; // weekdays
        }
        if (19..=23).contains(&hour) {
            base_users += 150.0; // evening usage
        }

        let active_users = (base_users + (self.random_unit() - 0.5) * 100.0).floor() as u32;

        // 15-25 API calls per active user
        let calls_per_user = 15.0 + self.random_unit() * 10.0;
        let api_calls = (active_users as f64 * calls_per_user).floor() as u64;

        // Each call processes ~50 MB on average; reported in TB
        let data_processed = api_calls as f64 * 50.0 / (1024.0 * 1024.0);

        // 99.8-99.9%
        let uptime = 99.9 - self.random_unit() * 0.1;

        LiveMetrics {
            active_users,
            api_calls,
            data_processed,
            uptime,
            last_update: format_utc_rfc3339(now),
        }
    }
}

/// Fixed source for tests and fixtures.
pub struct FixedMetrics(pub LiveMetrics);

impl MetricsSource for FixedMetrics {
    fn sample(&self) -> LiveMetrics {
        self.0.clone()
    }
}

/// Caches the latest snapshot from a source and hands it to handlers.
pub struct MetricsService {
    source: Arc<dyn MetricsSource>,
    latest: RwLock<LiveMetrics>,
}

impl MetricsService {
    /// Takes an initial sample so consumers never see an empty snapshot.
    pub fn new(source: Arc<dyn MetricsSource>) -> Self {
        let initial = source.sample();
        Self {
            source,
            latest: RwLock::new(initial),
        }
    }

    pub fn latest(&self) -> LiveMetrics {
        self.latest
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    pub fn refresh(&self) {
        let sample = self.source.sample();
        *self.latest.write().unwrap_or_else(|p| p.into_inner()) = sample;
    }
}

/// Periodically regenerate the cached metrics.
///
/// Fire-and-forget: the caller owns the handle and aborts it on teardown
/// so no callback outlives the server.
pub fn spawn_sampler(state: Arc<AppState>, period: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await; // first tick completes immediately
        loop {
            ticker.tick().await;
            state.metrics.refresh();
            tracing::debug!("Live metrics regenerated");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> LiveMetrics {
        LiveMetrics {
            active_users: 1000,
            api_calls: 20_000,
            data_processed: 0.95,
            uptime: 99.85,
            last_update: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_simulated_sample_within_envelope() {
        let source = SimulatedMetrics::new();
        let metrics = source.sample();

        // base 850 plus up to 750 of modulation, +/-50 jitter
        assert!(metrics.active_users >= 800);
        assert!(metrics.active_users <= 1650);

        let per_user = metrics.api_calls as f64 / metrics.active_users as f64;
        assert!((14.0..=26.0).contains(&per_user));

        assert!(metrics.uptime >= 99.8);
        assert!(metrics.uptime <= 99.9);
    }

    #[test]
    fn test_service_serves_cached_snapshot() {
        let service = MetricsService::new(Arc::new(FixedMetrics(fixture())));
        assert_eq!(service.latest(), fixture());

        service.refresh();
        assert_eq!(service.latest(), fixture());
    }
}
