// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current time as milliseconds since the Unix epoch.
///
/// Session token expiries are stored in this unit to stay readable by
/// the web client, which compares against `Date.now()`.
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Today's date as an ISO `YYYY-MM-DD` string (UTC).
pub fn today_iso_date() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_shape() {
        let date = today_iso_date();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }
}
