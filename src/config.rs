//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL, used as the allowed CORS origin
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Path of the persisted session token record
    pub session_file: PathBuf,
    /// Artificial latency applied to login/register, in milliseconds
    pub auth_delay_ms: u64,
    /// How often the simulated live metrics are regenerated, in seconds
    pub metrics_interval_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a development default, so a bare environment works.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: parse_var("PORT", 8080)?,
            session_file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("releaf_auth_token.json")),
            auth_delay_ms: parse_var("AUTH_DELAY_MS", 1000)?,
            metrics_interval_secs: parse_var("METRICS_INTERVAL_SECS", 30)?,
        })
    }

    /// Default config for testing only: no artificial latency, session file
    /// in the system temp directory.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            session_file: env::temp_dir().join("releaf_auth_token.json"),
            auth_delay_ms: 0,
            metrics_interval_secs: 30,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: env mutation is process-wide and tests run in parallel.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("FRONTEND_URL");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.frontend_url, "http://localhost:5173");
        assert_eq!(config.auth_delay_ms, 1000);

        env::set_var("PORT", "not-a-port");
        let result = Config::from_env();
        env::remove_var("PORT");
        assert!(matches!(result, Err(ConfigError::Invalid("PORT"))));
    }
}
