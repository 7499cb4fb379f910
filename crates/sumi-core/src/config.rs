//! Application configuration loaded from environment variables.
//!
//! All fields have defaults suitable for local development against the
//! backend proxy on port 8080. Malformed numeric values fail fast at
//! startup.

use std::time::Duration;

use crate::app::PollPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the backend proxy (default: `http://localhost:8080`).
    pub api_base_url: String,
    /// Path of the JSON artifact store (default: `signatures.json`).
    pub storage_path: String,
    /// Polling budget for one generation run.
    pub poll: PollPolicy,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `API_BASE_URL`         | `http://localhost:8080` |
    /// | `STORAGE_PATH`         | `signatures.json`       |
    /// | `POLL_MAX_ATTEMPTS`    | `30`                    |
    /// | `POLL_INTERVAL_MS`     | `2000`                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".into());

        let storage_path =
            std::env::var("STORAGE_PATH").unwrap_or_else(|_| "signatures.json".into());

        let max_attempts: u32 = std::env::var("POLL_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("POLL_MAX_ATTEMPTS must be a valid u32");

        let interval_ms: u64 = std::env::var("POLL_INTERVAL_MS")
            .unwrap_or_else(|_| "2000".into())
            .parse()
            .expect("POLL_INTERVAL_MS must be a valid u64");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            api_base_url,
            storage_path,
            poll: PollPolicy {
                max_attempts,
                interval: Duration::from_millis(interval_ms),
            },
            request_timeout: Duration::from_secs(request_timeout_secs),
        }
    }
}
