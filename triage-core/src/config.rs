//! Runtime configuration for the dashboard.
//!
//! The backend base URL comes from the `TRIAGE_API_URL` environment
//! variable and falls back to the local development backend when unset.
//! CLI flags override both (resolved in the binary, not here).

use std::env;

/// Environment variable naming the backend API root.
pub const API_URL_ENV: &str = "TRIAGE_API_URL";

/// Backend API root used when the environment does not provide one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Root address of the backend API.
    pub api_url: String,
    /// Listen address for the dashboard page.
    pub bind: String,
    /// Log level for the fmt subscriber.
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            bind: "127.0.0.1:3000".into(),
            log_level: "info".into(),
        }
    }
}

impl DashboardConfig {
    /// Resolve configuration from the environment, keeping defaults for
    /// anything unset. An empty `TRIAGE_API_URL` counts as unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.api_url = url;
            }
        }
        config
    }
}
