use dotenv::dotenv;
use reqwest::Url;
use std::env;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::ConfigError;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the admin REST backend.
///
/// Built once by the host and handed to [`crate::client::AdminApiClient::new`];
/// nothing else in the crate reads the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    request_timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration for the given base URL with the default timeout
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                value: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load the configuration from `ADMIN_API_URL` and `ADMIN_API_TIMEOUT_SECS`,
    /// reading a `.env` file first if one is present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let base_url = env::var("ADMIN_API_URL").unwrap_or_else(|_| {
            debug!("ADMIN_API_URL not set, using {}", DEFAULT_BASE_URL);
            DEFAULT_BASE_URL.to_string()
        });

        let mut config = Self::new(&base_url)?;

        if let Ok(raw) = env::var("ADMIN_API_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            if secs == 0 {
                return Err(ConfigError::InvalidTimeout(raw));
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        info!(
            "Admin API configured at {} (timeout {}s)",
            config.base_url,
            config.request_timeout.as_secs()
        );
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Absolute URL for an API path such as `/api/panel-info`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
