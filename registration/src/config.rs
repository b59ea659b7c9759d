//! Registration service endpoint configuration.
//!
//! The flow never reads the environment itself; each front end resolves a
//! [`BackendConfig`] at startup and passes it down.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

pub const REGISTER_PATH: &str = "/api/register";
pub const REGISTRATIONS_PATH: &str = "/api/registrations";
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid backend URL '{0}': expected an http:// or https:// address")]
    InvalidBaseUrl(String),
}

/// Where the registration service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8080`.
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl BackendConfig {
    /// Resolve an optional, possibly blank base URL.
    ///
    /// `None` or whitespace falls back to [`DEFAULT_BACKEND_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the value is not an
    /// `http://` or `https://` address.
    pub fn from_base_url(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(Self::default());
        };
        if !(raw.starts_with("http://") || raw.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
        }
        Ok(Self { base_url: raw.trim_end_matches('/').to_owned(), ..Self::default() })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}{REGISTER_PATH}", self.base_url)
    }

    #[must_use]
    pub fn registrations_url(&self) -> String {
        format!("{}{REGISTRATIONS_PATH}", self.base_url)
    }

    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}{HEALTH_PATH}", self.base_url)
    }
}
