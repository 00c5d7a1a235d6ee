//! API origin and timeout configuration.
//!
//! The base URL comes from the single variable `DASHBOARD_API_URL`, read at
//! run time for native builds and baked in at compile time for the browser
//! bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_URL_ENV: &str = "DASHBOARD_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {API_URL_ENV} '{0}' (expected an http:// or https:// origin)")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ApiTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeouts: ApiTimeouts,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned(), timeouts: ApiTimeouts::default() }
    }
}

impl ApiConfig {
    /// Build config from `DASHBOARD_API_URL` in the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_base_url(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Build config from `DASHBOARD_API_URL` as captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value is not an http(s) URL.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_base_url(option_env!("DASHBOARD_API_URL"))
    }

    /// Build config from an optional raw origin, defaulting when absent or blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value is not an http(s) URL.
    pub fn from_base_url(raw: Option<&str>) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(raw)?;
        Ok(Self { base_url, timeouts: ApiTimeouts::default() })
    }

    /// Absolute URL for an API path such as `/auth/me`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}
