//! Endpoint and navigation configuration for the logout flow.
//!
//! Defaults match the backend's routes. `from_env` lets native callers
//! point the flow at a differently mounted API.

use std::time::Duration;

pub const DEFAULT_LOGOUT_ENDPOINT: &str = "/api/logout";
pub const DEFAULT_CHECK_AUTH_ENDPOINT: &str = "/api/check_auth";
pub const DEFAULT_HOME_PATH: &str = "/";

/// Errors produced while building or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An endpoint or route does not start with `/`.
    #[error("{field} must be an absolute path, got `{value}`")]
    RelativePath { field: &'static str, value: String },

    /// A base URL is not an `http://` or `https://` URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The request timeout could not be parsed as whole seconds.
    #[error("invalid request timeout: {0}")]
    InvalidTimeout(String),

    /// The native HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Where the flow sends its requests and where it navigates afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutConfig {
    pub logout_endpoint: String,
    pub check_auth_endpoint: String,
    pub home_path: String,
    /// Per-request timeout. Only the native backend honours it; browser
    /// requests stay pending until the network settles them.
    pub request_timeout: Option<Duration>,
}

impl Default for LogoutConfig {
    fn default() -> Self {
        Self {
            logout_endpoint: DEFAULT_LOGOUT_ENDPOINT.to_owned(),
            check_auth_endpoint: DEFAULT_CHECK_AUTH_ENDPOINT.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            request_timeout: None,
        }
    }
}

impl LogoutConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `LOGOUT_ENDPOINT`: default `/api/logout`
    /// - `CHECK_AUTH_ENDPOINT`: default `/api/check_auth`
    /// - `LOGOUT_HOME_PATH`: default `/`
    /// - `LOGOUT_REQUEST_TIMEOUT_SECS`: unset means no timeout
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value fails to parse or validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let request_timeout = match lookup("LOGOUT_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(parse_timeout_secs(&raw)?),
            None => None,
        };

        let config = Self {
            logout_endpoint: lookup("LOGOUT_ENDPOINT").unwrap_or(defaults.logout_endpoint),
            check_auth_endpoint: lookup("CHECK_AUTH_ENDPOINT").unwrap_or(defaults.check_auth_endpoint),
            home_path: lookup("LOGOUT_HOME_PATH").unwrap_or(defaults.home_path),
            request_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every endpoint and route is an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RelativePath`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_absolute("logout_endpoint", &self.logout_endpoint)?;
        ensure_absolute("check_auth_endpoint", &self.check_auth_endpoint)?;
        ensure_absolute("home_path", &self.home_path)
    }

    #[must_use]
    pub fn with_home_path(mut self, home_path: impl Into<String>) -> Self {
        self.home_path = home_path.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

fn ensure_absolute(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with('/') {
        Ok(())
    } else {
        Err(ConfigError::RelativePath { field, value: value.to_owned() })
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidTimeout(raw.to_owned())),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
