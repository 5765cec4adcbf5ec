//! `reqwest` backend for running the logout flow outside the browser.
//!
//! The client keeps a cookie store, which is the native equivalent of the
//! browser's credentialed requests: a session cookie picked up at login is
//! replayed to both auth endpoints.

#[cfg(test)]
#[path = "native_test.rs"]
mod native_test;

use super::api::{AuthApi, endpoint_url, ensure_success};
use super::error::RequestError;
use super::types::CheckAuthResponse;
use crate::config::{ConfigError, LogoutConfig};

/// Auth backend for native callers, resolved against a base URL.
#[derive(Clone, Debug)]
pub struct NativeAuthApi {
    client: reqwest::Client,
    logout_url: String,
    check_auth_url: String,
}

impl NativeAuthApi {
    /// Build a backend with its own cookie-storing client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL or config is invalid, or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, config: &LogoutConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Self::with_client(client, base_url, config)
    }

    /// Reuse an existing client, e.g. one that already holds a session.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL or config is invalid.
    pub fn with_client(client: reqwest::Client, base_url: &str, config: &LogoutConfig) -> Result<Self, ConfigError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_owned()));
        }
        config.validate()?;

        Ok(Self {
            client,
            logout_url: endpoint_url(base_url, &config.logout_endpoint),
            check_auth_url: endpoint_url(base_url, &config.check_auth_endpoint),
        })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl AuthApi for NativeAuthApi {
    async fn logout(&self) -> Result<(), RequestError> {
        let resp = self
            .client
            .post(&self.logout_url)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        ensure_success(resp.status().as_u16())
    }

    async fn check_auth(&self) -> Result<CheckAuthResponse, RequestError> {
        let resp = self
            .client
            .get(&self.check_auth_url)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        ensure_success(resp.status().as_u16())?;
        resp.json::<CheckAuthResponse>()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }
}
