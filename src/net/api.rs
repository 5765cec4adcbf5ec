//! Auth REST port and the browser backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent with
//! `RequestCredentials::Include` so the session cookie travels along.
//! Elsewhere the flow is driven through another `AuthApi` implementation
//! (the `native` backend or a test double).
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped to a [`RequestError`] so the flow can tag it with
//! the step it came from instead of collapsing both calls into one error.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::RequestError;
use super::types::CheckAuthResponse;

#[cfg(feature = "hydrate")]
use crate::config::LogoutConfig;

/// Network capability the logout flow needs.
///
/// Futures are not required to be `Send`; the flow runs on a single-threaded
/// UI task queue.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST` the logout endpoint. The response body is ignored.
    async fn logout(&self) -> Result<(), RequestError>;

    /// `GET` the auth-status endpoint and decode its body.
    async fn check_auth(&self) -> Result<CheckAuthResponse, RequestError>;
}

#[cfg(any(test, feature = "hydrate", feature = "native"))]
pub(crate) fn ensure_success(status: u16) -> Result<(), RequestError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RequestError::Status(status))
    }
}

#[cfg(any(test, feature = "native"))]
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Same-origin browser backend built on `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug, Default)]
pub struct BrowserAuthApi {
    config: LogoutConfig,
}

#[cfg(feature = "hydrate")]
impl BrowserAuthApi {
    pub fn new(config: LogoutConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "hydrate")]
impl AuthApi for BrowserAuthApi {
    async fn logout(&self) -> Result<(), RequestError> {
        let resp = gloo_net::http::Request::post(&self.config.logout_endpoint)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        ensure_success(resp.status())
    }

    async fn check_auth(&self) -> Result<CheckAuthResponse, RequestError> {
        let resp = gloo_net::http::Request::get(&self.config.check_auth_endpoint)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        ensure_success(resp.status())?;
        resp.json::<CheckAuthResponse>()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }
}
