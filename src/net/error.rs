//! Failure taxonomy for the logout flow.

/// Why a single auth request failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request never produced a response (DNS, connection, CORS, timeout).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The response decoded but lacked a required field.
    #[error("missing expected field `{0}`")]
    MissingField(&'static str),
}

/// Which step of the logout flow failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    #[error("logout request failed: {0}")]
    LogoutFailed(RequestError),

    #[error("auth status check failed: {0}")]
    StatusCheckFailed(RequestError),
}

impl LogoutError {
    pub fn request_error(&self) -> &RequestError {
        match self {
            Self::LogoutFailed(err) | Self::StatusCheckFailed(err) => err,
        }
    }
}
