//! Wire types for the auth endpoints.
//!
//! DESIGN
//! ======
//! `AuthStatus` stays an opaque JSON value: the backend owns its shape and
//! the logout flow only forwards it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Authentication state as reported by the status-check endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthStatus(Value);

impl AuthStatus {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// True only when the backend reported a literal JSON `true`.
    pub fn is_authenticated(&self) -> bool {
        self.0.as_bool() == Some(true)
    }
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Body of `GET /api/check_auth`.
///
/// Only `auth_status` drives the logout flow; the identity fields are kept
/// for hosts that want to show who is signed in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckAuthResponse {
    /// `None` when the field is absent or `null`.
    pub auth_status: Option<AuthStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Reason string the backend attaches when no session was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
