//! The logout flow: sign out, re-check auth, forward status, go home.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LogoutControl` is what a logout button activates. Every collaborator is
//! injected: the network (`AuthApi`), the host's status setter
//! (`StatusSink`), the router (`Navigator`) and the phase cell
//! (`PhaseStore`).
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged once and returned to the caller; nothing is retried
//! and nothing is surfaced to the user. The sink and navigator only run
//! after both requests succeed, so a failure never leaves partial state.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use std::cell::Cell;

use leptos::prelude::*;

use crate::config::DEFAULT_HOME_PATH;
use crate::net::api::AuthApi;
use crate::net::error::{LogoutError, RequestError};
use crate::net::types::AuthStatus;
use crate::state::logout::{LogoutPhase, PhaseStore};

/// Receives the auth status after a successful logout.
pub trait StatusSink {
    fn set_status(&self, status: AuthStatus);
}

impl<F> StatusSink for F
where
    F: Fn(AuthStatus),
{
    fn set_status(&self, status: AuthStatus) {
        self(status);
    }
}

impl StatusSink for Callback<AuthStatus> {
    fn set_status(&self, status: AuthStatus) {
        self.run(status);
    }
}

/// Moves the user to another route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Outcome of a single [`LogoutControl::activate`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum Activation {
    /// Both requests succeeded; the status was forwarded and navigation ran.
    Completed(AuthStatus),
    /// A request failed; no status was forwarded and no navigation ran.
    Failed(LogoutError),
    /// A previous activation was still pending; nothing was sent.
    Ignored,
}

/// Log out, then fetch the resulting auth status.
///
/// The status query only starts once the logout request has succeeded.
///
/// # Errors
///
/// Returns [`LogoutError::LogoutFailed`] if the logout request fails and
/// [`LogoutError::StatusCheckFailed`] if the status query fails or its body
/// carries no `auth_status`.
pub async fn sign_out<A: AuthApi>(api: &A) -> Result<AuthStatus, LogoutError> {
    api.logout().await.map_err(LogoutError::LogoutFailed)?;
    let body = api.check_auth().await.map_err(LogoutError::StatusCheckFailed)?;
    body.auth_status
        .ok_or(LogoutError::StatusCheckFailed(RequestError::MissingField("auth_status")))
}

/// A logout trigger wired to its collaborators.
///
/// Holds no domain state besides its phase; every activation re-runs both
/// requests.
pub struct LogoutControl<A, S, N, P = Cell<LogoutPhase>> {
    api: A,
    sink: S,
    navigator: N,
    phase: P,
    home_path: String,
}

impl<A, S, N> LogoutControl<A, S, N> {
    pub fn new(api: A, sink: S, navigator: N) -> Self {
        Self {
            api,
            sink,
            navigator,
            phase: Cell::new(LogoutPhase::Idle),
            home_path: DEFAULT_HOME_PATH.to_owned(),
        }
    }
}

impl<A, S, N, P> LogoutControl<A, S, N, P> {
    /// Swap the phase storage, e.g. for a signal the view also reads.
    pub fn with_phase<Q: PhaseStore>(self, phase: Q) -> LogoutControl<A, S, N, Q> {
        LogoutControl {
            api: self.api,
            sink: self.sink,
            navigator: self.navigator,
            phase,
            home_path: self.home_path,
        }
    }

    #[must_use]
    pub fn with_home_path(mut self, home_path: impl Into<String>) -> Self {
        self.home_path = home_path.into();
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }
}

impl<A, S, N, P: PhaseStore> LogoutControl<A, S, N, P> {
    pub fn phase(&self) -> LogoutPhase {
        self.phase.load()
    }
}

impl<A, S, N, P> LogoutControl<A, S, N, P>
where
    A: AuthApi,
    S: StatusSink,
    N: Navigator,
    P: PhaseStore,
{
    /// Run the logout flow once.
    ///
    /// Ignored while a previous activation is pending. Otherwise the phase
    /// is `Pending` for the duration of the requests and `Settled` after.
    pub async fn activate(&self) -> Activation {
        if !self.phase.load().accepts_activation() {
            log::debug!("logout already in flight; ignoring activation");
            return Activation::Ignored;
        }
        self.phase.store(LogoutPhase::Pending);

        let outcome = match sign_out(&self.api).await {
            Ok(status) => {
                self.sink.set_status(status.clone());
                self.navigator.navigate(&self.home_path);
                log::info!("logged out; auth status is now {status}");
                Activation::Completed(status)
            }
            Err(err) => {
                log::warn!("error logging out: {err}");
                Activation::Failed(err)
            }
        };

        self.phase.store(LogoutPhase::Settled);
        outcome
    }
}
