//! # logout-control
//!
//! Leptos logout button plus the framework-independent flow behind it.
//!
//! Activating the control posts to the logout endpoint, re-queries the
//! auth status, hands the status to a caller-supplied sink and navigates
//! home. The network, the status sink, navigation and the in-flight phase
//! are all injected ports, so the flow runs the same in the browser, on a
//! native runtime, and in tests.

pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

pub use components::logout_button::LogoutButton;
pub use config::LogoutConfig;
pub use net::api::AuthApi;
pub use net::error::{LogoutError, RequestError};
pub use net::types::{AuthStatus, CheckAuthResponse};
pub use state::logout::{LogoutPhase, PhaseStore};
pub use util::logout::{Activation, LogoutControl, Navigator, StatusSink};

/// Route `log` output to the browser console and surface panics there.
///
/// Call once from the host application's hydrate entry point.
#[cfg(feature = "hydrate")]
pub fn init_browser_diagnostics() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
