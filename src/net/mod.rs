//! Networking for the logout flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `AuthApi` port and the browser backend, `native` the
//! `reqwest` backend, `types` the wire schema and `error` the failure
//! taxonomy shared by both backends.

pub mod api;
pub mod error;
#[cfg(feature = "native")]
pub mod native;
pub mod types;
