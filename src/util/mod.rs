//! Framework-independent helpers behind the UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeping the logout flow out of the component lets it run against test
//! doubles and native backends without a mounted Leptos tree.

pub mod logout;
