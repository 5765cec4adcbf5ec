//! Client-side state for the logout control.
//!
//! DESIGN
//! ======
//! The auth status itself is owned by the host application; only the
//! control's own in-flight phase lives here.

pub mod logout;
