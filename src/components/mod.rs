//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the control surface and hand activation off to the
//! framework-independent flow in `util`.

pub mod logout_button;
