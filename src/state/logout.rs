//! In-flight phase of a logout control.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flow consults the phase to drop re-entrant activations, and the
//! button reads it to disable itself and swap its label.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use std::cell::Cell;

use leptos::prelude::*;

/// Lifecycle of the most recent activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoutPhase {
    /// Never activated.
    #[default]
    Idle,
    /// Requests are in flight; further activations are ignored.
    Pending,
    /// The last activation finished, successfully or not.
    Settled,
}

impl LogoutPhase {
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    /// Whether a new activation may start from this phase.
    pub fn accepts_activation(self) -> bool {
        !self.is_pending()
    }
}

/// Storage for a control's phase.
pub trait PhaseStore {
    fn load(&self) -> LogoutPhase;
    fn store(&self, phase: LogoutPhase);
}

impl PhaseStore for Cell<LogoutPhase> {
    fn load(&self) -> LogoutPhase {
        self.get()
    }

    fn store(&self, phase: LogoutPhase) {
        self.set(phase);
    }
}

/// Reactive phase, so views re-render as the flow advances.
///
/// A disposed signal (control unmounted mid-flight) reads as `Idle` and
/// ignores writes.
impl PhaseStore for RwSignal<LogoutPhase> {
    fn load(&self) -> LogoutPhase {
        self.try_get_untracked().unwrap_or_default()
    }

    fn store(&self, phase: LogoutPhase) {
        self.set(phase);
    }
}
