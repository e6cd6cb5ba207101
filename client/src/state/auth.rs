//! Auth-gate state for the current page view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written once by the gate effect on protected routes; read by pages to pick
//! between the "Redirecting..." placeholder and protected content.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use authflow::GateDecision;

/// Result of the token-presence check.
///
/// `checked` stays false until the gate has run in the browser, so SSR and
/// the first hydrated frame both render the placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub checked: bool,
    pub authenticated: bool,
}

impl AuthState {
    #[must_use]
    pub fn from_decision(decision: GateDecision) -> Self {
        Self { checked: true, authenticated: decision.is_authenticated() }
    }

    /// Protected content may be shown.
    #[must_use]
    pub fn can_render(&self) -> bool {
        self.checked && self.authenticated
    }
}
