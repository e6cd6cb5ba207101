//! Auth gate: decide between protected content and a login redirect.
//!
//! The gate is a presence check on the stored token. It does not inspect the
//! token, so expired or forged values still render protected content.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::LOGIN_ROUTE;
use crate::storage::TokenStore;

/// Outcome of the gate check for a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// A token is present; render protected content.
    Render,
    /// No token; navigate to the given route and show a placeholder meanwhile.
    Redirect(&'static str),
}

impl GateDecision {
    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Run the gate against `store`.
pub fn check_gate<S: TokenStore + ?Sized>(store: &S) -> GateDecision {
    match store.get() {
        Some(token) if !token.is_empty() => GateDecision::Render,
        _ => {
            log::debug!("no session token stored; redirecting to {LOGIN_ROUTE}");
            GateDecision::Redirect(LOGIN_ROUTE)
        }
    }
}
