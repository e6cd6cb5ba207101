//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes install the same gate; auth forms schedule the same
//! delayed navigation after a successful submission.

use std::time::Duration;

use authflow::{GateDecision, check_gate};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::storage::BrowserTokenStore;

/// Run the token-presence gate once the page is live in the browser.
///
/// Publishes the result to `auth` and navigates to the login route when no
/// token is stored.
pub fn install_auth_gate<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let decision = check_gate(&BrowserTokenStore);
        auth.set(AuthState::from_decision(decision));
        if let GateDecision::Redirect(to) = decision {
            navigate(to, NavigateOptions::default());
        }
    });
}

/// Signal-driven navigation: writing `Some(route)` navigates there once.
///
/// Lets async handlers request a route change without holding the navigate
/// closure themselves.
pub fn install_redirect<F>(navigate: F) -> RwSignal<Option<&'static str>>
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let redirect = RwSignal::new(None::<&'static str>);
    Effect::new(move || {
        if let Some(to) = redirect.get() {
            redirect.set(None);
            navigate(to, NavigateOptions::default());
        }
    });
    redirect
}

/// Run `action` after `delay` on the browser event loop.
pub fn run_after<F>(delay: Duration, action: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if !delay.is_zero() {
            gloo_timers::future::sleep(delay).await;
        }
        action();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, action);
    }
}
