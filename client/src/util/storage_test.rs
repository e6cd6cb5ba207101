#![cfg(not(feature = "hydrate"))]

use authflow::{GateDecision, check_gate};

use super::*;

#[test]
fn store_is_empty_outside_browser() {
    assert_eq!(BrowserTokenStore.get(), None);
}

#[test]
fn writes_are_refused_outside_browser() {
    assert!(matches!(BrowserTokenStore.set("tok"), Err(StorageError::Unavailable)));
    assert!(BrowserTokenStore.remove().is_err());
}

#[test]
fn gate_redirects_when_rendering_on_server() {
    assert_eq!(check_gate(&BrowserTokenStore), GateDecision::Redirect("/login"));
}
