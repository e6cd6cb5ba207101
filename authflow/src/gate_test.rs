use super::*;
use crate::storage::MemoryTokenStore;

#[test]
fn missing_token_redirects_to_login() {
    let store = MemoryTokenStore::new();
    assert_eq!(check_gate(&store), GateDecision::Redirect("/login"));
    assert!(!check_gate(&store).is_authenticated());
}

#[test]
fn empty_token_redirects_to_login() {
    let store = MemoryTokenStore::with_token("");
    assert_eq!(check_gate(&store), GateDecision::Redirect("/login"));
}

#[test]
fn any_non_empty_token_renders() {
    for token in ["eyJhbGciOiJIUzI1NiJ9.e30.sig", "expired", "garbage!!"] {
        let store = MemoryTokenStore::with_token(token);
        assert_eq!(check_gate(&store), GateDecision::Render, "token {token:?}");
    }
}
