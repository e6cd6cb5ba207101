use super::*;

#[test]
fn sidebar_starts_closed() {
    assert!(!UiState::default().sidebar_open);
}

#[test]
fn toggle_sidebar_flips_state() {
    let mut ui = UiState::default();
    ui.toggle_sidebar();
    assert!(ui.sidebar_open);
    ui.toggle_sidebar();
    assert!(!ui.sidebar_open);
}
