#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Chrome toggles shared across the home page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Sidebar drawer open on narrow screens.
    pub sidebar_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
