//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (sidebar, feed cards, form fields) and read
//! or write shared state from Leptos context providers.

pub mod feed;
pub mod icon;
pub mod register_field;
pub mod sidebar;
