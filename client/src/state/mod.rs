//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! `auth` for the gate result, `ui` for chrome toggles, `nav` and `feed` for
//! the static sidebar and home-page content.

pub mod auth;
pub mod feed;
pub mod nav;
pub mod ui;
