//! Domain services behind the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Routes stay thin: they decode requests, call into these modules, and map
//! service errors onto status codes.

pub mod token;
pub mod users;
pub mod validation;
