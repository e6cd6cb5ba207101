//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the browser transport for the auth endpoints; request/response
//! shapes come from `authflow::wire`.

pub mod api;
