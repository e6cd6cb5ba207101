//! snetwork host: the auth API on port 8079 and the server-rendered front-end.
//!
//! The binary in `main.rs` wires these modules together; the library split
//! lets the end-to-end tests mount `routes::api_router` on an ephemeral port.

#![recursion_limit = "256"]

pub mod config;
pub mod routes;
pub mod services;
pub mod state;
