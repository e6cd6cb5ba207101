//! Shared auth contract for the snetwork front-end.
//!
//! This crate owns everything about the session handshake that does not need a
//! browser: the JSON bodies exchanged with the auth API, the email check, the
//! token-store seam, the auth gate decision, and the login/register form
//! controller. The Leptos `client`, the `cli` and the server's end-to-end tests
//! all drive the same [`AuthForm`] so the observable behavior cannot drift
//! between surfaces.
//!
//! Transport is abstracted behind [`AuthApi`]. The browser implementation lives
//! in `client` (gloo-net); a native one is available here behind the `native`
//! feature (reqwest).

pub mod api;
pub mod controller;
pub mod email;
pub mod gate;
#[cfg(feature = "native")]
pub mod http;
pub mod storage;
pub mod wire;

pub use api::{ApiError, AuthApi, Endpoints};
pub use controller::{AuthForm, FormMode, Navigation, REDIRECT_DELAY, logout, messages};
pub use email::is_valid_email;
pub use gate::{GateDecision, check_gate};
pub use storage::{AUTH_TOKEN_KEY, MemoryTokenStore, StorageError, TokenStore};
#[cfg(feature = "native")]
pub use http::HttpAuthApi;
pub use wire::{
    ErrorBody, FieldInput, LoginRequest, LoginResponse, MessageBody, RegistrationField, RegistrationForm,
};

/// Client route for the auth forms.
pub const LOGIN_ROUTE: &str = "/login";
/// Client route for the protected home feed.
pub const HOME_ROUTE: &str = "/";
