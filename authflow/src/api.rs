//! Transport seam for the three auth endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`ApiError`] so the controller can map it to
//! exactly one user-facing message without knowing the transport.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use crate::wire::{LoginRequest, LoginResponse, RegistrationForm};

/// Default base URL of the auth API.
pub const DEFAULT_API_BASE: &str = "http://localhost:8079";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The request never completed (connection refused, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    #[must_use]
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }
}

/// Async client for the auth API.
///
/// Futures are `?Send` so the browser transport (single-threaded WASM) can
/// implement it directly.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `POST /register`.
    async fn register(&self, form: &RegistrationForm) -> Result<(), ApiError>;

    /// `POST /logout`, cookie-credentialed.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Absolute endpoint URLs derived from one base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl Endpoints {
    #[must_use]
    pub fn new(base: impl AsRef<str>) -> Self {
        Self { base: base.as_ref().trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn login(&self) -> String {
        format!("{}/login", self.base)
    }

    #[must_use]
    pub fn register(&self) -> String {
        format!("{}/register", self.base)
    }

    #[must_use]
    pub fn logout(&self) -> String {
        format!("{}/logout", self.base)
    }
}
