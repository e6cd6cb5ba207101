//! Browser transport for the auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with a network error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an `authflow::ApiError`; the form controller
//! decides what the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use authflow::api::DEFAULT_API_BASE;
use authflow::{ApiError, AuthApi, Endpoints, LoginRequest, LoginResponse, RegistrationForm};

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE: &str = "not available on server";

/// Base URL of the auth API, overridable at build time with
/// `SNETWORK_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("SNETWORK_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// `fetch`-backed auth client.
#[derive(Clone, Debug)]
pub struct BrowserAuthApi {
    endpoints: Endpoints,
}

impl Default for BrowserAuthApi {
    fn default() -> Self {
        Self { endpoints: Endpoints::new(api_base()) }
    }
}

impl BrowserAuthApi {
    #[must_use]
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

#[cfg(feature = "hydrate")]
async fn rejection(resp: gloo_net::http::Response) -> ApiError {
    let raw = resp.text().await.unwrap_or_default();
    ApiError::rejected(resp.status(), authflow::ErrorBody::message_from_raw(&raw))
}

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[async_trait(?Send)]
impl AuthApi for BrowserAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoints.login())
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &self.endpoints);
            Err(ApiError::Network(UNAVAILABLE.to_owned()))
        }
    }

    async fn register(&self, form: &RegistrationForm) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoints.register())
                .json(form)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            Err(ApiError::Network(UNAVAILABLE.to_owned()))
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoints.logout())
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Network(UNAVAILABLE.to_owned()))
        }
    }
}
