//! Native [`AuthApi`] over `reqwest`.
//!
//! Used by the CLI and by end-to-end tests; the browser uses the gloo-net
//! transport in `client` instead.

use async_trait::async_trait;

use crate::api::{ApiError, AuthApi, Endpoints};
use crate::wire::{ErrorBody, LoginRequest, LoginResponse, RegistrationForm};

/// reqwest-backed auth client.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(endpoints: Endpoints) -> Self {
        Self { client: reqwest::Client::new(), endpoints }
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

/// Turn a non-2xx response into [`ApiError::Rejected`], reading `{message}`
/// from the body when it is JSON.
async fn rejection(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    let raw = resp.text().await.unwrap_or_default();
    ApiError::rejected(status, ErrorBody::message_from_raw(&raw))
}

fn network(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let resp = self
            .client
            .post(self.endpoints.login())
            .json(request)
            .send()
            .await
            .map_err(network)?;
        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn register(&self, form: &RegistrationForm) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.endpoints.register())
            .json(form)
            .send()
            .await
            .map_err(network)?;
        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.endpoints.logout())
            .send()
            .await
            .map_err(network)?;
        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }
        Ok(())
    }
}
