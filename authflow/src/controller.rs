//! Login/register form controller.
//!
//! ARCHITECTURE
//! ============
//! Each submission is split into `begin_*` (synchronous: clear messages,
//! validate, mark busy, build the request) and `finish_*` (synchronous: map
//! the transport result onto messages, storage and navigation). The page
//! awaits the transport in between without holding a borrow on the form.
//! `submit_*` composes the three steps for callers that own the form outright.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use crate::api::{ApiError, AuthApi};
use crate::email::is_valid_email;
use crate::storage::TokenStore;
use crate::wire::{FieldInput, LoginRequest, LoginResponse, RegistrationField, RegistrationForm};
use crate::{HOME_ROUTE, LOGIN_ROUTE};

/// Delay between a successful submission and the follow-up navigation.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// User-facing message texts.
pub mod messages {
    pub const INVALID_EMAIL: &str = "Please enter a valid email.";
    pub const LOGIN_FALLBACK: &str = "Login failed, check your credentials.";
    pub const REGISTER_FALLBACK: &str = "Something went wrong.";
    pub const NETWORK: &str = "Network error, please try again.";
    pub const STORAGE: &str = "Could not save your session, please try again.";
    pub const LOGIN_SUCCESS: &str = "Login successful!";
    pub const REGISTER_SUCCESS: &str = "Registration successful!";

    /// Prefix a server-reported failure.
    #[must_use]
    pub fn server_error(message: &str) -> String {
        format!("Error: {message}")
    }
}

/// Which form is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

/// Deferred navigation requested by a successful submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub to: &'static str,
    pub after: Duration,
}

/// Transient state of the auth page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: FormMode,
    /// Login email input.
    pub email: String,
    /// Login password input.
    pub password: String,
    pub registration: RegistrationForm,
    pub error: String,
    pub success: String,
    /// A submission is in flight; further submits are ignored.
    pub busy: bool,
}

impl AuthForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        };
    }

    pub fn show_login(&mut self) {
        self.mode = FormMode::Login;
    }

    pub fn set_registration_field(&mut self, field: RegistrationField, input: FieldInput) {
        self.registration.set(field, input);
    }

    fn clear_messages(&mut self) {
        self.error.clear();
        self.success.clear();
    }

    /// Start a login submission.
    ///
    /// Returns `None` when a submission is already running or the email is
    /// malformed; in the latter case the validation message is set and no
    /// request must be issued.
    pub fn begin_login(&mut self) -> Option<LoginRequest> {
        if self.busy {
            return None;
        }
        self.clear_messages();
        if !is_valid_email(&self.email) {
            self.error = messages::INVALID_EMAIL.to_owned();
            return None;
        }
        self.busy = true;
        Some(LoginRequest { email: self.email.clone(), password: self.password.clone() })
    }

    /// Apply the outcome of `POST /login`.
    pub fn finish_login<S: TokenStore + ?Sized>(
        &mut self,
        result: Result<LoginResponse, ApiError>,
        store: &S,
    ) -> Option<Navigation> {
        self.busy = false;
        match result {
            Ok(response) => {
                if let Err(e) = store.set(&response.token) {
                    log::error!("failed to persist session token: {e}");
                    self.error = messages::STORAGE.to_owned();
                    return None;
                }
                self.success = messages::LOGIN_SUCCESS.to_owned();
                Some(Navigation { to: HOME_ROUTE, after: REDIRECT_DELAY })
            }
            Err(e) => {
                self.error = failure_message(&e, messages::LOGIN_FALLBACK);
                None
            }
        }
    }

    /// Start a registration submission. No client-side validation applies.
    pub fn begin_register(&mut self) -> Option<RegistrationForm> {
        if self.busy {
            return None;
        }
        self.clear_messages();
        self.busy = true;
        Some(self.registration.clone())
    }

    /// Apply the outcome of `POST /register`.
    pub fn finish_register(&mut self, result: Result<(), ApiError>) -> Option<Navigation> {
        self.busy = false;
        match result {
            Ok(()) => {
                self.success = messages::REGISTER_SUCCESS.to_owned();
                self.registration = RegistrationForm::default();
                Some(Navigation { to: LOGIN_ROUTE, after: REDIRECT_DELAY })
            }
            Err(e) => {
                self.error = failure_message(&e, messages::REGISTER_FALLBACK);
                None
            }
        }
    }

    /// Validate, submit and apply a login in one call.
    pub async fn submit_login<A, S>(&mut self, api: &A, store: &S) -> Option<Navigation>
    where
        A: AuthApi + ?Sized,
        S: TokenStore + ?Sized,
    {
        let request = self.begin_login()?;
        let result = api.login(&request).await;
        self.finish_login(result, store)
    }

    /// Submit and apply a registration in one call.
    pub async fn submit_register<A>(&mut self, api: &A) -> Option<Navigation>
    where
        A: AuthApi + ?Sized,
    {
        let form = self.begin_register()?;
        let result = api.register(&form).await;
        self.finish_register(result)
    }
}

/// Map a transport failure onto the text shown under the form.
fn failure_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Rejected { status, message } => {
            log::warn!("auth request rejected with status {status}");
            messages::server_error(message.as_deref().filter(|m| !m.is_empty()).unwrap_or(fallback))
        }
        ApiError::Network(detail) | ApiError::Decode(detail) => {
            log::error!("auth request failed: {detail}");
            messages::NETWORK.to_owned()
        }
    }
}

/// Call `POST /logout` and, on success, ask for the login route.
///
/// The stored token is left untouched.
///
/// # Errors
///
/// Returns the transport error when the logout request fails.
pub async fn logout<A: AuthApi + ?Sized>(api: &A) -> Result<Navigation, ApiError> {
    match api.logout().await {
        Ok(()) => Ok(Navigation { to: LOGIN_ROUTE, after: Duration::ZERO }),
        Err(e) => {
            log::error!("logout failed: {e}");
            Err(e)
        }
    }
}
