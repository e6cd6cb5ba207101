//! Auth routes: login, registration and logout.
//!
//! ERROR HANDLING
//! ==============
//! Every failure answers `{"message": ...}` so the browser can show it after
//! the `Error: ` prefix. Malformed JSON bodies become 400 with a fixed text
//! instead of axum's plain-text rejection.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use authflow::{ErrorBody, LoginRequest, LoginResponse, MessageBody, RegistrationForm};
use time::Duration;
use tracing::{error, info, warn};

use crate::services::users::UserError;
use crate::state::AppState;

pub const TOKEN_COOKIE: &str = "token";
pub const USERNAME_COOKIE: &str = "username";
const INVALID_PAYLOAD: &str = "Invalid request payload";

// =============================================================================
// HELPERS
// =============================================================================

fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

pub(crate) fn user_error_to_status(err: &UserError) -> StatusCode {
    match err {
        UserError::Invalid(_) => StatusCode::BAD_REQUEST,
        UserError::EmailTaken | UserError::UsernameTaken => StatusCode::CONFLICT,
        UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        UserError::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn user_failure(err: UserError) -> Response {
    let status = user_error_to_status(&err);
    if status.is_server_error() {
        error!(error = %err, "auth request failed");
        return failure(status, "Internal server error");
    }
    failure(status, err.to_string())
}

pub(crate) fn session_cookie(token: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

pub(crate) fn username_cookie(username: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((USERNAME_COOKIE, username))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /login`: `email` may hold an email address or a username.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = body else {
        return failure(StatusCode::BAD_REQUEST, INVALID_PAYLOAD);
    };
    if request.email.is_empty() || request.password.is_empty() {
        return user_failure(UserError::InvalidCredentials);
    }

    let user = match state.users.authenticate(&request.email, &request.password).await {
        Ok(user) => user,
        Err(e) => {
            warn!(identifier = %request.email, "login rejected");
            return user_failure(e);
        }
    };

    let token = match state.tokens.issue(user.id, &user.username) {
        Ok(token) => token,
        Err(e) => {
            error!(error = %e, "token signing failed");
            return failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    let ttl = Duration::seconds(i64::try_from(state.tokens.ttl().as_secs()).unwrap_or(i64::MAX));
    let secure = state.config.cookie_secure;
    let jar = jar
        .add(session_cookie(token.clone(), ttl, secure))
        .add(username_cookie(user.username.clone(), ttl, secure));

    info!(user_id = %user.id, "login succeeded");
    (jar, Json(LoginResponse { token, message: Some("Login successful".to_owned()) })).into_response()
}

/// `POST /register`: store a new account; 201 on success.
pub async fn register(State(state): State<AppState>, body: Result<Json<RegistrationForm>, JsonRejection>) -> Response {
    let Ok(Json(form)) = body else {
        return failure(StatusCode::BAD_REQUEST, INVALID_PAYLOAD);
    };

    match state.users.register(form).await {
        Ok(_) => (StatusCode::CREATED, Json(MessageBody::new("User registered successfully"))).into_response(),
        Err(e) => {
            warn!(error = %e, "registration rejected");
            user_failure(e)
        }
    }
}

/// `POST /logout`: expire the session cookie. Always 200 with an empty body.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let cookie = session_cookie(String::new(), Duration::ZERO, state.config.cookie_secure);
    (jar.add(cookie), StatusCode::OK)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
