use super::*;

// =============================================================================
// user_error_to_status
// =============================================================================

#[test]
fn user_errors_map_to_statuses() {
    assert_eq!(user_error_to_status(&UserError::Invalid("x".to_owned())), StatusCode::BAD_REQUEST);
    assert_eq!(user_error_to_status(&UserError::EmailTaken), StatusCode::CONFLICT);
    assert_eq!(user_error_to_status(&UserError::UsernameTaken), StatusCode::CONFLICT);
    assert_eq!(user_error_to_status(&UserError::InvalidCredentials), StatusCode::UNAUTHORIZED);
    assert_eq!(user_error_to_status(&UserError::Hash("x".to_owned())), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn conflict_messages_name_the_duplicate_field() {
    assert_eq!(UserError::EmailTaken.to_string(), "email already exists");
    assert_eq!(UserError::UsernameTaken.to_string(), "username already exists");
    assert_eq!(UserError::InvalidCredentials.to_string(), "Invalid login credentials");
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only() {
    let cookie = session_cookie("abc".to_owned(), Duration::hours(24), false);
    assert_eq!(cookie.name(), TOKEN_COOKIE);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::hours(24)));
    assert_ne!(cookie.secure(), Some(true));
}

#[test]
fn username_cookie_is_readable_by_scripts() {
    let cookie = username_cookie("alice01".to_owned(), Duration::hours(24), true);
    assert_eq!(cookie.name(), USERNAME_COOKIE);
    assert_ne!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
}

#[test]
fn expired_session_cookie_has_zero_max_age() {
    let cookie = session_cookie(String::new(), Duration::ZERO, false);
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert!(cookie.value().is_empty());
}
