//! End-to-end auth flow: the shared form controller driving the real API
//! router over HTTP on an ephemeral port.

use std::net::SocketAddr;

use authflow::{
    AuthApi, AuthForm, Endpoints, FormMode, HttpAuthApi, MemoryTokenStore, MessageBody, Navigation, REDIRECT_DELAY,
    RegistrationForm, TokenStore, logout, messages,
};
use snetwork::config::Config;
use snetwork::routes::api_router;
use snetwork::services::token::TokenIssuer;
use snetwork::state::AppState;
use tokio::net::TcpListener;

const SECRET: &str = "e2e-secret";
const ORIGIN: &str = "http://localhost:3000";

// =============================================================================
// Helpers
// =============================================================================

async fn spawn_api() -> (SocketAddr, AppState) {
    let config = Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(SECRET.to_owned()),
        "API_ADDR" => Some("127.0.0.1:0".to_owned()),
        "APP_ORIGIN" => Some(ORIGIN.to_owned()),
        _ => None,
    })
    .unwrap();
    let state = AppState::new(config);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = api_router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

fn api_for(addr: SocketAddr) -> HttpAuthApi {
    HttpAuthApi::new(Endpoints::new(format!("http://{addr}")))
}

fn registration(username: &str, email: &str) -> RegistrationForm {
    RegistrationForm {
        username: username.to_owned(),
        age: "30".to_owned(),
        email: email.to_owned(),
        password: "secret1".to_owned(),
        first_name: "Alice".to_owned(),
        gender: "Femme".to_owned(),
        date_of_birth: "1994-05-06".to_owned(),
        is_private: true,
        ..RegistrationForm::default()
    }
}

async fn register(api: &HttpAuthApi, username: &str, email: &str) {
    let mut form = AuthForm { mode: FormMode::Register, registration: registration(username, email), ..AuthForm::default() };
    let nav = form.submit_register(api).await;
    assert!(nav.is_some(), "registration failed: {}", form.error);
}

// =============================================================================
// Register + login
// =============================================================================

#[tokio::test]
async fn register_then_login_stores_verifiable_token() {
    let (addr, state) = spawn_api().await;
    let api = api_for(addr);

    let mut form = AuthForm { mode: FormMode::Register, registration: registration("alice01", "alice@example.com"), ..AuthForm::default() };
    let nav = form.submit_register(&api).await;
    assert_eq!(nav, Some(Navigation { to: "/login", after: REDIRECT_DELAY }));
    assert_eq!(form.success, messages::REGISTER_SUCCESS);
    assert!(form.registration.is_empty());
    assert_eq!(state.users.len().await, 1);

    let store = MemoryTokenStore::new();
    form.show_login();
    form.email = "alice@example.com".to_owned();
    form.password = "secret1".to_owned();
    let nav = form.submit_login(&api, &store).await;
    assert_eq!(nav, Some(Navigation { to: "/", after: REDIRECT_DELAY }));
    assert_eq!(form.success, messages::LOGIN_SUCCESS);

    let token = store.get().expect("token stored");
    let claims = TokenIssuer::new(SECRET, std::time::Duration::from_secs(3600)).verify(&token).unwrap();
    assert_eq!(claims.usr, "alice01");
}

#[tokio::test]
async fn username_works_as_login_identifier() {
    let (addr, _) = spawn_api().await;
    let api = api_for(addr);
    register(&api, "bobby01", "bob@example.com").await;

    let resp = api
        .login(&authflow::LoginRequest { email: "bobby01".to_owned(), password: "secret1".to_owned() })
        .await
        .unwrap();
    assert!(!resp.token.is_empty());
    assert_eq!(resp.message.as_deref(), Some("Login successful"));
}

#[tokio::test]
async fn wrong_password_shows_server_message() {
    let (addr, _) = spawn_api().await;
    let api = api_for(addr);
    register(&api, "carol01", "carol@example.com").await;

    let store = MemoryTokenStore::new();
    let mut form = AuthForm { email: "carol@example.com".to_owned(), password: "wrong-pass".to_owned(), ..AuthForm::default() };
    let nav = form.submit_login(&api, &store).await;

    assert_eq!(nav, None);
    assert_eq!(form.error, "Error: Invalid login credentials");
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn malformed_email_is_stopped_before_the_network() {
    let (addr, _) = spawn_api().await;
    let api = api_for(addr);
    let store = MemoryTokenStore::new();
    let mut form = AuthForm { email: "not-an-email".to_owned(), password: "secret1".to_owned(), ..AuthForm::default() };

    assert_eq!(form.submit_login(&api, &store).await, None);
    assert_eq!(form.error, messages::INVALID_EMAIL);
}

// =============================================================================
// Registration failures
// =============================================================================

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let (addr, _) = spawn_api().await;
    let api = api_for(addr);
    register(&api, "dave001", "dave@example.com").await;

    let mut form = AuthForm { registration: registration("dave002", "dave@example.com"), ..AuthForm::default() };
    assert_eq!(form.submit_register(&api).await, None);
    assert_eq!(form.error, "Error: email already exists");
    assert_eq!(form.registration, registration("dave002", "dave@example.com"));

    let err = api.register(&registration("dave001", "other@example.com")).await.unwrap_err();
    assert_eq!(err, authflow::ApiError::rejected(409, Some("username already exists".to_owned())));
}

#[tokio::test]
async fn invalid_registration_is_a_bad_request() {
    let (addr, state) = spawn_api().await;
    let api = api_for(addr);

    let mut form = AuthForm { registration: registration("eve", "eve@example.com"), ..AuthForm::default() };
    form.submit_register(&api).await;

    assert_eq!(form.error, "Error: Username must be between 6 and 16 characters");
    assert!(state.users.is_empty().await);
}

// =============================================================================
// Network failure
// =============================================================================

#[tokio::test]
async fn unreachable_api_shows_network_message_and_keeps_fields() {
    let unused = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let api = api_for(unused);
    let store = MemoryTokenStore::new();

    let mut form = AuthForm { email: "alice@example.com".to_owned(), password: "secret1".to_owned(), ..AuthForm::default() };
    form.submit_login(&api, &store).await;
    assert_eq!(form.error, messages::NETWORK);
    assert_eq!(form.email, "alice@example.com");

    let mut form = AuthForm { registration: registration("alice01", "alice@example.com"), ..AuthForm::default() };
    form.submit_register(&api).await;
    assert_eq!(form.error, messages::NETWORK);
    assert_eq!(form.registration, registration("alice01", "alice@example.com"));
}

// =============================================================================
// Cookies, logout, CORS
// =============================================================================

#[tokio::test]
async fn login_sets_session_cookies_and_logout_expires_them() {
    let (addr, _) = spawn_api().await;
    let api = api_for(addr);
    register(&api, "frank01", "frank@example.com").await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/login"))
        .json(&serde_json::json!({ "email": "frank@example.com", "password": "secret1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let cookies: Vec<String> = resp
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("token=") && c.contains("HttpOnly")));
    assert!(cookies.iter().any(|c| c.starts_with("username=frank01")));

    let resp = client.post(format!("http://{addr}/logout")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let expired = resp.headers().get("set-cookie").unwrap().to_str().unwrap().to_owned();
    assert!(expired.starts_with("token=;") && expired.contains("Max-Age=0"));
    assert!(resp.text().await.unwrap().is_empty());

    let nav = logout(&api).await.unwrap();
    assert_eq!(nav.to, "/login");
}

#[tokio::test]
async fn register_confirms_with_message_body() {
    let (addr, _) = spawn_api().await;
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/register"))
        .json(&registration("grace01", "grace@example.com"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: MessageBody = resp.json().await.unwrap();
    assert_eq!(body, MessageBody::new("User registered successfully"));
}

#[tokio::test]
async fn malformed_json_is_rejected_with_message() {
    let (addr, _) = spawn_api().await;
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/login"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid request payload");
}

#[tokio::test]
async fn preflight_admits_app_origin_with_credentials() {
    let (addr, _) = spawn_api().await;
    let resp = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("http://{addr}/logout"))
        .header("origin", ORIGIN)
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();
    let headers = resp.headers();
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), ORIGIN);
    assert_eq!(headers.get("access-control-allow-credentials").unwrap(), "true");
}
