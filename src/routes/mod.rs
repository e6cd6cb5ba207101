//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two routers run on separate listeners. `api_router` answers the JSON auth
//! endpoints on the API port (8079 by default); `leptos_app` serves the
//! server-rendered front-end and its `/pkg` assets on the Leptos site address.
//! Keeping them apart lets `POST /login` (API) and `GET /login` (page) coexist.

pub mod auth;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON auth API. CORS admits the configured front-end origin with
/// credentials so the logout cookie travels cross-port.
pub fn api_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.app_origin);

    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            tracing::warn!(%origin, "APP_ORIGIN is not a valid header value; cross-origin calls disabled");
            layer
        }
    }
}

/// Leptos SSR front-end plus static assets, and the address it should bind.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[[workspace.metadata.leptos]]` section).
pub fn leptos_app() -> Result<(Router, SocketAddr), String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let site_addr = leptos_options.site_addr;
    let routes = generate_route_list(client::app::App);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    Ok((router, site_addr))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
