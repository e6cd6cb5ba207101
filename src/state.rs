//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Every
//! field is cheap to clone: the user map is `Arc`-wrapped inside `UserStore`
//! and the config is shared behind an `Arc`.

use std::sync::Arc;

use crate::config::Config;
use crate::services::token::TokenIssuer;
use crate::services::users::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub tokens: TokenIssuer,
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let tokens = TokenIssuer::new(&config.jwt_secret, config.token_ttl);
        Self { users: UserStore::new(), tokens, config: Arc::new(config) }
    }
}
