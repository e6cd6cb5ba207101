//! User accounts: registration, credential checks and password hashing.
//!
//! DESIGN
//! ======
//! Accounts live in an in-memory map behind a `tokio::sync::RwLock`; they
//! last as long as the process. Passwords are stored as argon2 PHC strings.
//! Uniqueness of email and username is checked under the write lock so two
//! concurrent registrations cannot both claim the same identity.
//!
//! ERROR HANDLING
//! ==============
//! Every credential mismatch (unknown identifier or wrong password) collapses
//! to `InvalidCredentials` so callers cannot probe which accounts exist.

use std::collections::HashMap;
use std::sync::Arc;

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use authflow::RegistrationForm;
use rand::Rng;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::validation::validate_registration;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UserError {
    #[error("{0}")]
    Invalid(String),
    #[error("email already exists")]
    EmailTaken,
    #[error("username already exists")]
    UsernameTaken,
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Stored account. `profile.password` is always blank.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub profile: RegistrationForm,
    password_hash: String,
}

#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

// =============================================================================
// STORE
// =============================================================================

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Validate and store a new account.
    ///
    /// # Errors
    ///
    /// `Invalid` for rule violations, `EmailTaken`/`UsernameTaken` for
    /// duplicates, `Hash` if the password cannot be hashed.
    pub async fn register(&self, mut form: RegistrationForm) -> Result<User, UserError> {
        validate_registration(&form).map_err(UserError::Invalid)?;
        let password_hash = hash_password(&form.password)?;
        form.password.clear();

        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == form.email) {
            return Err(UserError::EmailTaken);
        }
        if users.values().any(|u| u.username == form.username) {
            return Err(UserError::UsernameTaken);
        }

        let user = User {
            id: Uuid::new_v4(),
            username: form.username.clone(),
            email: form.email.clone(),
            profile: form,
            password_hash,
        };
        users.insert(user.id, user.clone());
        info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Resolve `identifier` (email when it contains `@`, username otherwise)
    /// and check `password` against the stored hash.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when the account is unknown or the password does
    /// not match.
    pub async fn authenticate(&self, identifier: &str, password: &str) -> Result<User, UserError> {
        let by_email = identifier.contains('@');
        let user = {
            let users = self.users.read().await;
            users
                .values()
                .find(|u| if by_email { u.email == identifier } else { u.username == identifier })
                .cloned()
        };
        match user {
            Some(user) if verify_password(password, &user.password_hash) => Ok(user),
            _ => Err(UserError::InvalidCredentials),
        }
    }
}

// =============================================================================
// PASSWORDS
// =============================================================================

fn hash_password(password: &str) -> Result<String, UserError> {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    let salt = SaltString::encode_b64(&bytes).map_err(|e| UserError::Hash(e.to_string()))?;
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| UserError::Hash(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .is_ok_and(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;
