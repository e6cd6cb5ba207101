//! Persistent session-token storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the token in `localStorage`, the CLI in a file, tests in
//! memory. Everything above this trait only ever sees [`TokenStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::Mutex;

/// Fixed storage key holding the session token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("token storage unavailable")]
    Unavailable,
    #[error("token storage write failed: {0}")]
    Write(String),
}

/// Key-value slot for the session token.
pub trait TokenStore {
    /// Stored token, if any. An empty string counts as a stored value here;
    /// callers decide what presence means.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store rejects the write.
    fn set(&self, token: &str) -> Result<(), StorageError>;

    /// Drop the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store rejects the removal.
    fn remove(&self) -> Result<(), StorageError>;
}

/// In-process store used by tests and SSR.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().map_err(|_| StorageError::Unavailable)?;
        *slot = Some(token.to_owned());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().map_err(|_| StorageError::Unavailable)?;
        *slot = None;
        Ok(())
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        (**self).set(token)
    }

    fn remove(&self) -> Result<(), StorageError> {
        (**self).remove()
    }
}
