//! `localStorage`-backed session token store.
//!
//! Reads and writes are hydrate-only; during SSR the store is always empty and
//! refuses writes, which keeps protected pages on their placeholder until the
//! browser runs the gate.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use authflow::{StorageError, TokenStore};
#[cfg(feature = "hydrate")]
use authflow::AUTH_TOKEN_KEY;

/// Token slot under `localStorage["authToken"]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().ok()?.get_item(AUTH_TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(AUTH_TOKEN_KEY, token)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(AUTH_TOKEN_KEY)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}
