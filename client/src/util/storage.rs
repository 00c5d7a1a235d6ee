//! Browser `localStorage` backend for the bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only web-sys glue. Outside the browser every read is
//! absent and writes are dropped, which leaves the session signed out.

use session::token_store::{Credential, TOKEN_STORAGE_KEY, TokenStore};

/// Token store over `window.localStorage`, keyed by `TOKEN_STORAGE_KEY`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<Credential> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
            (!raw.is_empty()).then(|| Credential::new(raw))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = TOKEN_STORAGE_KEY;
            None
        }
    }

    fn set(&self, credential: &Credential) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; credential not persisted");
                return;
            };
            if storage.set_item(TOKEN_STORAGE_KEY, credential.as_str()).is_err() {
                log::warn!("failed to persist credential");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credential;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
                    log::warn!("failed to remove credential");
                }
            }
        }
    }
}
