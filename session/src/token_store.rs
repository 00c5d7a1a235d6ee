//! Persistence for the single bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one credential may be stored at a time; absence means signed out.
//! Only the auth client and session store touch a `TokenStore`. Other
//! components ask the session store for the bearer value.
//!
//! ERROR HANDLING
//! ==============
//! The contract has no error channel. Storage failures are logged and read
//! as absence, which degrades to a signed-out session instead of a crash.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::fmt;
use std::sync::Mutex;

/// Fixed storage key shared by every backend.
pub const TOKEN_STORAGE_KEY: &str = "dashboard.access_token";

/// Opaque bearer token. No shape validation is performed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Synchronous get/set/clear over client-local persistent storage.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<Credential>;
    fn set(&self, credential: &Credential);
    fn clear(&self);
}

// =============================================================================
// MEMORY
// =============================================================================

/// Process-local store; does not survive restarts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<Credential>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_credential(credential: Credential) -> Self {
        Self { slot: Mutex::new(Some(credential)) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<Credential> {
        self.slot.lock().map(|slot| slot.clone()).unwrap_or_default()
    }

    fn set(&self, credential: &Credential) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(credential.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

// =============================================================================
// FILE
// =============================================================================

/// One file named [`TOKEN_STORAGE_KEY`] inside a caller-chosen directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileTokenStore {
    #[must_use]
    pub fn new(dir: impl AsRef<std::path::Path>) -> Self {
        Self { path: dir.as_ref().join(TOKEN_STORAGE_KEY) }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<Credential> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                (!token.is_empty()).then(|| Credential::new(token))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "token read failed");
                None
            }
        }
    }

    fn set(&self, credential: &Credential) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "token dir create failed");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, credential.as_str()) {
            tracing::warn!(path = %self.path.display(), error = %e, "token write failed");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "token clear failed"),
        }
    }
}
