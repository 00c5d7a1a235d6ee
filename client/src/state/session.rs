//! Session context for the browser app.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` exists per app. It is shared through context as a
//! `SessionHandle` for actions (login, logout, refresh) and mirrored into an
//! `RwSignal<SessionSnapshot>` for rendering. Every snapshot the store
//! publishes, loading transitions included, reaches the signal in order.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::ops::Deref;
use std::sync::Arc;

use leptos::prelude::*;
use session::{ApiConfig, AuthClient, SessionSnapshot, SessionStore};

use crate::net::transport::GlooTransport;
use crate::util::storage::LocalStorageTokenStore;

/// Shared handle to the app's single session store.
#[derive(Clone)]
pub struct SessionHandle(Arc<SessionStore>);

impl SessionHandle {
    pub fn new(store: SessionStore) -> Self {
        Self(Arc::new(store))
    }
}

impl Deref for SessionHandle {
    type Target = SessionStore;

    fn deref(&self) -> &SessionStore {
        &self.0
    }
}

/// Build the store over `localStorage` and the browser fetch transport.
pub fn build_store() -> SessionStore {
    let config = ApiConfig::from_build_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default api origin");
        ApiConfig::default()
    });
    let client = AuthClient::new(Arc::new(GlooTransport::new(config)), Arc::new(LocalStorageTokenStore));
    SessionStore::new(client)
}

/// Create the session store, provide both contexts, and start bootstrap.
pub fn provide_session() -> (SessionHandle, RwSignal<SessionSnapshot>) {
    let handle = SessionHandle::new(build_store());
    let session = RwSignal::new(handle.snapshot());
    provide_context(handle.clone());
    provide_context(session);

    #[cfg(feature = "csr")]
    {
        let mut updates = handle.subscribe();
        leptos::task::spawn_local(async move {
            loop {
                let snapshot = updates.borrow_and_update().clone();
                if session.try_set(snapshot).is_some() {
                    break;
                }
                if updates.changed().await.is_err() {
                    break;
                }
            }
        });

        let store = handle.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = store.bootstrap().await {
                log::warn!("session bootstrap: {e}");
            }
        });
    }

    (handle, session)
}

/// Current session snapshot signal from context.
pub fn use_session() -> RwSignal<SessionSnapshot> {
    expect_context::<RwSignal<SessionSnapshot>>()
}

/// Session store handle from context.
pub fn use_session_handle() -> SessionHandle {
    expect_context::<SessionHandle>()
}
