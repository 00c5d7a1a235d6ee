//! Session store: the single owner of authentication state.
//!
//! ARCHITECTURE
//! ============
//! State is a tagged variant (`Initializing | Unauthenticated |
//! Authenticated(User)`) plus a `loading` flag, published through a
//! `tokio::sync::watch` channel. Every mounted guard holds a receiver, so a
//! transition is visible to all of them on the next poll. All mutation goes
//! through `bootstrap`, `login`, `logout`, `refresh_user`, and `invalidate`.
//!
//! CONCURRENCY
//! ===========
//! Transitions that hit the network are serialized by an in-flight flag: a
//! second `login`/`refresh_user`/`bootstrap` while one is running fails
//! with `SessionError::Busy`. `logout` and `invalidate` are never blocked.
//! They advance an epoch counter, and an in-flight transition that finds
//! the epoch moved discards its result (clearing any credential it stored)
//! instead of resurrecting a signed-out session.
//!
//! INVARIANTS
//! ==========
//! - `Authenticated` never coexists with an absent credential: every path
//!   that clears the credential also publishes `Unauthenticated`.
//! - `User` is replaced wholesale, never patched.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::watch;

use crate::auth_client::AuthClient;
use crate::error::SessionError;
use crate::token_store::Credential;
use crate::types::{Role, User};

// =============================================================================
// STATE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Entry state until the persisted credential has been checked.
    #[default]
    Initializing,
    Unauthenticated,
    Authenticated(User),
}

impl SessionState {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated(_) => "authenticated",
        }
    }
}

/// One published value of the store.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    /// True while `Initializing` and during an in-flight `login`/`refresh_user`.
    pub loading: bool,
    /// Increments on every published change.
    pub revision: u64,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self { state: SessionState::Initializing, loading: true, revision: 0 }
    }
}

impl SessionSnapshot {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    /// The `{ user, loading }` view handed to consumer screens.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView { user: self.user().cloned(), loading: self.loading }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionView {
    pub user: Option<User>,
    pub loading: bool,
}

// =============================================================================
// STORE
// =============================================================================

pub struct SessionStore {
    client: AuthClient,
    tx: watch::Sender<SessionSnapshot>,
    in_flight: AtomicBool,
    epoch: AtomicU64,
}

/// Holds the in-flight flag; dropping it (including on cancellation) frees
/// the store and clears a dangling `loading`.
struct InFlight<'a> {
    store: &'a SessionStore,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.store.in_flight.store(false, Ordering::Release);
        self.store.tx.send_if_modified(|snap| {
            if snap.loading && snap.state != SessionState::Initializing {
                snap.loading = false;
                snap.revision += 1;
                true
            } else {
                false
            }
        });
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(client: AuthClient) -> Self {
        let (tx, _rx) = watch::channel(SessionSnapshot::default());
        Self { client, tx, in_flight: AtomicBool::new(false), epoch: AtomicU64::new(0) }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every published transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }

    /// Bearer credential for consumer API calls, if signed in.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        if self.tx.borrow().user().is_none() {
            return None;
        }
        self.client.tokens().get()
    }

    /// Resolve the persisted credential. A no-op outside `Initializing`.
    ///
    /// Profile failures are absorbed: the credential is cleared and the
    /// session settles as `Unauthenticated`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Busy`] if another transition is in flight.
    pub async fn bootstrap(&self) -> Result<(), SessionError> {
        if self.tx.borrow().state != SessionState::Initializing {
            return Ok(());
        }
        let _guard = self.begin()?;
        let epoch = self.epoch();

        if self.client.tokens().get().is_none() {
            self.publish(SessionState::Unauthenticated, false);
            return Ok(());
        }

        match self.client.get_profile().await {
            Ok(user) if self.epoch() == epoch => {
                tracing::info!(user_id = %user.id, role = %user.role, "session restored");
                self.publish(SessionState::Authenticated(user), false);
            }
            Ok(_) => tracing::debug!("bootstrap superseded by logout; discarding profile"),
            Err(e) => {
                tracing::debug!(error = %e, "stored credential rejected during bootstrap");
                self.client.tokens().clear();
                self.publish(SessionState::Unauthenticated, false);
            }
        }
        Ok(())
    }

    /// Sign in and resolve the profile; returns the new `User`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Busy`] if another transition is in flight.
    /// - [`SessionError::Auth`] with the remote failure; the caller owns messaging.
    /// - [`SessionError::Superseded`] if `logout` ran before this resolved.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        self.login_admitting(email, password, |_| true).await
    }

    /// Like [`login`](Self::login), but only roles passing `admit` are
    /// signed in. A refused account is revoked remotely before this returns
    /// and is never published as `Authenticated`.
    ///
    /// # Errors
    ///
    /// As for `login`, plus [`SessionError::RoleRefused`] for a refused role.
    pub async fn login_admitting(
        &self,
        email: &str,
        password: &str,
        admit: impl Fn(Role) -> bool,
    ) -> Result<User, SessionError> {
        let _guard = self.begin()?;
        let epoch = self.epoch();
        self.set_loading(true);

        let result = match self.client.login(email, password).await {
            Ok(_) => self.client.get_profile().await.inspect_err(|_| {
                // Token issued but unusable; do not leave it behind.
                self.client.tokens().clear();
            }),
            Err(e) => Err(e),
        };

        if self.epoch() != epoch {
            self.client.tokens().clear();
            return Err(SessionError::Superseded);
        }

        match result {
            Ok(user) if !admit(user.role) => {
                tracing::info!(user_id = %user.id, role = %user.role, "sign-in refused for role");
                self.client.logout().await;
                if self.epoch() == epoch {
                    self.publish(SessionState::Unauthenticated, false);
                }
                Err(SessionError::RoleRefused(user.role))
            }
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = %user.role, "signed in");
                self.publish(SessionState::Authenticated(user.clone()), false);
                Ok(user)
            }
            Err(e) => {
                tracing::debug!(error = %e, "sign-in failed");
                self.settle_after_failure();
                Err(e.into())
            }
        }
    }

    /// Sign out. Local state is cleared even if the remote call fails, and
    /// the credential is gone by the time this returns.
    pub async fn logout(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
        self.client.logout().await;
        // A transition that began while the remote call was pending must not
        // publish over this sign-out.
        self.epoch.fetch_add(1, Ordering::AcqRel);
        tracing::info!("signed out");
        self.publish(SessionState::Unauthenticated, false);
    }

    /// Re-fetch the profile and replace the current `User`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NotAuthenticated`] outside `Authenticated`.
    /// - [`SessionError::Busy`] if another transition is in flight.
    /// - [`SessionError::Auth`] on failure; a 401 also signs the session out.
    /// - [`SessionError::Superseded`] if `logout` ran before this resolved.
    pub async fn refresh_user(&self) -> Result<User, SessionError> {
        if self.tx.borrow().user().is_none() {
            return Err(SessionError::NotAuthenticated);
        }
        let _guard = self.begin()?;
        let epoch = self.epoch();
        self.set_loading(true);

        let result = self.client.get_profile().await;
        if self.epoch() != epoch {
            return Err(SessionError::Superseded);
        }

        match result {
            Ok(user) => {
                self.publish(SessionState::Authenticated(user.clone()), false);
                Ok(user)
            }
            Err(e) => {
                tracing::debug!(error = %e, "profile refresh failed");
                self.settle_after_failure();
                Err(e.into())
            }
        }
    }

    /// Drop the session after a consumer call came back `401 Unauthorized`.
    pub fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
        self.client.tokens().clear();
        tracing::info!("session invalidated by unauthorized response");
        self.publish(SessionState::Unauthenticated, false);
    }

    // -------------------------------------------------------------------------
    // internals
    // -------------------------------------------------------------------------

    fn begin(&self) -> Result<InFlight<'_>, SessionError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SessionError::Busy)?;
        Ok(InFlight { store: self })
    }

    fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// After a failed call: keep the current state unless the credential is gone.
    fn settle_after_failure(&self) {
        if self.client.tokens().get().is_none() {
            self.publish(SessionState::Unauthenticated, false);
        } else {
            self.set_loading(false);
        }
    }

    fn set_loading(&self, loading: bool) {
        self.tx.send_if_modified(|snap| {
            if snap.loading == loading {
                return false;
            }
            snap.loading = loading;
            snap.revision += 1;
            true
        });
    }

    fn publish(&self, state: SessionState, loading: bool) {
        self.tx.send_modify(|snap| {
            if snap.state.name() != state.name() {
                tracing::debug!(from = snap.state.name(), to = state.name(), "session transition");
            }
            snap.state = state;
            snap.loading = loading;
            snap.revision += 1;
        });
    }
}
