//! # session
//!
//! Session lifecycle and role-based route authorization for the business
//! dashboard client.
//!
//! Data flows leaf-first: [`token_store`] persists the bearer credential,
//! [`auth_client`] talks to the remote auth API through a [`transport`],
//! [`store`] owns the `Initializing | Unauthenticated | Authenticated` state
//! machine, and [`guard`] maps that state plus an allow-list of roles onto a
//! render/redirect decision. [`sign_in`] holds the role-entry rules shared by
//! every login surface.
//!
//! The crate is UI-agnostic and builds for both native and `wasm32` targets;
//! the `client` crate binds it to Leptos and browser storage.

pub mod auth_client;
pub mod config;
pub mod error;
pub mod guard;
pub mod routes;
pub mod sign_in;
pub mod store;
pub mod token_store;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_client::AuthClient;
pub use config::ApiConfig;
pub use error::{AuthError, SessionError, SignInError};
pub use guard::{Decision, RedirectLatch};
pub use store::{SessionSnapshot, SessionState, SessionStore, SessionView};
pub use token_store::{Credential, TokenStore};
pub use transport::Transport;
pub use types::{Role, User};
