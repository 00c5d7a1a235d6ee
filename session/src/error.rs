//! Error types for the auth client, the session store, and the sign-in flow.
//!
//! ERROR HANDLING
//! ==============
//! Each layer wraps the one below it. `AuthError` describes a failed remote
//! call; `SessionError` adds store-level outcomes (busy, superseded);
//! `SignInError` adds entry-screen rules (validation, student accounts).
//! Only `SignInError` carries user-facing wording.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::types::Role;

/// Inline text shown for network failures and timeouts.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed. Please check your connection and try again.";

/// Inline text shown when a student account signs in.
pub const STUDENT_BARRED_MESSAGE: &str =
    "Student accounts cannot access the dashboard. Please use the student app instead.";

/// Inline text shown when required fields are empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both email and password.";

/// Inline text shown when a sign-in is already running.
pub const BUSY_MESSAGE: &str = "A sign-in is already in progress.";

/// Errors produced by a remote auth operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never reached the server.
    #[error("network failure: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// An authenticated call was attempted with no stored credential.
    #[error("not signed in")]
    MissingCredential,

    /// A 2xx body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Decode(String),
}

impl AuthError {
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for 401 responses and for calls made without a credential.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. } | Self::MissingCredential)
    }
}

/// Errors produced by a session-store transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Another transition is in flight.
    #[error("another session transition is in flight")]
    Busy,

    /// A logout landed while this transition was in flight; its result was discarded.
    #[error("session was signed out while the request was in flight")]
    Superseded,

    /// The operation requires an authenticated session.
    #[error("no authenticated session")]
    NotAuthenticated,

    /// Valid credentials for a role this sign-in does not admit.
    #[error("{0} accounts cannot sign in here")]
    RoleRefused(Role),
}

/// Errors surfaced by the role-entry screens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    /// Caught before submit; nothing was sent to the server.
    #[error("{0}")]
    Validation(&'static str),

    /// The credentials were valid but belong to a student account.
    #[error("student accounts are not allowed")]
    StudentBarred,

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl SignInError {
    /// Inline text for the login form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(text) => (*text).to_owned(),
            Self::StudentBarred => STUDENT_BARRED_MESSAGE.to_owned(),
            Self::Session(SessionError::Busy) => BUSY_MESSAGE.to_owned(),
            Self::Session(SessionError::Auth(AuthError::Http { message, .. })) => message.clone(),
            Self::Session(_) => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}
