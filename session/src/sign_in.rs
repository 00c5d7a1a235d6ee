//! Sign-in flow shared by every role-entry screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Login and Portal Access screens differ only in where each role lands
//! after signing in, so both run `sign_in` with their own `HomeRoutes`.
//! Student accounts are barred inside the login transition itself: the
//! store revokes them before publishing, so no guard ever sees a student
//! session from this flow.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use crate::error::{MISSING_FIELDS_MESSAGE, SessionError, SignInError};
use crate::routes;
use crate::store::{SessionSnapshot, SessionStore};
use crate::types::Role;

/// Post-login destination for each dashboard role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomeRoutes {
    pub admin: &'static str,
    pub merchant_corporate: &'static str,
    pub merchant_branch: &'static str,
    /// Any other non-student role.
    pub fallback: &'static str,
}

impl HomeRoutes {
    /// Destinations used by the main login screen.
    pub const DASHBOARD: Self = Self {
        admin: routes::ADMIN_HOME,
        merchant_corporate: routes::CORPORATE_HOME,
        merchant_branch: routes::BRANCH_HOME,
        fallback: routes::HOME,
    };

    /// Destinations used by the portal access screen.
    pub const PORTAL: Self = Self {
        admin: routes::ADMIN_HOME,
        merchant_corporate: routes::CORPORATE_HOME,
        merchant_branch: routes::BRANCH_HOME,
        fallback: routes::PORTAL_HOME,
    };

    /// Home path for `role`; students have none.
    #[must_use]
    pub fn for_role(&self, role: Role) -> Option<&'static str> {
        match role {
            Role::Admin => Some(self.admin),
            Role::MerchantCorporate => Some(self.merchant_corporate),
            Role::MerchantBranch => Some(self.merchant_branch),
            Role::Student => None,
        }
    }
}

/// Trim and require both fields before anything is sent.
///
/// # Errors
///
/// Returns [`SignInError::Validation`] when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), SignInError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(SignInError::Validation(MISSING_FIELDS_MESSAGE));
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where a screen that offers login should send an already signed-in user.
#[must_use]
pub fn redirect_if_authenticated(snapshot: &SessionSnapshot, homes: &HomeRoutes) -> Option<&'static str> {
    snapshot.user().and_then(|user| homes.for_role(user.role))
}

/// Validate, sign in, enforce the student bar, and pick the landing path.
///
/// # Errors
///
/// - [`SignInError::Validation`] for blank fields (no request is made).
/// - [`SignInError::StudentBarred`] for student accounts, after signing them out.
/// - [`SignInError::Session`] for any store or remote failure.
pub async fn sign_in(
    store: &SessionStore,
    email: &str,
    password: &str,
    homes: &HomeRoutes,
) -> Result<&'static str, SignInError> {
    let (email, password) = validate_credentials(email, password)?;
    let admit = |role| homes.for_role(role).is_some();
    match store.login_admitting(&email, &password, admit).await {
        Ok(user) => homes.for_role(user.role).ok_or(SignInError::StudentBarred),
        Err(SessionError::RoleRefused(_)) => Err(SignInError::StudentBarred),
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// UNAUTHORIZED SCREEN
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnauthorizedAction {
    LogOutAndSignIn,
    GoToSignIn,
}

impl UnauthorizedAction {
    #[must_use]
    pub fn for_snapshot(snapshot: &SessionSnapshot) -> Self {
        if snapshot.user().is_some() { Self::LogOutAndSignIn } else { Self::GoToSignIn }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LogOutAndSignIn => "Log out and return to sign-in",
            Self::GoToSignIn => "Go to sign-in",
        }
    }
}

/// Leave the unauthorized screen. The logout completes, credential cleared,
/// before the sign-in path is handed back for navigation.
pub async fn leave_unauthorized(store: &SessionStore) -> &'static str {
    if UnauthorizedAction::for_snapshot(&store.snapshot()) == UnauthorizedAction::LogOutAndSignIn {
        store.logout().await;
    }
    routes::LOGIN
}
