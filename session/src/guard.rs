//! Route guard decision and redirect loop-breaker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected screen evaluates the current session snapshot against an
//! optional allow-list of roles. The guard only decides; navigation is the
//! caller's job and the session store is never touched from here.
//!
//! `admin` satisfies every allow-list. A guard with no allow-list admits any
//! authenticated user, which is why student accounts are turned away at
//! sign-in rather than here.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes;
use crate::store::{SessionSnapshot, SessionState};
use crate::types::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    ShowLoading,
    RedirectToLogin,
    RedirectToUnauthorized,
    Render,
}

impl Decision {
    /// Navigation target for redirect decisions.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(routes::LOGIN),
            Self::RedirectToUnauthorized => Some(routes::UNAUTHORIZED),
            Self::ShowLoading | Self::Render => None,
        }
    }
}

/// Whether `role` passes `allowed_roles`. `None` means unrestricted.
#[must_use]
pub fn has_access(role: Role, allowed_roles: Option<&[Role]>) -> bool {
    role == Role::Admin || allowed_roles.is_none_or(|allowed| allowed.contains(&role))
}

/// Map a session snapshot plus optional allow-list to a guard decision.
///
/// `loading` outranks both redirect branches so a session that is still
/// resolving never flashes a redirect. An allowed user keeps rendering
/// through a refresh.
#[must_use]
pub fn evaluate(snapshot: &SessionSnapshot, allowed_roles: Option<&[Role]>) -> Decision {
    match &snapshot.state {
        SessionState::Initializing => Decision::ShowLoading,
        SessionState::Unauthenticated if snapshot.loading => Decision::ShowLoading,
        SessionState::Unauthenticated => Decision::RedirectToLogin,
        SessionState::Authenticated(user) => {
            if has_access(user.role, allowed_roles) {
                Decision::Render
            } else if snapshot.loading {
                // A login or refresh may still replace this user.
                Decision::ShowLoading
            } else {
                Decision::RedirectToUnauthorized
            }
        }
    }
}

/// Issues each redirect at most once per session revision.
///
/// A guard re-evaluates on every reactive tick; without the latch a stale
/// snapshot could re-fire the same navigation and bounce between the
/// unauthorized screen and sign-in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    issued: Option<(u64, Decision)>,
}

impl RedirectLatch {
    /// Target to navigate to, or `None` if nothing new should be issued.
    pub fn admit(&mut self, revision: u64, decision: Decision) -> Option<&'static str> {
        let target = decision.redirect_target()?;
        if self.issued == Some((revision, decision)) {
            return None;
        }
        self.issued = Some((revision, decision));
        Some(target)
    }
}
