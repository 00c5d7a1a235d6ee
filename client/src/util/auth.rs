//! Shared guard redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same redirect behavior: navigate once
//! per snapshot revision, replacing history so Back does not land on a
//! screen the user cannot see.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::guard::{Decision, RedirectLatch};
use session::SessionSnapshot;

/// Next navigation target for `decision`, if the latch admits it.
pub(crate) fn next_redirect(
    latch: &mut RedirectLatch,
    snapshot: &SessionSnapshot,
    decision: Decision,
) -> Option<&'static str> {
    latch.admit(snapshot.revision, decision)
}

/// Navigate whenever the guard decision turns into a redirect.
pub fn install_guard_redirect<F>(session: RwSignal<SessionSnapshot>, decision: Memo<Decision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |latch: Option<RedirectLatch>| {
        let mut latch = latch.unwrap_or_default();
        let decision = decision.get();
        let target = session.with(|snapshot| next_redirect(&mut latch, snapshot, decision));
        if let Some(target) = target {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        latch
    });
}
