//! Route guard wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route's content with an optional role allow-list. Children render
//! only for `Decision::Render`; otherwise a short notice shows while the
//! loading indicator runs or the redirect is issued.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::guard::{self, Decision};
use session::Role;

use crate::state::session::use_session;
use crate::util::auth::install_guard_redirect;

/// Placeholder text for every non-render decision.
pub(crate) fn notice_for(decision: Decision) -> &'static str {
    match decision {
        Decision::ShowLoading => "Loading...",
        Decision::RedirectToLogin => "Redirecting to sign-in...",
        Decision::RedirectToUnauthorized => "Redirecting...",
        Decision::Render => "",
    }
}

#[component]
pub fn Protected(
    /// Roles allowed through; omitted means any signed-in user. Admins always pass.
    #[prop(optional)]
    allowed_roles: Option<Vec<Role>>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| guard::evaluate(&session.get(), allowed_roles.as_deref()));
    install_guard_redirect(session, decision, use_navigate());

    view! {
        <Show
            when=move || decision.get() == Decision::Render
            fallback=move || {
                view! {
                    <div class="guard-notice">
                        <p class="guard-notice__text">{move || notice_for(decision.get())}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
