//! Screen shown when a signed-in user's role is not on a route's allow-list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaving always goes through `leave_unauthorized`, which finishes the
//! logout before handing back the sign-in path. Navigating first would let
//! the sign-in screen see the old session and bounce straight back here.

#[cfg(test)]
#[path = "unauthorized_test.rs"]
mod unauthorized_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::sign_in::UnauthorizedAction;
use session::User;

use crate::state::session::{use_session, use_session_handle};

pub(crate) fn unauthorized_message(user: Option<&User>) -> String {
    match user {
        Some(user) => format!(
            "{} is signed in as {}, which cannot open this page.",
            user.email,
            user.role.label()
        ),
        None => "You need to sign in to open this page.".to_owned(),
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let session = use_session();
    let handle = use_session_handle();
    let navigate = use_navigate();
    let leaving = RwSignal::new(false);

    let on_leave = move |_| {
        if leaving.get_untracked() {
            return;
        }
        leaving.set(true);

        #[cfg(feature = "csr")]
        {
            let handle = handle.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let target = session::sign_in::leave_unauthorized(&handle).await;
                navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&handle, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Access denied"</h1>
                <p class="login-card__subtitle">{move || session.with(|s| unauthorized_message(s.user()))}</p>
                <button class="login-button" on:click=on_leave disabled=move || leaving.get()>
                    {move || UnauthorizedAction::for_snapshot(&session.get()).label()}
                </button>
            </div>
        </div>
    }
}
