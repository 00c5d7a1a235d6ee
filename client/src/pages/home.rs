//! Role home screens behind the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each route wraps the shared `HomeScreen` in `Protected` with its own
//! allow-list. The screen shows who is signed in and offers profile refresh
//! and logout; role-specific dashboards build on this shell.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
#[cfg(feature = "csr")]
use session::routes;
use session::{Role, SessionError, User};

use crate::components::protected::Protected;
use crate::state::session::{use_session, use_session_handle};

pub(crate) fn identity_label(user: Option<&User>) -> String {
    user.map(|u| format!("{} · {}", u.email, u.role.label())).unwrap_or_default()
}

/// Message for a failed manual refresh; `None` when nothing should be shown.
pub(crate) fn refresh_failure_message(err: &SessionError) -> Option<String> {
    match err {
        // Another transition owns the screen, or the guard is about to redirect.
        SessionError::Busy
        | SessionError::Superseded
        | SessionError::NotAuthenticated
        | SessionError::RoleRefused(_) => None,
        SessionError::Auth(e) if e.is_unauthorized() => None,
        SessionError::Auth(_) => Some(session::error::GENERIC_FAILURE_MESSAGE.to_owned()),
    }
}

#[component]
pub fn HomeScreen(title: &'static str) -> impl IntoView {
    let session = use_session();
    let handle = use_session_handle();
    let navigate = use_navigate();
    let notice = RwSignal::new(None::<String>);

    let refresh_handle = handle.clone();
    let on_refresh = move |_| {
        notice.set(None);
        #[cfg(feature = "csr")]
        {
            let handle = refresh_handle.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = handle.refresh_user().await {
                    log::debug!("profile refresh: {e}");
                    let _ = notice.try_set(refresh_failure_message(&e));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &refresh_handle;
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            let handle = handle.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                handle.logout().await;
                navigate(routes::LOGIN, NavigateOptions { replace: true, ..NavigateOptions::default() });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&handle, &navigate);
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__board-name">{title}</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{move || session.with(|s| identity_label(s.user()))}</span>
                <button
                    class="btn toolbar__refresh"
                    on:click=on_refresh
                    disabled=move || session.with(|s| s.loading)
                >
                    "Refresh"
                </button>
                <button class="btn toolbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <Show when=move || session.with(|s| s.loading)>
                <p class="dashboard-page__status">"Refreshing profile..."</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="dashboard-page__status dashboard-page__status--error">
                    {move || notice.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}

#[component]
pub fn AdminHomePage() -> impl IntoView {
    view! {
        <Protected allowed_roles=vec![Role::Admin]>
            <HomeScreen title="Admin"/>
        </Protected>
    }
}

#[component]
pub fn CorporateHomePage() -> impl IntoView {
    view! {
        <Protected allowed_roles=vec![Role::MerchantCorporate]>
            <HomeScreen title="Corporate"/>
        </Protected>
    }
}

#[component]
pub fn BranchHomePage() -> impl IntoView {
    view! {
        <Protected allowed_roles=vec![Role::MerchantBranch]>
            <HomeScreen title="Branch"/>
        </Protected>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <Protected allowed_roles=vec![Role::MerchantCorporate, Role::MerchantBranch]>
            <HomeScreen title="Reports"/>
        </Protected>
    }
}

#[component]
pub fn PortalHomePage() -> impl IntoView {
    view! {
        <Protected>
            <HomeScreen title="Portal"/>
        </Protected>
    }
}

#[component]
pub fn GenericHomePage() -> impl IntoView {
    view! {
        <Protected>
            <HomeScreen title="Dashboard"/>
        </Protected>
    }
}
