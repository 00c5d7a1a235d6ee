//! Email + password sign-in card shared by the role-entry screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and Portal Access render this card with different `LoginVariant`s.
//! Validation, the student bar, and landing paths come from
//! `session::sign_in`; the card only owns field state and messaging.

#[cfg(test)]
#[path = "sign_in_form_test.rs"]
mod sign_in_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::routes;
use session::sign_in::{HomeRoutes, redirect_if_authenticated, validate_credentials};

use crate::state::session::{use_session, use_session_handle};

/// Which entry screen the card is rendered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginVariant {
    Dashboard,
    Portal,
}

impl LoginVariant {
    pub fn homes(self) -> HomeRoutes {
        match self {
            Self::Dashboard => HomeRoutes::DASHBOARD,
            Self::Portal => HomeRoutes::PORTAL,
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Dashboard => "Sign in to your dashboard",
            Self::Portal => "Portal access",
        }
    }

    /// Link to the other entry screen: `(path, label)`.
    pub fn alternate(self) -> (&'static str, &'static str) {
        match self {
            Self::Dashboard => (routes::PORTAL_ACCESS, "Use portal access instead"),
            Self::Portal => (routes::LOGIN, "Back to dashboard sign-in"),
        }
    }
}

pub(crate) fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign In" }
}

#[component]
pub fn SignInCard(variant: LoginVariant) -> impl IntoView {
    let session = use_session();
    let handle = use_session_handle();
    let navigate = use_navigate();
    let homes = variant.homes();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Already signed in (or restored on load): go straight to the role home.
    // While a submit is running the submit handler navigates instead.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if busy.get() {
            return;
        }
        if let Some(path) = redirect_if_authenticated(&session.get(), &homes) {
            navigate_home(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(e) = validate_credentials(&email_value, &password_value) {
            error.set(Some(e.user_message()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let handle = handle.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session::sign_in::sign_in(&handle, &email_value, &password_value, &homes).await {
                    // Leave `busy` set: the card unmounts on navigation.
                    Ok(path) => navigate(path, NavigateOptions::default()),
                    Err(e) => {
                        let _ = error.try_set(Some(e.user_message()));
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&handle, &navigate);
        }
    };

    let (alternate_path, alternate_label) = variant.alternate();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Business Dashboard"</h1>
                <p class="login-card__subtitle">{variant.subtitle()}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <a class="login-link" href=alternate_path>
                    {alternate_label}
                </a>
            </div>
        </div>
    }
}
