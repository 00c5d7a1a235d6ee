//! Portal access sign-in screen. Same rules as Login; only the fallback
//! landing path differs.

use leptos::prelude::*;

use crate::components::sign_in_form::{LoginVariant, SignInCard};

#[component]
pub fn PortalAccessPage() -> impl IntoView {
    view! { <SignInCard variant=LoginVariant::Portal/> }
}
