//! Dashboard sign-in screen.

use leptos::prelude::*;

use crate::components::sign_in_form::{LoginVariant, SignInCard};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <SignInCard variant=LoginVariant::Dashboard/> }
}
