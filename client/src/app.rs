//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::routes;

use crate::pages::home::{AdminHomePage, BranchHomePage, CorporateHomePage, GenericHomePage, PortalHomePage, ReportsPage};
use crate::pages::{login::LoginPage, portal_access::PortalAccessPage, unauthorized::UnauthorizedPage};
use crate::state::session::provide_session;

/// Router segment for an absolute route path.
pub(crate) fn segment(path: &'static str) -> &'static str {
    path.trim_start_matches('/')
}

/// Root application component.
///
/// Provides the session contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="Business Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(segment(routes::LOGIN)) view=LoginPage/>
                <Route path=StaticSegment(segment(routes::PORTAL_ACCESS)) view=PortalAccessPage/>
                <Route path=StaticSegment(segment(routes::UNAUTHORIZED)) view=UnauthorizedPage/>
                <Route path=StaticSegment(segment(routes::ADMIN_HOME)) view=AdminHomePage/>
                <Route path=StaticSegment(segment(routes::CORPORATE_HOME)) view=CorporateHomePage/>
                <Route path=StaticSegment(segment(routes::BRANCH_HOME)) view=BranchHomePage/>
                <Route path=StaticSegment(segment(routes::REPORTS)) view=ReportsPage/>
                <Route path=StaticSegment(segment(routes::PORTAL_HOME)) view=PortalHomePage/>
                <Route path=StaticSegment(segment(routes::HOME)) view=GenericHomePage/>
            </Routes>
        </Router>
    }
}
