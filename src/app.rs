//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::config::AppConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage};
use crate::state::auth::{provide_auth, use_auth};
use crate::util::auth::install_route_redirect;
use crate::util::routing::AppRoute;
use crate::util::session_store::LocalStorageSession;

/// Root application component.
///
/// Provides the config and auth contexts and sets up client-side routing.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    provide_auth(Arc::new(LocalStorageSession::new(config.session_key.clone())));
    provide_context(config);

    view! {
        <Title text="Scangrid"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), WildcardSegment("section")) view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// `/` never renders; it forwards to `/login` or `/dashboard`.
#[component]
fn RootRedirect() -> impl IntoView {
    install_route_redirect(AppRoute::Root, use_auth(), use_navigate());
}
