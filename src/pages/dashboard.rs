//! Dashboard page: the authenticated sidebar shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It owns the drawer state for its
//! lifetime, keeps it in sync with the viewport, and closes the drawer on
//! every route change so no overlay outlives a navigation.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::sidebar::{DesktopSidebar, MobileDrawer, MobileTopBar, close_drawer};
use crate::config::AppConfig;
use crate::state::auth::{is_authenticated, use_auth};
use crate::state::navigation::section_title;
use crate::state::sidebar::SidebarState;
use crate::util::auth::install_route_redirect;
use crate::util::routing::AppRoute;
use crate::util::viewport::install_viewport_watch;

/// Dashboard page — sidebar shell around the content area.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<AppConfig>();
    install_route_redirect(AppRoute::Dashboard, auth, use_navigate());

    let sidebar = RwSignal::new(SidebarState::default());
    install_viewport_watch(config.desktop_media_query(), sidebar);

    let transition = config.drawer_transition();
    let pathname = use_location().pathname;
    Effect::new(move |prev: Option<String>| {
        let path = pathname.get();
        if prev.is_some_and(|prev| prev != path) {
            close_drawer(sidebar, transition);
        }
        path
    });

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                close_drawer(sidebar, transition);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Show
            when=move || is_authenticated(auth)
            fallback=|| view! { <div class="dashboard-page"><p>"Redirecting to login..."</p></div> }
        >
            <div class="dashboard-page">
                <MobileDrawer sidebar=sidebar/>
                <DesktopSidebar/>
                <MobileTopBar sidebar=sidebar/>
                <main class="dashboard-page__main">
                    <div class="dashboard-page__content">
                        <h1 class="dashboard-page__title">
                            {move || pathname.with(|path| section_title(path))}
                        </h1>
                    </div>
                </main>
            </div>
        </Show>
    }
}
