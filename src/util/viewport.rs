//! Desktop/mobile viewport detection.
//!
//! Evaluates the configured `(min-width: …)` media query and keeps the
//! sidebar state's `desktop` flag in sync on resize. Requires a browser
//! environment; host builds report a mobile viewport.

use leptos::prelude::*;

use crate::state::sidebar::SidebarState;

/// True if `query` currently matches.
pub fn matches_media(query: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.match_media(query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(e) => {
                log::warn!("match_media({query}) failed: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("no browser viewport for {query}");
        false
    }
}

/// Seed `sidebar.desktop` and keep it updated on window resize.
pub fn install_viewport_watch(query: String, sidebar: RwSignal<SidebarState>) {
    sync_viewport(&query, sidebar);

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| sync_viewport(&query, sidebar));
        on_cleanup(move || handle.remove());
    }
}

fn sync_viewport(query: &str, sidebar: RwSignal<SidebarState>) {
    let desktop = matches_media(query);
    if sidebar.with_untracked(|s| s.desktop) == desktop {
        return;
    }
    log::debug!("viewport desktop={desktop}");
    sidebar.update(|s| s.set_desktop(desktop));
}
