//! Dashboard sidebar: fixed desktop panel, animated mobile drawer, and the
//! sticky mobile top bar that opens it.
//!
//! ARCHITECTURE
//! ============
//! Both presentations render the same `SidebarContent`. Drawer phase lives in
//! a `RwSignal<SidebarState>` provided by the dashboard page; CSS keyframes
//! keyed on the phase class do the fade/slide, and a timer completes each
//! transition after `drawer_transition_ms`.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icon::IconSvg;
use crate::config::AppConfig;
use crate::state::auth::{AuthController, use_auth};
use crate::state::navigation::{
    Icon, LOGO_URL, NAVIGATION, NavigationItem, PROFILE_AVATAR_URL, PROFILE_NAME, TEAMS, Team, section_title,
};
use crate::state::sidebar::SidebarState;

/// Start the drawer open animation and schedule its completion.
pub fn open_drawer(sidebar: RwSignal<SidebarState>, transition: Duration) {
    let seq = sidebar.try_update(SidebarState::open).flatten();
    schedule_finish(sidebar, seq, transition);
}

/// Start the drawer close animation and schedule its completion.
pub fn close_drawer(sidebar: RwSignal<SidebarState>, transition: Duration) {
    let seq = sidebar.try_update(SidebarState::close).flatten();
    schedule_finish(sidebar, seq, transition);
}

fn schedule_finish(sidebar: RwSignal<SidebarState>, seq: Option<u64>, transition: Duration) {
    let Some(seq) = seq else {
        return;
    };
    set_timeout(
        move || {
            if sidebar.try_update(|s| s.finish_transition(seq)).is_none() {
                log::trace!("drawer disposed before transition {seq} finished");
            }
        },
        transition,
    );
}

fn entry_class(current: bool) -> &'static str {
    if current { "sidebar-link sidebar-link--current" } else { "sidebar-link" }
}

/// Logo, navigation, teams, and profile footer.
#[component]
pub fn SidebarContent(on_navigate: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;

    let nav_item = move |item: NavigationItem| {
        let current = move || pathname.with(|path| item.is_current(path));
        view! {
            <li>
                <a
                    href=item.href
                    class=move || entry_class(current())
                    aria-current=move || current().then_some("page")
                    on:click=move |_| on_navigate.run(())
                >
                    <IconSvg icon=item.icon class="sidebar-link__icon"/>
                    {item.name}
                </a>
            </li>
        }
    };

    let team_item = move |team: Team| {
        let current = move || pathname.with(|path| team.is_current(path));
        view! {
            <li>
                <a
                    href=team.href
                    class=move || entry_class(current())
                    on:click=move |_| on_navigate.run(())
                >
                    <span class="sidebar-link__initial">{team.initial.to_string()}</span>
                    <span class="sidebar-link__label">{team.name}</span>
                </a>
            </li>
        }
    };

    view! {
        <div class="sidebar">
            <div class="sidebar__logo">
                <img alt="Scangrid Logo" src=LOGO_URL/>
            </div>
            <nav class="sidebar__nav">
                <ul role="list" class="sidebar__sections">
                    <li>
                        <ul role="list" class="sidebar__list">
                            {NAVIGATION.iter().copied().map(nav_item).collect_view()}
                        </ul>
                    </li>
                    <li>
                        <div class="sidebar__heading">"Your teams"</div>
                        <ul role="list" class="sidebar__list">
                            {TEAMS.iter().copied().map(team_item).collect_view()}
                        </ul>
                    </li>
                    <li class="sidebar__profile">
                        <a href="#" class="sidebar__profile-link">
                            <img class="avatar" alt="" src=PROFILE_AVATAR_URL/>
                            <span class="sr-only">"Your profile"</span>
                            <span aria-hidden="true">{PROFILE_NAME}</span>
                        </a>
                        <button
                            type="button"
                            class="sidebar__sign-out"
                            on:click=move |_| auth.update(AuthController::logout)
                        >
                            "Sign out"
                        </button>
                    </li>
                </ul>
            </nav>
        </div>
    }
}

/// Fixed panel shown at and above the desktop breakpoint.
#[component]
pub fn DesktopSidebar() -> impl IntoView {
    view! {
        <div class="desktop-sidebar">
            <SidebarContent on_navigate=Callback::new(|()| ())/>
        </div>
    }
}

/// Modal drawer shown below the desktop breakpoint while open.
#[component]
pub fn MobileDrawer(sidebar: RwSignal<SidebarState>) -> impl IntoView {
    let transition = expect_context::<AppConfig>().drawer_transition();
    let close = Callback::new(move |()| close_drawer(sidebar, transition));
    let style = format!("--drawer-transition: {}ms", transition.as_millis());

    view! {
        <Show when=move || sidebar.with(SidebarState::is_mounted)>
            <div
                class=move || format!("drawer {}", sidebar.with(SidebarState::phase_class))
                style=style.clone()
                role="dialog"
                aria-modal="true"
            >
                <div class="drawer__backdrop" on:click=move |_| close.run(())></div>
                <div class="drawer__panel">
                    <div class="drawer__close">
                        <button type="button" class="icon-button" on:click=move |_| close.run(())>
                            <span class="sr-only">"Close sidebar"</span>
                            <IconSvg icon=Icon::XMark class="icon icon--inverse"/>
                        </button>
                    </div>
                    <SidebarContent on_navigate=close/>
                </div>
            </div>
        </Show>
    }
}

/// Sticky bar with the hamburger button, section title, and avatar.
#[component]
pub fn MobileTopBar(sidebar: RwSignal<SidebarState>) -> impl IntoView {
    let transition = expect_context::<AppConfig>().drawer_transition();
    let pathname = use_location().pathname;

    view! {
        <div class="mobile-top-bar">
            <button type="button" class="icon-button" on:click=move |_| open_drawer(sidebar, transition)>
                <span class="sr-only">"Open sidebar"</span>
                <IconSvg icon=Icon::Bars3 class="icon"/>
            </button>
            <div class="mobile-top-bar__title">{move || pathname.with(|path| section_title(path))}</div>
            <a href="#">
                <span class="sr-only">"Your profile"</span>
                <img class="avatar" alt="" src=PROFILE_AVATAR_URL/>
            </a>
        </div>
    }
}
