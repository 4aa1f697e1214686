//! Path classification and the auth-aware routing table.
//!
//! | Path                     | Signed in          | Signed out      |
//! |--------------------------|--------------------|-----------------|
//! | `/login`                 | → `/dashboard`     | login page      |
//! | `/dashboard[/section]`   | dashboard shell    | → `/login`      |
//! | `/`                      | → `/dashboard`     | → `/login`      |
//! | anything else            | not-found page     | not-found page  |

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use crate::util::auth::{Guarded, guard};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ROOT_PATH: &str = "/";

/// Route classes the shell knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Login,
    Dashboard,
    NotFound,
}

/// Page rendered for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    NotFound,
}

/// Result of resolving a route against the current auth flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    Render(Screen),
    Redirect(AppRoute),
}

impl AppRoute {
    /// Classify a URL path. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = normalize_path(path);
        match path {
            ROOT_PATH => Self::Root,
            LOGIN_PATH => Self::Login,
            DASHBOARD_PATH => Self::Dashboard,
            _ if is_dashboard_section(path) => Self::Dashboard,
            _ => Self::NotFound,
        }
    }

    /// Canonical path for redirect targets.
    pub fn path(self) -> &'static str {
        match self {
            Self::Root | Self::NotFound => ROOT_PATH,
            Self::Login => LOGIN_PATH,
            Self::Dashboard => DASHBOARD_PATH,
        }
    }
}

/// Apply the routing table.
pub fn resolve(route: AppRoute, authenticated: bool) -> RouteOutcome {
    match route {
        AppRoute::Login if authenticated => RouteOutcome::Redirect(AppRoute::Dashboard),
        AppRoute::Login => RouteOutcome::Render(Screen::Login),
        AppRoute::Dashboard => match guard(authenticated, Screen::Dashboard) {
            Guarded::Allow(screen) => RouteOutcome::Render(screen),
            Guarded::Redirect(to) => RouteOutcome::Redirect(to),
        },
        AppRoute::Root if authenticated => RouteOutcome::Redirect(AppRoute::Dashboard),
        AppRoute::Root => RouteOutcome::Redirect(AppRoute::Login),
        AppRoute::NotFound => RouteOutcome::Render(Screen::NotFound),
    }
}

/// Strip trailing slashes, keeping `/` for the root.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { ROOT_PATH } else { trimmed }
}

fn is_dashboard_section(path: &str) -> bool {
    path.strip_prefix(DASHBOARD_PATH)
        .and_then(|rest| rest.strip_prefix('/'))
        .is_some_and(|rest| !rest.is_empty())
}
