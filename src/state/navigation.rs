//! Static sidebar navigation data.
//!
//! DESIGN
//! ======
//! Entries carry no "current" flag. Highlighting is derived from the active
//! path, so the same arrays serve every route without going stale.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::util::routing::normalize_path;

/// Outline icons used by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Home,
    Users,
    Folder,
    Calendar,
    DocumentDuplicate,
    ChartPie,
    Bars3,
    XMark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    /// Only an exact path match counts as current.
    pub exact: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Team {
    pub id: u32,
    pub name: &'static str,
    pub href: &'static str,
    pub initial: char,
}

pub const NAVIGATION: &[NavigationItem] = &[
    NavigationItem { name: "Dashboard", href: "/dashboard", icon: Icon::Home, exact: true },
    NavigationItem { name: "Team", href: "/dashboard/team", icon: Icon::Users, exact: false },
    NavigationItem { name: "Projects", href: "/dashboard/projects", icon: Icon::Folder, exact: false },
    NavigationItem { name: "Calendar", href: "/dashboard/calendar", icon: Icon::Calendar, exact: false },
    NavigationItem {
        name: "Documents",
        href: "/dashboard/documents",
        icon: Icon::DocumentDuplicate,
        exact: false,
    },
    NavigationItem { name: "Reports", href: "/dashboard/reports", icon: Icon::ChartPie, exact: false },
];

pub const TEAMS: &[Team] = &[
    Team { id: 1, name: "Heroicons", href: "/dashboard/teams/heroicons", initial: 'H' },
    Team { id: 2, name: "Tailwind Labs", href: "/dashboard/teams/tailwind-labs", initial: 'T' },
    Team { id: 3, name: "Workcation", href: "/dashboard/teams/workcation", initial: 'W' },
];

pub const PROFILE_NAME: &str = "Tom Cook";
pub const PROFILE_AVATAR_URL: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
pub const LOGO_URL: &str = "/scangrid_logo.svg";

/// True if `path` is `href` itself or, unless `exact`, lies beneath it.
pub fn is_current(href: &str, exact: bool, path: &str) -> bool {
    let path = normalize_path(path);
    if path == href {
        return true;
    }
    !exact
        && path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

impl NavigationItem {
    pub fn is_current(&self, path: &str) -> bool {
        is_current(self.href, self.exact, path)
    }
}

impl Team {
    pub fn is_current(&self, path: &str) -> bool {
        is_current(self.href, false, path)
    }
}

/// Header title for the active path: the current entry's name, else "Dashboard".
pub fn section_title(path: &str) -> &'static str {
    NAVIGATION
        .iter()
        .find(|item| item.is_current(path))
        .map(|item| item.name)
        .or_else(|| TEAMS.iter().find(|team| team.is_current(path)).map(|team| team.name))
        .unwrap_or("Dashboard")
}
