use super::*;

// =============================================================
// is_current derivation
// =============================================================

#[test]
fn dashboard_entry_is_current_only_on_exact_path() {
    let dashboard = NAVIGATION[0];
    assert!(dashboard.is_current("/dashboard"));
    assert!(dashboard.is_current("/dashboard/"));
    assert!(!dashboard.is_current("/dashboard/projects"));
}

#[test]
fn section_entry_matches_itself_and_descendants() {
    let projects = NAVIGATION
        .iter()
        .find(|item| item.name == "Projects")
        .expect("projects entry");
    assert!(projects.is_current("/dashboard/projects"));
    assert!(projects.is_current("/dashboard/projects/42"));
    assert!(!projects.is_current("/dashboard/projects-archive"));
    assert!(!projects.is_current("/dashboard"));
}

#[test]
fn exactly_one_navigation_entry_is_current_per_section() {
    for item in NAVIGATION {
        let current: Vec<_> = NAVIGATION.iter().filter(|other| other.is_current(item.href)).collect();
        assert_eq!(current, vec![item], "{} should be the only current entry", item.name);
    }
}

#[test]
fn teams_are_current_under_their_href() {
    let tailwind = TEAMS[1];
    assert!(tailwind.is_current("/dashboard/teams/tailwind-labs"));
    assert!(!tailwind.is_current("/dashboard/teams/heroicons"));
}

#[test]
fn nothing_is_current_on_login() {
    assert!(NAVIGATION.iter().all(|item| !item.is_current("/login")));
    assert!(TEAMS.iter().all(|team| !team.is_current("/login")));
}

// =============================================================
// Static data
// =============================================================

#[test]
fn navigation_matches_shell_layout() {
    let names: Vec<_> = NAVIGATION.iter().map(|item| item.name).collect();
    assert_eq!(names, ["Dashboard", "Team", "Projects", "Calendar", "Documents", "Reports"]);
}

#[test]
fn team_initials_match_names() {
    for team in TEAMS {
        assert!(team.name.starts_with(team.initial), "{} / {}", team.name, team.initial);
    }
}

// =============================================================
// section_title
// =============================================================

#[test]
fn section_title_follows_current_entry() {
    assert_eq!(section_title("/dashboard"), "Dashboard");
    assert_eq!(section_title("/dashboard/calendar"), "Calendar");
    assert_eq!(section_title("/dashboard/teams/workcation"), "Workcation");
}

#[test]
fn section_title_falls_back_to_dashboard() {
    assert_eq!(section_title("/dashboard/unknown"), "Dashboard");
}
