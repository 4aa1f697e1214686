use super::*;

// =============================================================
// AppRoute::from_path
// =============================================================

#[test]
fn classifies_known_paths() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Root);
    assert_eq!(AppRoute::from_path(""), AppRoute::Root);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
}

#[test]
fn trailing_slashes_are_ignored() {
    assert_eq!(AppRoute::from_path("/login/"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/dashboard//"), AppRoute::Dashboard);
    assert_eq!(AppRoute::from_path("///"), AppRoute::Root);
}

#[test]
fn dashboard_sections_map_to_dashboard() {
    assert_eq!(AppRoute::from_path("/dashboard/projects"), AppRoute::Dashboard);
    assert_eq!(AppRoute::from_path("/dashboard/teams/heroicons"), AppRoute::Dashboard);
}

#[test]
fn lookalike_paths_are_not_found() {
    assert_eq!(AppRoute::from_path("/dashboards"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/loginx"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/settings"), AppRoute::NotFound);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn login_route_table() {
    assert_eq!(resolve(AppRoute::Login, false), RouteOutcome::Render(Screen::Login));
    assert_eq!(resolve(AppRoute::Login, true), RouteOutcome::Redirect(AppRoute::Dashboard));
}

#[test]
fn dashboard_route_table() {
    assert_eq!(resolve(AppRoute::Dashboard, true), RouteOutcome::Render(Screen::Dashboard));
    assert_eq!(resolve(AppRoute::Dashboard, false), RouteOutcome::Redirect(AppRoute::Login));
}

#[test]
fn root_route_table() {
    assert_eq!(resolve(AppRoute::Root, true), RouteOutcome::Redirect(AppRoute::Dashboard));
    assert_eq!(resolve(AppRoute::Root, false), RouteOutcome::Redirect(AppRoute::Login));
}

#[test]
fn unknown_routes_render_not_found_either_way() {
    assert_eq!(resolve(AppRoute::NotFound, true), RouteOutcome::Render(Screen::NotFound));
    assert_eq!(resolve(AppRoute::NotFound, false), RouteOutcome::Render(Screen::NotFound));
}

#[test]
fn root_settles_after_exactly_one_redirect() {
    for authenticated in [false, true] {
        let RouteOutcome::Redirect(target) = resolve(AppRoute::from_path("/"), authenticated) else {
            panic!("root must never render itself");
        };
        assert_ne!(target, AppRoute::Root);
        assert!(matches!(
            resolve(AppRoute::from_path(target.path()), authenticated),
            RouteOutcome::Render(Screen::Login | Screen::Dashboard)
        ));
    }
}

#[test]
fn redirect_targets_have_canonical_paths() {
    assert_eq!(AppRoute::Login.path(), "/login");
    assert_eq!(AppRoute::Dashboard.path(), "/dashboard");
    assert_eq!(AppRoute::Root.path(), "/");
}
