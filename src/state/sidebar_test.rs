use super::*;

fn opened() -> SidebarState {
    let mut state = SidebarState::default();
    let seq = state.open().expect("open from closed");
    state.finish_transition(seq);
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_closed_and_unmounted() {
    let state = SidebarState::default();
    assert_eq!(state.phase, DrawerPhase::Closed);
    assert!(!state.is_mounted());
    assert!(!state.is_open());
    assert_eq!(state.phase_class(), "drawer--closed");
}

// =============================================================
// Open / close lifecycle
// =============================================================

#[test]
fn open_enters_then_settles_open() {
    let mut state = SidebarState::default();
    let seq = state.open().expect("open");
    assert_eq!(state.phase, DrawerPhase::Entering);
    assert!(state.is_mounted());
    assert!(state.is_open());
    state.finish_transition(seq);
    assert_eq!(state.phase, DrawerPhase::Open);
}

#[test]
fn open_then_close_leaves_no_backdrop() {
    let mut state = opened();
    let seq = state.close().expect("close");
    assert_eq!(state.phase, DrawerPhase::Leaving);
    assert!(state.is_mounted());
    assert!(!state.is_open());
    state.finish_transition(seq);
    assert_eq!(state.phase, DrawerPhase::Closed);
    assert!(!state.is_mounted());
}

#[test]
fn close_during_enter_ignores_stale_enter_completion() {
    let mut state = SidebarState::default();
    let enter_seq = state.open().expect("open");
    let leave_seq = state.close().expect("close while entering");
    state.finish_transition(enter_seq);
    assert_eq!(state.phase, DrawerPhase::Leaving);
    state.finish_transition(leave_seq);
    assert_eq!(state.phase, DrawerPhase::Closed);
    assert!(!state.is_mounted());
}

#[test]
fn reopen_during_leave_ignores_stale_leave_completion() {
    let mut state = opened();
    let leave_seq = state.close().expect("close");
    let enter_seq = state.open().expect("reopen while leaving");
    state.finish_transition(leave_seq);
    assert_eq!(state.phase, DrawerPhase::Entering);
    state.finish_transition(enter_seq);
    assert_eq!(state.phase, DrawerPhase::Open);
}

#[test]
fn repeated_open_and_close_are_noops() {
    let mut state = opened();
    assert_eq!(state.open(), None);
    let seq = state.close().expect("close");
    assert_eq!(state.close(), None);
    state.finish_transition(seq);
    assert_eq!(state.close(), None);
    assert_eq!(state.phase, DrawerPhase::Closed);
}

// =============================================================
// Navigation and viewport
// =============================================================

#[test]
fn navigation_closes_open_drawer() {
    let mut state = opened();
    let seq = state.on_navigate().expect("navigate closes");
    state.finish_transition(seq);
    assert!(!state.is_mounted());
}

#[test]
fn navigation_with_closed_drawer_is_noop() {
    let mut state = SidebarState::default();
    assert_eq!(state.on_navigate(), None);
    assert_eq!(state.transition_seq, 0);
}

#[test]
fn reaching_desktop_drops_drawer_immediately() {
    let mut state = opened();
    let seq_before = state.transition_seq;
    state.set_desktop(true);
    assert_eq!(state.phase, DrawerPhase::Closed);
    assert!(state.transition_seq > seq_before);
    state.finish_transition(seq_before);
    assert_eq!(state.phase, DrawerPhase::Closed);
}

#[test]
fn drawer_does_not_open_on_desktop() {
    let mut state = SidebarState::default();
    state.set_desktop(true);
    assert_eq!(state.open(), None);
    assert!(!state.is_mounted());
    state.set_desktop(false);
    assert!(state.open().is_some());
}

#[test]
fn phase_classes_are_distinct() {
    let mut state = SidebarState::default();
    let closed = state.phase_class();
    let seq = state.open().expect("open");
    let entering = state.phase_class();
    state.finish_transition(seq);
    let open = state.phase_class();
    state.close();
    let leaving = state.phase_class();
    let all = [closed, entering, open, leaving];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
