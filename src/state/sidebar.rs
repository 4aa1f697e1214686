//! Mobile drawer state for the dashboard sidebar.
//!
//! DESIGN
//! ======
//! The drawer animates in and out, so "open" is not a single boolean. Each
//! phase change bumps `transition_seq`; the timer that completes a transition
//! carries the sequence it was scheduled under and is ignored if the drawer
//! has moved on since. An interrupted open therefore can never resurrect the
//! backdrop after a close.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerPhase {
    #[default]
    Closed,
    /// Backdrop fading in, panel sliding in.
    Entering,
    Open,
    /// Backdrop fading out, panel sliding out.
    Leaving,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub phase: DrawerPhase,
    pub transition_seq: u64,
    /// Viewport is at or above the desktop breakpoint.
    pub desktop: bool,
}

impl SidebarState {
    /// Start the open animation. Returns the sequence to complete it with,
    /// or `None` if nothing changed.
    pub fn open(&mut self) -> Option<u64> {
        if self.desktop {
            return None;
        }
        match self.phase {
            DrawerPhase::Closed | DrawerPhase::Leaving => Some(self.enter(DrawerPhase::Entering)),
            DrawerPhase::Entering | DrawerPhase::Open => None,
        }
    }

    /// Start the close animation. Returns the sequence to complete it with,
    /// or `None` if nothing changed.
    pub fn close(&mut self) -> Option<u64> {
        match self.phase {
            DrawerPhase::Entering | DrawerPhase::Open => Some(self.enter(DrawerPhase::Leaving)),
            DrawerPhase::Closed | DrawerPhase::Leaving => None,
        }
    }

    /// Finish the animation started under `seq`. Stale sequences are ignored.
    pub fn finish_transition(&mut self, seq: u64) {
        if seq != self.transition_seq {
            return;
        }
        self.phase = match self.phase {
            DrawerPhase::Entering => DrawerPhase::Open,
            DrawerPhase::Leaving => DrawerPhase::Closed,
            settled => settled,
        };
    }

    /// Record the viewport class. Reaching desktop width drops the drawer
    /// immediately, without animation.
    pub fn set_desktop(&mut self, desktop: bool) {
        self.desktop = desktop;
        if desktop && self.phase != DrawerPhase::Closed {
            self.enter(DrawerPhase::Closed);
        }
    }

    /// Route changed or a navigation entry was picked.
    pub fn on_navigate(&mut self) -> Option<u64> {
        self.close()
    }

    /// Drawer overlay (backdrop + panel) is in the DOM.
    pub fn is_mounted(&self) -> bool {
        self.phase != DrawerPhase::Closed
    }

    /// Drawer is heading to, or at, fully visible.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, DrawerPhase::Entering | DrawerPhase::Open)
    }

    /// BEM modifier for the drawer root, driving the CSS animations.
    pub fn phase_class(&self) -> &'static str {
        match self.phase {
            DrawerPhase::Closed => "drawer--closed",
            DrawerPhase::Entering => "drawer--entering",
            DrawerPhase::Open => "drawer--open",
            DrawerPhase::Leaving => "drawer--leaving",
        }
    }

    fn enter(&mut self, phase: DrawerPhase) -> u64 {
        self.phase = phase;
        self.transition_seq += 1;
        self.transition_seq
    }
}
