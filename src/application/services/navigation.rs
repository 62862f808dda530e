//! Screen and tab controllers.

use tracing::debug;

use crate::domain::{NavEvent, Screen, Tab};

/// Holds the current top-level screen.
///
/// The `go_*` methods overwrite the screen unconditionally; [`dispatch`]
/// follows the transition table and ignores events without an edge.
///
/// [`dispatch`]: NavigationController::dispatch
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    screen: Screen,
}

impl NavigationController {
    /// Creates a controller on the welcome screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Shows the login form.
    pub fn go_login(&mut self) {
        self.set(Screen::Login);
    }

    /// Shows the registration form.
    pub fn go_register(&mut self) {
        self.set(Screen::Register);
    }

    /// Shows the authenticated area.
    pub fn go_main(&mut self) {
        self.set(Screen::Main);
    }

    /// Shows the welcome screen.
    pub fn go_welcome(&mut self) {
        self.set(Screen::Welcome);
    }

    /// Applies `event`; returns the new screen if the table has an edge.
    pub fn dispatch(&mut self, event: NavEvent) -> Option<Screen> {
        let next = self.screen.on(event);
        match next {
            Some(screen) => self.set(screen),
            None => debug!(screen = %self.screen, ?event, "Navigation event ignored"),
        }
        next
    }

    fn set(&mut self, screen: Screen) {
        debug!(from = %self.screen, to = %screen, "Screen change");
        self.screen = screen;
    }
}

/// Holds the selected bottom tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabController {
    tab: Tab,
}

impl TabController {
    /// Creates a controller on the home tab.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected tab.
    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    /// Selects `tab`; returns whether the selection changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        let changed = self.tab != tab;
        self.tab = tab;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_welcome() {
        assert_eq!(NavigationController::new().screen(), Screen::Welcome);
    }

    #[test]
    fn test_go_methods_overwrite() {
        let mut nav = NavigationController::new();
        nav.go_main();
        assert_eq!(nav.screen(), Screen::Main);
        nav.go_register();
        assert_eq!(nav.screen(), Screen::Register);
        nav.go_login();
        assert_eq!(nav.screen(), Screen::Login);
        nav.go_welcome();
        assert_eq!(nav.screen(), Screen::Welcome);
    }

    #[test]
    fn test_dispatch_follows_table() {
        let mut nav = NavigationController::new();
        assert_eq!(nav.dispatch(NavEvent::OpenLogin), Some(Screen::Login));
        assert_eq!(nav.dispatch(NavEvent::LoginSucceeded), Some(Screen::Main));
        assert_eq!(nav.dispatch(NavEvent::OpenRegister), None);
        assert_eq!(nav.screen(), Screen::Main);
        assert_eq!(nav.dispatch(NavEvent::Logout), Some(Screen::Welcome));
    }

    #[test]
    fn test_select_tab() {
        let mut tabs = TabController::new();
        assert_eq!(tabs.tab(), Tab::Home);
        assert!(tabs.select_tab(Tab::History));
        assert!(!tabs.select_tab(Tab::History));
        assert_eq!(tabs.tab(), Tab::History);
    }
}
