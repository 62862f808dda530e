//! Screen and tab identifiers with the screen transition table.

/// Top-level screen shown by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Landing screen with login/register choices.
    #[default]
    Welcome,
    /// Login form.
    Login,
    /// Registration form.
    Register,
    /// Authenticated area with the bottom tab bar.
    Main,
}

/// User intents that move between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavEvent {
    /// Login button or "Login here" link.
    OpenLogin,
    /// Register button or "Register here" link.
    OpenRegister,
    /// Login form accepted.
    LoginSucceeded,
    /// Registration form accepted.
    RegisterSucceeded,
    /// Logout from the authenticated area.
    Logout,
}

impl Screen {
    /// Returns the screen reached from `self` on `event`, or `None` when the
    /// event has no edge from this screen.
    #[must_use]
    pub const fn on(self, event: NavEvent) -> Option<Self> {
        match (self, event) {
            (Self::Welcome, NavEvent::OpenLogin) | (Self::Register, NavEvent::OpenLogin) => {
                Some(Self::Login)
            }
            (Self::Welcome, NavEvent::OpenRegister) | (Self::Login, NavEvent::OpenRegister) => {
                Some(Self::Register)
            }
            (Self::Login, NavEvent::LoginSucceeded)
            | (Self::Register, NavEvent::RegisterSucceeded) => Some(Self::Main),
            (Self::Main, NavEvent::Logout) => Some(Self::Welcome),
            (
                Self::Welcome,
                NavEvent::LoginSucceeded | NavEvent::RegisterSucceeded | NavEvent::Logout,
            )
            | (
                Self::Login,
                NavEvent::OpenLogin | NavEvent::RegisterSucceeded | NavEvent::Logout,
            )
            | (
                Self::Register,
                NavEvent::OpenRegister | NavEvent::LoginSucceeded | NavEvent::Logout,
            )
            | (
                Self::Main,
                NavEvent::OpenLogin
                | NavEvent::OpenRegister
                | NavEvent::LoginSucceeded
                | NavEvent::RegisterSucceeded,
            ) => None,
        }
    }

    /// Returns whether the screen belongs to the authenticated area.
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Main)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Welcome => write!(f, "welcome"),
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
            Self::Main => write!(f, "main"),
        }
    }
}

/// Bottom tab inside the authenticated area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Rules and facilities.
    #[default]
    Home,
    /// Room catalog and booking dialog.
    Booking,
    /// Booking history.
    History,
    /// Account details and logout.
    Profile,
}

impl Tab {
    /// All tabs in bar order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Booking, Self::History, Self::Profile];

    /// Returns the tab label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Booking => "Booking",
            Self::History => "History",
            Self::Profile => "Profile",
        }
    }

    /// Returns the position in the tab bar.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Booking => 1,
            Self::History => 2,
            Self::Profile => 3,
        }
    }

    /// Returns the next tab, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Booking,
            Self::Booking => Self::History,
            Self::History => Self::Profile,
            Self::Profile => Self::Home,
        }
    }

    /// Returns the previous tab, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Home => Self::Profile,
            Self::Booking => Self::Home,
            Self::History => Self::Booking,
            Self::Profile => Self::History,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Screen::Welcome, NavEvent::OpenLogin, Some(Screen::Login) ; "welcome_to_login")]
    #[test_case(Screen::Welcome, NavEvent::OpenRegister, Some(Screen::Register) ; "welcome_to_register")]
    #[test_case(Screen::Login, NavEvent::LoginSucceeded, Some(Screen::Main) ; "login_to_main")]
    #[test_case(Screen::Login, NavEvent::OpenRegister, Some(Screen::Register) ; "login_to_register")]
    #[test_case(Screen::Register, NavEvent::RegisterSucceeded, Some(Screen::Main) ; "register_to_main")]
    #[test_case(Screen::Register, NavEvent::OpenLogin, Some(Screen::Login) ; "register_to_login")]
    #[test_case(Screen::Main, NavEvent::Logout, Some(Screen::Welcome) ; "main_to_welcome")]
    #[test_case(Screen::Welcome, NavEvent::Logout, None ; "welcome_ignores_logout")]
    #[test_case(Screen::Main, NavEvent::OpenLogin, None ; "main_ignores_login")]
    #[test_case(Screen::Login, NavEvent::RegisterSucceeded, None ; "login_ignores_register_success")]
    fn test_transition_table(from: Screen, event: NavEvent, expected: Option<Screen>) {
        assert_eq!(from.on(event), expected);
    }

    #[test]
    fn test_every_screen_reachable_from_welcome_in_two_hops() {
        let events = [
            NavEvent::OpenLogin,
            NavEvent::OpenRegister,
            NavEvent::LoginSucceeded,
            NavEvent::RegisterSucceeded,
            NavEvent::Logout,
        ];
        let mut reached = vec![Screen::Welcome];
        for _ in 0..2 {
            let frontier = reached.clone();
            for screen in frontier {
                for event in events {
                    if let Some(next) = screen.on(event)
                        && !reached.contains(&next)
                    {
                        reached.push(next);
                    }
                }
            }
        }
        assert_eq!(reached.len(), 4);
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Home.next(), Tab::Booking);
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::Profile);
        for (i, tab) in Tab::ALL.into_iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn test_only_main_is_authenticated() {
        assert!(Screen::Main.is_authenticated());
        assert!(!Screen::Welcome.is_authenticated());
        assert!(!Screen::Login.is_authenticated());
        assert!(!Screen::Register.is_authenticated());
    }
}
