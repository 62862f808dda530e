use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Commands available inside the authenticated area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Logout,

    // Tabs
    NextTab,
    PreviousTab,
    GoHome,
    GoBooking,
    GoHistory,
    GoProfile,

    // Lists
    NavigateUp,
    NavigateDown,
    SelectFirst,
    SelectLast,
    Select,
    Cancel,
}

impl Action {
    /// Short label used in the footer bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Logout => "Logout",
            Self::NextTab => "Next tab",
            Self::PreviousTab => "Prev tab",
            Self::GoHome => "Home",
            Self::GoBooking => "Booking",
            Self::GoHistory => "History",
            Self::GoProfile => "Profile",
            Self::NavigateUp => "Up",
            Self::NavigateDown => "Down",
            Self::SelectFirst => "First",
            Self::SelectLast => "Last",
            Self::Select => "Select",
            Self::Cancel => "Close",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub key_display: Option<Cow<'static, str>>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            key_display: None,
            visible_in_bar: true,
        }
    }

    /// Replaces the rendered key text, e.g. `1-4` for a group of bindings.
    #[must_use]
    pub fn display(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.key_display = Some(text.into());
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}
