//! Authenticated area: header, active tab body, tab bar and key hints.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};
use tracing::debug;

use super::booking_view::{BookingOutcome, BookingView, BookingViewState};
use super::history_view::{HistoryView, HistoryViewState};
use super::home_view::{HomeView, HomeViewState};
use super::layout::LayoutMetrics;
use super::profile_view::ProfileView;
use crate::VERSION;
use crate::application::services::TabController;
use crate::application::{BookingReceipt, SubmitBookingUseCase};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{CatalogPort, Tab, UserProfile, ValidationError};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, TabBar, TabBarStyle,
};

const APP_TITLE: &str = "ResIF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainKeyResult {
    Consumed,
    Ignored,
    Quit,
    Logout,
    SubmitBooking,
}

/// Per-tab state, rebuilt whenever the tab changes.
enum TabView {
    Home(HomeViewState),
    Booking(Box<BookingViewState>),
    History(HistoryViewState),
    Profile,
}

impl TabView {
    fn for_tab(tab: Tab, theme: &Theme) -> Self {
        match tab {
            Tab::Home => Self::Home(HomeViewState::new()),
            Tab::Booking => Self::Booking(Box::new(BookingViewState::new(theme))),
            Tab::History => Self::History(HistoryViewState::new()),
            Tab::Profile => Self::Profile,
        }
    }
}

pub struct MainScreenState {
    tabs: TabController,
    view: TabView,
    profile: UserProfile,
    catalog: Arc<dyn CatalogPort>,
    theme: Theme,
    metrics: LayoutMetrics,
}

impl MainScreenState {
    #[must_use]
    pub fn new(
        profile: UserProfile,
        catalog: Arc<dyn CatalogPort>,
        theme: Theme,
        metrics: LayoutMetrics,
    ) -> Self {
        let tabs = TabController::new();
        Self {
            view: TabView::for_tab(tabs.tab(), &theme),
            tabs,
            profile,
            catalog,
            theme,
            metrics,
        }
    }

    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tabs.tab()
    }

    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Booking tab state, when that tab is active.
    #[must_use]
    pub fn booking(&self) -> Option<&BookingViewState> {
        match &self.view {
            TabView::Booking(state) => Some(&**state),
            _ => None,
        }
    }

    pub fn booking_mut(&mut self) -> Option<&mut BookingViewState> {
        match &mut self.view {
            TabView::Booking(state) => Some(&mut **state),
            _ => None,
        }
    }

    /// Switches tab; the target tab starts from fresh state unless it is
    /// already selected.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.tabs.select_tab(tab) {
            debug!(tab = tab.title(), "Tab change");
            self.view = TabView::for_tab(tab, &self.theme);
        }
    }

    /// Submits the open booking dialog.
    ///
    /// # Errors
    /// Returns [`ValidationError::NoRoomSelected`] when the booking tab or its
    /// dialog is not open, or the use case's validation error.
    pub fn submit_booking(
        &mut self,
        use_case: &SubmitBookingUseCase,
    ) -> Result<BookingReceipt, ValidationError> {
        self.booking_mut()
            .ok_or(ValidationError::NoRoomSelected)?
            .submit(use_case)
    }

    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> MainKeyResult {
        let action = registry.find_action(key);

        if let Some(booking) = self.booking_mut()
            && booking.is_dialog_open()
        {
            return match booking.handle_key(key, action, &[]) {
                BookingOutcome::Submit => MainKeyResult::SubmitBooking,
                BookingOutcome::Consumed | BookingOutcome::Ignored => MainKeyResult::Consumed,
            };
        }

        let Some(action) = action else {
            return MainKeyResult::Ignored;
        };

        match action {
            Action::Quit => return MainKeyResult::Quit,
            Action::Logout => return MainKeyResult::Logout,
            Action::NextTab => self.select_tab(self.tab().next()),
            Action::PreviousTab => self.select_tab(self.tab().previous()),
            Action::GoHome => self.select_tab(Tab::Home),
            Action::GoBooking => self.select_tab(Tab::Booking),
            Action::GoHistory => self.select_tab(Tab::History),
            Action::GoProfile => self.select_tab(Tab::Profile),
            _ => return self.forward_to_view(key, action),
        }
        MainKeyResult::Consumed
    }

    fn forward_to_view(&mut self, key: KeyEvent, action: Action) -> MainKeyResult {
        let used = match &mut self.view {
            TabView::Home(state) => state.handle_action(action, self.catalog.home_sections()),
            TabView::Booking(state) => {
                state.handle_key(key, Some(action), self.catalog.rooms())
                    != BookingOutcome::Ignored
            }
            TabView::History(state) => {
                state.handle_action(action, self.catalog.booking_history().len())
            }
            TabView::Profile => {
                if action == Action::Select {
                    return MainKeyResult::Logout;
                }
                false
            }
        };

        if used {
            MainKeyResult::Consumed
        } else {
            MainKeyResult::Ignored
        }
    }
}

impl HasCommands for MainScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        if let Some(booking) = self.booking()
            && booking.is_dialog_open()
        {
            return vec![
                Keybind::new(
                    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                    Action::Select,
                    "Book",
                ),
                Keybind::new(
                    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
                    Action::NavigateDown,
                    "Field",
                ),
                Keybind::new(
                    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
                    Action::Cancel,
                    "Close",
                ),
            ];
        }

        let mut commands: Vec<Keybind> = registry
            .keybind(Action::GoHome, "Tabs")
            .map(|k| k.display("1-4"))
            .into_iter()
            .collect();

        let select_label = match self.view {
            TabView::Home(_) => Some("Toggle"),
            TabView::Booking(_) => Some("Open"),
            TabView::History(_) => None,
            TabView::Profile => Some("Logout"),
        };
        if !matches!(self.view, TabView::Profile) {
            commands.extend(
                registry
                    .keybind(Action::NavigateDown, "Move")
                    .map(|k| k.display("↑↓")),
            );
        }
        if let Some(label) = select_label {
            commands.extend(registry.keybind(Action::Select, label));
        }

        commands.extend(registry.keybind(Action::Logout, "Logout"));
        commands.extend(registry.keybind(Action::Quit, "Quit"));
        commands
    }
}

pub struct MainScreen<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> MainScreen<'a> {
    #[must_use]
    pub const fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }
}

impl StatefulWidget for MainScreen<'_> {
    type State = MainScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header_area, body_area, tabs_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        HeaderBar::new(APP_TITLE, VERSION, state.profile.full_name())
            .style(HeaderBarStyle::from_theme(&state.theme))
            .render(header_area, buf);

        render_body(state, body_area, buf);

        TabBar::new(state.tab())
            .style(TabBarStyle::from_theme(&state.theme))
            .render(tabs_area, buf);

        let commands = state.get_commands(self.registry);
        FooterBar::new(&commands)
            .context(state.tab().title())
            .style(FooterBarStyle::from_theme(&state.theme))
            .render(footer_area, buf);
    }
}

fn render_body(state: &mut MainScreenState, area: Rect, buf: &mut Buffer) {
    let theme = &state.theme;
    let metrics = state.metrics;
    let catalog = &state.catalog;

    match &mut state.view {
        TabView::Home(view) => {
            HomeView::new(catalog.home_sections(), theme, metrics).render(area, buf, view);
        }
        TabView::Booking(view) => {
            BookingView::new(catalog.rooms(), theme, metrics).render(area, buf, &mut **view);
        }
        TabView::History(view) => {
            HistoryView::new(catalog.booking_history(), theme, metrics).render(area, buf, view);
        }
        TabView::Profile => {
            ProfileView::new(&state.profile, theme, metrics).render(area, buf);
        }
    }
}
