//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{info, warn};

use super::layout::LayoutMetrics;
use super::login_screen::{LoginAction, LoginScreen};
use super::main_screen::{MainKeyResult, MainScreen, MainScreenState};
use super::notification_popup::NotificationPopup;
use super::register_screen::{RegisterAction, RegisterScreen};
use super::welcome_screen::{WelcomeAction, WelcomeScreen};
use crate::application::services::{NavigationController, NotificationManager};
use crate::application::{
    AuthMethod, AuthResponse, LoginUseCase, RegisterUseCase, SubmitBookingUseCase,
};
use crate::domain::{CatalogPort, NavEvent, Screen, UserProfile, ValidationError};
use crate::infrastructure::AppConfig;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

enum CurrentScreen {
    Welcome(WelcomeScreen),
    Login(LoginScreen),
    Register(RegisterScreen),
    Main(Box<MainScreenState>),
}

pub struct App {
    state: AppState,
    navigation: NavigationController,
    screen: CurrentScreen,
    login_use_case: LoginUseCase,
    register_use_case: RegisterUseCase,
    submit_booking_use_case: SubmitBookingUseCase,
    catalog: Arc<dyn CatalogPort>,
    notifications: NotificationManager,
    registry: CommandRegistry,
    theme: Theme,
    metrics: LayoutMetrics,
    default_display_name: String,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig, catalog: Arc<dyn CatalogPort>) -> Self {
        let theme = Theme::from_config(&config.theme);
        let metrics = LayoutMetrics::for_profile(config.ui.layout);
        let animations = config.ui.enable_animations;
        let navigation = NavigationController::new();

        Self {
            state: AppState::Running,
            screen: CurrentScreen::Welcome(WelcomeScreen::new(theme, metrics, animations)),
            navigation,
            login_use_case: LoginUseCase::new(config.ui.default_display_name.clone()),
            register_use_case: RegisterUseCase::new(),
            submit_booking_use_case: SubmitBookingUseCase::new(),
            catalog,
            notifications: NotificationManager::new(Duration::from_secs(
                config.ui.notification_duration,
            )),
            registry: CommandRegistry::with_overrides(&config.keybindings),
            theme,
            metrics,
            default_display_name: config.ui.default_display_name.clone(),
        }
    }

    /// Current top-level screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.navigation.screen()
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(screen = %self.screen(), "Starting event loop");
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                _ = animation_interval.tick() => {
                    if self.tick(ANIMATION_TICK_RATE) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                maybe_event = terminal_event => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.state = AppState::Exiting;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => {
                            warn!(error = %e, "Terminal event error");
                        }
                        None => self.state = AppState::Exiting,
                    }
                }
            }
        }

        Ok(())
    }

    /// Advances timers; returns whether a redraw is needed.
    fn tick(&mut self, elapsed: Duration) -> bool {
        let mut dirty = self.notifications.tick();
        if let CurrentScreen::Welcome(welcome) = &mut self.screen
            && welcome.is_animating()
        {
            welcome.tick(elapsed);
            dirty = true;
        }
        dirty
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_actionable(&key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => EventResult::Continue,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        let code = match mouse.kind {
            MouseEventKind::ScrollUp => KeyCode::Up,
            MouseEventKind::ScrollDown => KeyCode::Down,
            _ => return EventResult::Continue,
        };
        if self.screen().is_authenticated() {
            self.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
        } else {
            EventResult::Continue
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match &mut self.screen {
            CurrentScreen::Welcome(screen) => match screen.handle_key(key) {
                WelcomeAction::OpenLogin => self.navigate(NavEvent::OpenLogin, None),
                WelcomeAction::OpenRegister => self.navigate(NavEvent::OpenRegister, None),
                WelcomeAction::Quit => return EventResult::Exit,
                WelcomeAction::None => {}
            },
            CurrentScreen::Login(screen) => match screen.handle_key(key) {
                LoginAction::Submit => self.handle_login_submit(),
                LoginAction::OpenRegister => self.navigate(NavEvent::OpenRegister, None),
                LoginAction::Quit => return EventResult::Exit,
                LoginAction::None => {}
            },
            CurrentScreen::Register(screen) => match screen.handle_key(key) {
                RegisterAction::Submit => self.handle_register_submit(),
                RegisterAction::OpenLogin => self.navigate(NavEvent::OpenLogin, None),
                RegisterAction::Quit => return EventResult::Exit,
                RegisterAction::None => {}
            },
            CurrentScreen::Main(state) => match state.handle_key(key, &self.registry) {
                MainKeyResult::Quit => return EventResult::Exit,
                MainKeyResult::Logout => self.navigate(NavEvent::Logout, None),
                MainKeyResult::SubmitBooking => self.handle_booking_submit(),
                MainKeyResult::Consumed => return EventResult::Consumed,
                MainKeyResult::Ignored => {}
            },
        }

        EventResult::Continue
    }

    fn handle_login_submit(&mut self) {
        let CurrentScreen::Login(screen) = &self.screen else {
            return;
        };
        let result = self.login_use_case.execute(&screen.request());
        self.finish_auth(AuthMethod::Login, result);
    }

    fn handle_register_submit(&mut self) {
        let CurrentScreen::Register(screen) = &self.screen else {
            return;
        };
        let result = self.register_use_case.execute(&screen.request());
        self.finish_auth(AuthMethod::Register, result);
    }

    fn finish_auth(&mut self, method: AuthMethod, result: Result<AuthResponse, ValidationError>) {
        match result {
            Ok(response) => {
                self.notifications
                    .success(method.title(), method.success_message());
                let event = match method {
                    AuthMethod::Login => NavEvent::LoginSucceeded,
                    AuthMethod::Register => NavEvent::RegisterSucceeded,
                };
                self.navigate(event, Some(response.profile));
            }
            Err(e) => self.notifications.warn(method.title(), e.to_string()),
        }
    }

    fn handle_booking_submit(&mut self) {
        let CurrentScreen::Main(state) = &mut self.screen else {
            return;
        };
        match state.submit_booking(&self.submit_booking_use_case) {
            Ok(receipt) => self.notifications.success("Booking", receipt.message()),
            Err(e) => self.notifications.warn("Booking", e.to_string()),
        }
    }

    /// Applies `event` to the screen table and rebuilds the visible screen.
    /// Events without an edge from the current screen are ignored.
    fn navigate(&mut self, event: NavEvent, profile: Option<UserProfile>) {
        let Some(next) = self.navigation.dispatch(event) else {
            return;
        };

        self.screen = match next {
            Screen::Welcome => {
                CurrentScreen::Welcome(WelcomeScreen::new(self.theme, self.metrics, false))
            }
            Screen::Login => CurrentScreen::Login(LoginScreen::new(self.theme, self.metrics)),
            Screen::Register => {
                CurrentScreen::Register(RegisterScreen::new(self.theme, self.metrics))
            }
            Screen::Main => {
                let profile = profile
                    .unwrap_or_else(|| UserProfile::new(self.default_display_name.clone(), ""));
                CurrentScreen::Main(Box::new(MainScreenState::new(
                    profile,
                    self.catalog.clone(),
                    self.theme,
                    self.metrics,
                )))
            }
        };

        if event == NavEvent::Logout {
            info!("Session closed");
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match &mut self.screen {
            CurrentScreen::Welcome(screen) => frame.render_widget(screen, area),
            CurrentScreen::Login(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::Register(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::Main(state) => {
                frame.render_stateful_widget(MainScreen::new(&self.registry), area, &mut **state);
            }
        }

        if let Some(notification) = self.notifications.current_notification() {
            frame.render_widget(NotificationPopup::new(notification, &self.theme), area);
        }
    }

    #[cfg(test)]
    fn toast_message(&self) -> Option<&str> {
        self.notifications
            .current_notification()
            .map(|n| n.message.as_str())
    }

    #[cfg(test)]
    fn main_state(&self) -> Option<&MainScreenState> {
        match &self.screen {
            CurrentScreen::Main(state) => Some(state),
            _ => None,
        }
    }

    #[cfg(test)]
    fn is_animating(&self) -> bool {
        matches!(&self.screen, CurrentScreen::Welcome(w) if w.is_animating())
    }
}
