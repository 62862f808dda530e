//! UI screens.

mod app;
mod booking_view;
mod history_view;
mod home_view;
mod layout;
mod login_screen;
mod main_screen;
mod notification_popup;
mod profile_view;
mod register_screen;
mod utils;
mod welcome_screen;

pub use app::App;
pub use booking_view::{BookingOutcome, BookingView, BookingViewState};
pub use history_view::{HistoryView, HistoryViewState};
pub use home_view::{HomeView, HomeViewState};
pub use layout::LayoutMetrics;
pub use login_screen::{LoginAction, LoginScreen};
pub use main_screen::{MainKeyResult, MainScreen, MainScreenState};
pub use notification_popup::NotificationPopup;
pub use profile_view::ProfileView;
pub use register_screen::{RegisterAction, RegisterScreen};
pub use welcome_screen::{WelcomeAction, WelcomeChoice, WelcomeScreen};
