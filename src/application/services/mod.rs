//! Application services.

pub mod navigation;
pub mod notification_manager;
pub mod section_toggles;

pub use navigation::{NavigationController, TabController};
pub use notification_manager::NotificationManager;
pub use section_toggles::SectionToggles;
