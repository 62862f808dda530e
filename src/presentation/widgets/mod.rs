mod footer_bar;
mod header_bar;
mod input;
mod tab_bar;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use tab_bar::{TabBar, TabBarStyle};
