//! Spacing presets shared by every screen.

use crate::infrastructure::config::LayoutProfile;

/// Paddings and sizes derived from a [`LayoutProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Width of centered forms (welcome, login, register).
    pub form_width: u16,
    /// Horizontal padding around tab bodies.
    pub padding_x: u16,
    /// Blank rows between form elements.
    pub gap: u16,
    /// Height of a room or history card, borders included.
    pub card_height: u16,
    /// Width of the room dialog.
    pub dialog_width: u16,
}

impl LayoutMetrics {
    #[must_use]
    pub const fn for_profile(profile: LayoutProfile) -> Self {
        match profile {
            LayoutProfile::Comfortable => Self {
                form_width: 56,
                padding_x: 2,
                gap: 1,
                card_height: 4,
                dialog_width: 60,
            },
            LayoutProfile::Compact => Self {
                form_width: 44,
                padding_x: 1,
                gap: 0,
                card_height: 3,
                dialog_width: 48,
            },
        }
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::for_profile(LayoutProfile::default())
    }
}
