//! Static informational content for the home tab.

/// Identifier of a home-tab section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Borrowing regulations.
    Regulations,
    /// Booking flow diagram.
    FlowDiagram,
    /// Code of conduct.
    ConductRules,
    /// Room-specific extra rules.
    AdditionalRules,
    /// Facilities per room type.
    Facilities,
}

impl SectionId {
    /// Sections in display order.
    pub const ALL: [Self; 5] = [
        Self::Regulations,
        Self::FlowDiagram,
        Self::ConductRules,
        Self::AdditionalRules,
        Self::Facilities,
    ];

    /// Position in display order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Regulations => 0,
            Self::FlowDiagram => 1,
            Self::ConductRules => 2,
            Self::AdditionalRules => 3,
            Self::Facilities => 4,
        }
    }
}

/// Numbered list item with optional indented sub-items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Item text.
    pub text: &'static str,
    /// Indented children, rendered verbatim.
    pub children: &'static [&'static str],
}

impl ListItem {
    /// Creates an item without children.
    #[must_use]
    pub const fn plain(text: &'static str) -> Self {
        Self {
            text,
            children: &[],
        }
    }

    /// Creates an item with children.
    #[must_use]
    pub const fn nested(text: &'static str, children: &'static [&'static str]) -> Self {
        Self { text, children }
    }
}

/// Renderable piece of a section body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// Bold sub-heading.
    Heading(&'static str),
    /// Numbered list.
    Numbered(&'static [ListItem]),
    /// Bulleted list.
    Bullets(&'static [&'static str]),
    /// Image asset, referenced by logical name.
    Image {
        /// Logical asset name.
        asset: &'static str,
        /// Alternative text.
        caption: &'static str,
    },
}

/// An expandable home-tab section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSection {
    /// Identifier.
    pub id: SectionId,
    /// Card title.
    pub title: &'static str,
    /// Body shown when expanded.
    pub blocks: &'static [ContentBlock],
}
