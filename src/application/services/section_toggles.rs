//! Expanded/collapsed state of the home-tab sections.

use crate::domain::entities::SectionId;

/// Independent expand flags, one per section. All start collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionToggles {
    expanded: [bool; SectionId::ALL.len()],
}

impl SectionToggles {
    /// Creates all-collapsed toggles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips `section` only; returns its new state.
    pub fn toggle(&mut self, section: SectionId) -> bool {
        let slot = &mut self.expanded[section.index()];
        *slot = !*slot;
        *slot
    }

    /// Returns whether `section` is expanded.
    #[must_use]
    pub const fn is_expanded(&self, section: SectionId) -> bool {
        self.expanded[section.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_all_start_collapsed() {
        let toggles = SectionToggles::new();
        for section in SectionId::ALL {
            assert!(!toggles.is_expanded(section));
        }
    }

    #[test_case(1, true ; "odd_once")]
    #[test_case(2, false ; "even_twice")]
    #[test_case(5, true ; "odd_five")]
    #[test_case(8, false ; "even_eight")]
    fn test_toggle_parity(times: usize, expanded: bool) {
        let mut toggles = SectionToggles::new();
        for _ in 0..times {
            toggles.toggle(SectionId::ConductRules);
        }
        assert_eq!(toggles.is_expanded(SectionId::ConductRules), expanded);
    }

    #[test]
    fn test_toggle_is_isolated() {
        for target in SectionId::ALL {
            let mut toggles = SectionToggles::new();
            toggles.toggle(target);
            for other in SectionId::ALL {
                assert_eq!(toggles.is_expanded(other), other == target);
            }
        }
    }

    #[test]
    fn test_multiple_expanded() {
        let mut toggles = SectionToggles::new();
        toggles.toggle(SectionId::Regulations);
        toggles.toggle(SectionId::Facilities);
        assert!(toggles.is_expanded(SectionId::Regulations));
        assert!(toggles.is_expanded(SectionId::Facilities));
    }
}
