//! Region handles.
//!
//! A region is a container in the rendered document. The renderer hands out
//! a fresh [`Region`] each time it (re)creates a container; the controller
//! keeps the live handle per [`Slot`] and treats any other generation as gone.

use serde::{Deserialize, Serialize};

/// Fixed position of a region in the document tree.
///
/// ```text
/// Navigation   Help   Notice   Main
///                                ├── List
///                                ├── Detail
///                                └── Panel
///                                      └── Suggestions
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    Navigation,
    Help,
    Notice,
    Main,
    List,
    Detail,
    Panel,
    Suggestions,
}

impl Slot {
    pub const ALL: [Slot; 8] = [
        Slot::Navigation,
        Slot::Help,
        Slot::Notice,
        Slot::Main,
        Slot::List,
        Slot::Detail,
        Slot::Panel,
        Slot::Suggestions,
    ];

    pub fn parent(self) -> Option<Slot> {
        match self {
            Self::List | Self::Detail | Self::Panel => Some(Self::Main),
            Self::Suggestions => Some(Self::Panel),
            Self::Navigation | Self::Help | Self::Notice | Self::Main => None,
        }
    }

    /// Whether `self` is `ancestor` or lies below it.
    pub fn is_within(self, ancestor: Slot) -> bool {
        let mut current = Some(self);
        while let Some(slot) = current {
            if slot == ancestor {
                return true;
            }
            current = slot.parent();
        }
        false
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Help => "help",
            Self::Notice => "notice",
            Self::Main => "main",
            Self::List => "list",
            Self::Detail => "detail",
            Self::Panel => "panel",
            Self::Suggestions => "suggestions",
        }
    }
}

/// Handle to one rendering of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub slot: Slot,
    pub generation: u64,
}

impl Region {
    pub fn new(slot: Slot, generation: u64) -> Self {
        Self { slot, generation }
    }
}

/// Containers created when a screen shell is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub main: Region,
    pub list: Option<Region>,
    pub detail: Option<Region>,
    pub panel: Option<Region>,
}

impl ScreenLayout {
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        std::iter::once(self.main).chain(
            [self.list, self.detail, self.panel]
                .into_iter()
                .flatten(),
        )
    }
}

/// Regions produced by rendering a search box into a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBox {
    pub panel: Region,
    pub suggestions: Region,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_sit_under_main() {
        assert!(Slot::Suggestions.is_within(Slot::Panel));
        assert!(Slot::Suggestions.is_within(Slot::Main));
        assert!(!Slot::Suggestions.is_within(Slot::List));
        assert!(!Slot::Help.is_within(Slot::Main));
        assert!(Slot::Main.is_within(Slot::Main));
    }

    #[test]
    fn layout_lists_every_region() {
        let layout = ScreenLayout {
            main: Region::new(Slot::Main, 1),
            list: Some(Region::new(Slot::List, 2)),
            detail: None,
            panel: Some(Region::new(Slot::Panel, 3)),
        };
        let slots: Vec<Slot> = layout.regions().map(|r| r.slot).collect();
        assert_eq!(slots, vec![Slot::Main, Slot::List, Slot::Panel]);
    }
}
