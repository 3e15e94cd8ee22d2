//! Screens and list kinds.

use std::fmt;
use std::str::FromStr;

use admin_console_gateway::HelpTopic;
use serde::{Deserialize, Serialize};

/// The screen currently displayed. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Home,
    ViewsHome,
    ViewDetail,
    ContentHome,
    ContentDetail,
    AssetsHome,
    UsersHome,
    StatsHome,
}

impl Screen {
    /// Entries of the navigation menu, in display order.
    pub const MENU: [Screen; 6] = [
        Screen::Home,
        Screen::ViewsHome,
        Screen::ContentHome,
        Screen::AssetsHome,
        Screen::UsersHome,
        Screen::StatsHome,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ViewsHome => "views",
            Self::ViewDetail => "view",
            Self::ContentHome => "content",
            Self::ContentDetail => "content-detail",
            Self::AssetsHome => "assets",
            Self::UsersHome => "users",
            Self::StatsHome => "stats",
        }
    }

    /// Screen that `Cancel` returns to.
    pub fn parent(self) -> Screen {
        match self {
            Self::ViewDetail => Self::ViewsHome,
            Self::ContentDetail => Self::ContentHome,
            other => other,
        }
    }

    /// Menu entry highlighted while this screen is shown.
    pub fn section(self) -> Screen {
        self.parent()
    }

    pub fn help_topic(self) -> HelpTopic {
        match self {
            Self::Home => HelpTopic::General,
            Self::ViewsHome | Self::ViewDetail => HelpTopic::View,
            Self::ContentHome | Self::ContentDetail => HelpTopic::Content,
            Self::AssetsHome => HelpTopic::Assets,
            Self::UsersHome => HelpTopic::Users,
            Self::StatsHome => HelpTopic::Stats,
        }
    }

    /// The paginated list shown by this screen, if any.
    pub fn list_kind(self) -> Option<ListKind> {
        match self {
            Self::ViewsHome => Some(ListKind::Views),
            Self::ContentHome => Some(ListKind::Content),
            _ => None,
        }
    }

    /// Sections without a backing API yet.
    pub fn is_placeholder(self) -> bool {
        matches!(self, Self::AssetsHome | Self::UsersHome | Self::StatsHome)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Home,
            Self::ViewsHome,
            Self::ViewDetail,
            Self::ContentHome,
            Self::ContentDetail,
            Self::AssetsHome,
            Self::UsersHome,
            Self::StatsHome,
        ]
        .into_iter()
        .find(|screen| screen.slug() == s)
        .ok_or_else(|| format!("unknown screen '{s}'"))
    }
}

/// The two paginated lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    Views,
    Content,
}

impl ListKind {
    /// Screen hosting the list.
    pub fn screen(self) -> Screen {
        match self {
            Self::Views => Screen::ViewsHome,
            Self::Content => Screen::ContentHome,
        }
    }
}
