//! Flash notices shown after mutations and failures.

use std::fmt;

use admin_console_gateway::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// What happened. Renderers localize from this, `Display` gives English text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    ViewSaved { view_id: RecordId },
    ViewDeleted { view_id: RecordId },
    ContentSaved { content_id: RecordId },
    ContentDeleted { content_id: RecordId },
    ContentDetached { count: usize },
    ContentAttached { view_id: RecordId },
    /// Server-side validation failed after the form was closed.
    Rejected { fields: Vec<String> },
    /// Transport failure; the message comes from the gateway error.
    Failure { detail: String },
    InvalidField { detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(kind: NoticeKind) -> Self {
        Self {
            level: NoticeLevel::Success,
            kind,
        }
    }

    pub fn info(kind: NoticeKind) -> Self {
        Self {
            level: NoticeLevel::Info,
            kind,
        }
    }

    pub fn error(kind: NoticeKind) -> Self {
        Self {
            level: NoticeLevel::Error,
            kind,
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewSaved { view_id } => write!(f, "View #{view_id} saved"),
            Self::ViewDeleted { view_id } => write!(f, "View #{view_id} deleted"),
            Self::ContentSaved { content_id } => write!(f, "Content #{content_id} saved"),
            Self::ContentDeleted { content_id } => write!(f, "Content #{content_id} deleted"),
            Self::ContentDetached { count } => {
                write!(f, "{count} content item(s) removed from the view")
            }
            Self::ContentAttached { view_id } => write!(f, "Content added to view #{view_id}"),
            Self::Rejected { fields } => write!(f, "Rejected fields: {}", fields.join(", ")),
            Self::Failure { detail } | Self::InvalidField { detail } => f.write_str(detail),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
