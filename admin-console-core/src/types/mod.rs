//! Type definitions module

mod event;
mod notice;
mod region;
mod screen;

pub use event::{Surface, UiEvent};
pub use notice::{Notice, NoticeKind, NoticeLevel};
pub use region::{Region, ScreenLayout, SearchBox, Slot};
pub use screen::{ListKind, Screen};

// Re-export gateway types
pub use admin_console_gateway::{
    ContentForm, ContentRecord, ContentRef, HelpText, HelpTopic, ListPage, PaginationRequest,
    PaginationState, RecordId, ViewForm, ViewRecord,
};
