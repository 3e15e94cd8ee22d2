//! Messages flowing into the controller inbox.

use admin_console_gateway::{
    ContentRecord, ContentRef, GatewayError, HelpText, HelpTopic, ListPage, PaginationRequest,
    RecordId, ViewRecord,
};

use super::debounce::SearchChannel;
use super::pending::RequestTag;
use crate::forms::FormSnapshot;
use crate::types::{ListKind, Screen};

/// A user action, produced by a bound handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Navigate {
        screen: Screen,
        pagination: Option<PaginationRequest>,
    },
    /// Page link click and items-per-page change alike.
    ChangePagination {
        list: ListKind,
        request: PaginationRequest,
    },
    SelectView(RecordId),
    NewView,
    DeleteView(RecordId),
    SubmitViewForm {
        view_id: Option<RecordId>,
        form: FormSnapshot,
    },
    RemoveContentFromView {
        content_ids: Vec<RecordId>,
        view_id: RecordId,
    },
    AddContentToView(RecordId),
    CreateContentForView(RecordId),
    UseExistingContent(RecordId),
    SearchContent(String),
    SearchViews(String),
    AttachSuggestion {
        content_id: RecordId,
        view_id: RecordId,
    },
    SelectContent(RecordId),
    NewContent,
    DeleteContent(RecordId),
    SubmitContentForm {
        content_id: Option<RecordId>,
        form: FormSnapshot,
        /// View the new record is attached to once saved.
        attach_to: Option<RecordId>,
    },
    /// Field name typed next to the "add field" button.
    AddContentField(String),
    Cancel,
    ToggleHelp,
    ToggleHelpSection(String),
}

impl Intent {
    /// Name for logs. Payloads may hold user input and are not logged.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigate { .. } => "navigate",
            Self::ChangePagination { .. } => "changePagination",
            Self::SelectView(_) => "selectView",
            Self::NewView => "newView",
            Self::DeleteView(_) => "deleteView",
            Self::SubmitViewForm { .. } => "submitViewForm",
            Self::RemoveContentFromView { .. } => "removeContentFromView",
            Self::AddContentToView(_) => "addContentToView",
            Self::CreateContentForView(_) => "createContentForView",
            Self::UseExistingContent(_) => "useExistingContent",
            Self::SearchContent(_) => "searchContent",
            Self::SearchViews(_) => "searchViews",
            Self::AttachSuggestion { .. } => "attachSuggestion",
            Self::SelectContent(_) => "selectContent",
            Self::NewContent => "newContent",
            Self::DeleteContent(_) => "deleteContent",
            Self::SubmitContentForm { .. } => "submitContentForm",
            Self::AddContentField(_) => "addContentField",
            Self::Cancel => "cancel",
            Self::ToggleHelp => "toggleHelp",
            Self::ToggleHelpSection(_) => "toggleHelpSection",
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Result of one gateway call, with the context needed to apply it.
#[derive(Debug)]
pub enum Outcome {
    Help {
        topic: HelpTopic,
        result: GatewayResult<HelpText>,
    },
    ViewList(GatewayResult<ListPage<ViewRecord>>),
    ViewSearch(GatewayResult<Vec<ViewRecord>>),
    ContentList(GatewayResult<ListPage<ContentRecord>>),
    View {
        view_id: RecordId,
        result: GatewayResult<ViewRecord>,
    },
    Content {
        content_id: RecordId,
        result: GatewayResult<ContentRecord>,
    },
    Suggestions(GatewayResult<Vec<ContentRef>>),
    ViewSaved {
        result: GatewayResult<RecordId>,
    },
    ViewDeleted {
        view_id: RecordId,
        result: GatewayResult<()>,
    },
    ContentSaved {
        attach_to: Option<RecordId>,
        result: GatewayResult<RecordId>,
    },
    ContentDeleted {
        content_id: RecordId,
        result: GatewayResult<()>,
    },
    ContentDetached {
        view_id: RecordId,
        count: usize,
        result: GatewayResult<()>,
    },
    ContentAttached {
        view_id: RecordId,
        result: GatewayResult<()>,
    },
}

/// A finished request and the tag it was issued with.
#[derive(Debug)]
pub struct Completion {
    pub tag: RequestTag,
    pub outcome: Outcome,
}

/// Everything the controller reacts to.
#[derive(Debug)]
pub enum ControllerEvent {
    User(Intent),
    Completed(Completion),
    /// Debounce window of a search elapsed.
    SearchReady { channel: SearchChannel, seq: u64 },
}
