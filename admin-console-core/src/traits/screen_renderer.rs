//! Renderer contract.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use admin_console_gateway::{
    ContentRecord, ContentRef, HelpText, HelpTopic, PaginationState, RecordId, ViewRecord,
};

use crate::types::{ListKind, Notice, Region, Screen, ScreenLayout, SearchBox, Surface, UiEvent};
use crate::validator::FieldDescriptor;

/// Callback attached to a surface.
pub type Handler = Arc<dyn Fn(&UiEvent) + Send + Sync>;

/// Capability to detach one binding.
///
/// Not `Clone`: the token is consumed by [`ScreenRenderer::unbind`], so a
/// binding is detached at most once.
pub struct BindingToken {
    id: u64,
    region: Region,
    surface: Surface,
}

impl BindingToken {
    pub fn new(id: u64, region: Region, surface: Surface) -> Self {
        Self {
            id,
            region,
            surface,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }
}

impl fmt::Debug for BindingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BindingToken#{}({}@{}:{:?})",
            self.id,
            self.region.slot.name(),
            self.region.generation,
            self.surface
        )
    }
}

/// Document construction for every screen.
///
/// Render operations replace the content of their target region and return
/// the handle of the new rendering. Operations that only touch the inside
/// of a region (errors, extra field, toggles) keep the handle valid.
///
/// The renderer never detaches bindings on its own: the controller unbinds
/// every token of a region before rendering it again.
pub trait ScreenRenderer: Send {
    /// Menu with `active`'s section highlighted.
    fn render_navigation(&mut self, active: Screen) -> Region;

    /// Empty shell of `screen` with the child regions it hosts.
    fn mount_screen(&mut self, screen: Screen) -> ScreenLayout;

    /// "Not implemented yet" body of a section without backing API.
    fn render_placeholder(&mut self, main: Region, screen: Screen) -> Region;

    fn render_help(&mut self, topic: HelpTopic, help: &HelpText) -> Region;

    /// Show or hide the help panel.
    fn toggle_help(&mut self, help: Region);

    /// Expand or collapse one help section.
    fn toggle_help_section(&mut self, help: Region, section: &str);

    /// "New" button and search input above a list.
    fn render_list_toolbar(&mut self, panel: Region, list: ListKind) -> Region;

    fn render_view_list(
        &mut self,
        list: Region,
        views: &[ViewRecord],
        pagination: &PaginationState,
    ) -> Region;

    fn render_content_list(
        &mut self,
        list: Region,
        items: &[ContentRecord],
        pagination: &PaginationState,
    ) -> Region;

    /// View editor; `None` renders an empty form for a new view.
    fn render_view_form(
        &mut self,
        region: Region,
        view: Option<&ViewRecord>,
        fields: &[FieldDescriptor],
    ) -> Region;

    /// Content editor; `None` renders an empty form for a new record.
    fn render_content_form(
        &mut self,
        region: Region,
        content: Option<&ContentRecord>,
        fields: &[FieldDescriptor],
    ) -> Region;

    /// "Create new" / "use existing" choice of the add-content sub-mode.
    fn render_add_content_chooser(&mut self, panel: Region, view_id: RecordId) -> Region;

    /// Search input with an empty suggestion list below it.
    fn render_search_box(&mut self, panel: Region) -> SearchBox;

    fn render_suggestions(&mut self, suggestions: Region, items: &[ContentRef]) -> Region;

    /// Append an input for `field` to the form rendered in `form`.
    fn append_content_field(&mut self, form: Region, field: &FieldDescriptor);

    /// Inline messages next to the fields of the form rendered in `form`.
    fn render_form_errors(&mut self, form: Region, errors: &BTreeMap<String, String>);

    /// Recoverable "not found" state with a back link.
    fn render_not_found(&mut self, region: Region, resource: &str) -> Region;

    fn clear(&mut self, region: Region) -> Region;

    fn show_notice(&mut self, notice: &Notice) -> Region;

    /// Attach `handler` to `surface` inside `region`.
    fn bind(&mut self, region: Region, surface: Surface, handler: Handler) -> BindingToken;

    fn unbind(&mut self, token: BindingToken);
}
