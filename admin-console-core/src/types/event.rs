//! Interaction surfaces and the events they emit.

use std::collections::BTreeMap;

use admin_console_gateway::RecordId;
use serde::{Deserialize, Serialize};

use super::Screen;
use crate::forms::FormSnapshot;

/// One interaction target inside a region.
///
/// Row-level surfaces are delegated: a single binding covers every row and
/// the row is identified through the event dataset (`data-id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    MenuEntry(Screen),
    HelpToggle,
    HelpSection,
    NewRecord,
    ListSearch,
    PageLink,
    ItemsPerPage,
    RowSelect,
    RowVisualEdit,
    RowDelete,
    Save,
    Cancel,
    DeleteRecord,
    RemoveContent,
    AddContent,
    ChooseCreate,
    ChooseExisting,
    ContentSearch,
    Suggestion,
    AddField,
    BackLink,
}

impl Surface {
    /// CSS selector of the surface, relative to its region.
    pub fn selector(self) -> String {
        match self {
            Self::MenuEntry(screen) => format!("nav a[data-screen=\"{}\"]", screen.slug()),
            Self::HelpToggle => ".help-toggle".to_string(),
            Self::HelpSection => ".help-section > h3".to_string(),
            Self::NewRecord => "button.new-record".to_string(),
            Self::ListSearch => "input.list-search".to_string(),
            Self::PageLink => ".pagination a[data-page]".to_string(),
            Self::ItemsPerPage => "select.items-per-page".to_string(),
            Self::RowSelect => "tr[data-id] a.edit".to_string(),
            Self::RowVisualEdit => "tr[data-id] a.visual-edit".to_string(),
            Self::RowDelete => "tr[data-id] button.delete".to_string(),
            Self::Save => "form button[type=submit]".to_string(),
            Self::Cancel => "button.cancel".to_string(),
            Self::DeleteRecord => "button.delete-record".to_string(),
            Self::RemoveContent => "button.remove-content".to_string(),
            Self::AddContent => "button.add-content".to_string(),
            Self::ChooseCreate => "button.create-content".to_string(),
            Self::ChooseExisting => "button.use-existing".to_string(),
            Self::ContentSearch => "input.content-search".to_string(),
            Self::Suggestion => ".suggestions li[data-id]".to_string(),
            Self::AddField => "button.add-field".to_string(),
            Self::BackLink => "a.back".to_string(),
        }
    }
}

/// What a handler receives when its surface fires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiEvent {
    /// `data-*` attributes of the element that fired, without the prefix.
    pub dataset: BTreeMap<String, String>,
    /// Current value of an input or select.
    pub value: Option<String>,
    /// Ids of checked rows (content checkboxes of a view form).
    pub selected: Vec<RecordId>,
    /// Snapshot of the enclosing form on submit.
    pub form: Option<FormSnapshot>,
}

impl UiEvent {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_data(mut self, key: &str, value: impl Into<String>) -> Self {
        self.dataset.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_selected(mut self, ids: Vec<RecordId>) -> Self {
        self.selected = ids;
        self
    }

    #[must_use]
    pub fn with_form(mut self, form: FormSnapshot) -> Self {
        self.form = Some(form);
        self
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    /// `data-id` as a record id.
    pub fn record_id(&self) -> Option<RecordId> {
        self.data("id")?.parse().ok()
    }

    /// A dataset entry (or, failing that, the value) parsed as a number.
    pub fn number(&self, key: &str) -> Option<u32> {
        self.data(key)
            .or(self.value.as_deref())?
            .trim()
            .parse()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_comes_from_dataset() {
        let event = UiEvent::new().with_data("id", "42");
        assert_eq!(event.record_id(), Some(42));
        assert_eq!(UiEvent::new().with_data("id", "x").record_id(), None);
    }

    #[test]
    fn number_falls_back_to_value() {
        let event = UiEvent::new().with_value(" 25 ");
        assert_eq!(event.number("page"), Some(25));
        let event = UiEvent::new().with_data("page", "2").with_value("9");
        assert_eq!(event.number("page"), Some(2));
    }

    #[test]
    fn menu_selector_names_the_screen() {
        assert_eq!(
            Surface::MenuEntry(Screen::ViewsHome).selector(),
            "nav a[data-screen=\"views\"]"
        );
    }
}
