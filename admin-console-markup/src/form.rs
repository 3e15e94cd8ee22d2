//! Live state of an editor rendered in the document.
//!
//! A browser keeps input values in the DOM; here the document keeps them in
//! a [`FormState`] so the form can be re-rendered (inline errors, an added
//! field) without losing what was typed, and so a submit can hand the
//! controller a [`FormSnapshot`].

use std::collections::{BTreeMap, BTreeSet};

use admin_console_core::forms::{content_form_values, view_form_values};
use admin_console_core::types::{ContentRecord, ContentRef, ListKind, RecordId, ViewRecord};
use admin_console_core::{FieldDescriptor, FormSnapshot};

/// Name of the free-text input next to the "add field" button.
pub const NEW_FIELD_INPUT: &str = "new_field";

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub kind: ListKind,
    pub snapshot: FormSnapshot,
    /// Content listed by a view form, in display order.
    pub contents: Vec<ContentRef>,
    /// Checked rows of the content list.
    pub checked: BTreeSet<RecordId>,
    pub errors: BTreeMap<String, String>,
    /// Value typed in the "add field" input.
    pub new_field: String,
}

impl FormState {
    pub fn for_view(view: Option<&ViewRecord>, fields: &[FieldDescriptor]) -> Self {
        let mut snapshot = FormSnapshot::new(view.map(|v| v.id), fields.to_vec());
        if let Some(view) = view {
            snapshot.values = view_form_values(view);
            snapshot.content_ids = view.content_ids();
        }
        Self {
            kind: ListKind::Views,
            snapshot,
            contents: view.map(|v| v.contents.clone()).unwrap_or_default(),
            checked: BTreeSet::new(),
            errors: BTreeMap::new(),
            new_field: String::new(),
        }
    }

    pub fn for_content(content: Option<&ContentRecord>, fields: &[FieldDescriptor]) -> Self {
        let mut snapshot = FormSnapshot::new(content.map(|c| c.id), fields.to_vec());
        if let Some(content) = content {
            snapshot.values = content_form_values(content);
        }
        Self {
            kind: ListKind::Content,
            snapshot,
            contents: Vec::new(),
            checked: BTreeSet::new(),
            errors: BTreeMap::new(),
            new_field: String::new(),
        }
    }

    pub fn record_id(&self) -> Option<RecordId> {
        self.snapshot.record_id
    }

    pub fn value(&self, name: &str) -> &str {
        self.snapshot.values.get(name).map_or("", String::as_str)
    }

    /// Type into an input. Unknown names are ignored, like a missing element.
    pub fn fill(&mut self, name: &str, value: &str) -> bool {
        if name == NEW_FIELD_INPUT && self.kind == ListKind::Content {
            self.new_field = value.to_string();
            return true;
        }
        if !self.snapshot.descriptors.iter().any(|d| d.name == name) {
            return false;
        }
        self.snapshot
            .values
            .insert(name.to_string(), value.to_string());
        true
    }

    /// Tick or untick a content row.
    pub fn check(&mut self, content_id: RecordId, checked: bool) -> bool {
        if !self.contents.iter().any(|c| c.content_id == content_id) {
            return false;
        }
        if checked {
            self.checked.insert(content_id);
        } else {
            self.checked.remove(&content_id);
        }
        true
    }

    /// Checked ids in display order.
    pub fn selected(&self) -> Vec<RecordId> {
        self.contents
            .iter()
            .map(|c| c.content_id)
            .filter(|id| self.checked.contains(id))
            .collect()
    }

    pub fn append(&mut self, field: &FieldDescriptor) {
        if self.snapshot.descriptors.iter().any(|d| d.name == field.name) {
            return;
        }
        self.snapshot.descriptors.push(field.clone());
        self.new_field.clear();
    }

    /// What a submit hands to the controller.
    pub fn to_snapshot(&self) -> FormSnapshot {
        self.snapshot.clone()
    }
}

#[cfg(test)]
mod tests {
    use admin_console_core::forms::{
        content_field_descriptor, content_form_fields, view_form_fields,
    };
    use admin_console_core::test_utils::{content_record, view_record};

    use super::*;

    #[test]
    fn view_form_starts_from_the_record() {
        let mut view = view_record(7, "landing");
        view.contents = vec![
            content_record(3, "intro").to_ref(),
            content_record(4, "outro").to_ref(),
        ];
        let form = FormState::for_view(Some(&view), &view_form_fields());
        assert_eq!(form.record_id(), Some(7));
        assert_eq!(form.value("name"), "landing");
        assert_eq!(form.snapshot.content_ids, vec![3, 4]);
    }

    #[test]
    fn only_declared_inputs_accept_values() {
        let mut form = FormState::for_view(None, &view_form_fields());
        assert!(form.fill("title", "Hello"));
        assert!(!form.fill("password", "x"));
        assert!(!form.fill(NEW_FIELD_INPUT, "caption"));
        assert_eq!(form.to_snapshot().value("title"), "Hello");
    }

    #[test]
    fn selection_follows_display_order() {
        let mut view = view_record(7, "landing");
        view.contents = vec![
            content_record(9, "a").to_ref(),
            content_record(2, "b").to_ref(),
        ];
        let mut form = FormState::for_view(Some(&view), &view_form_fields());
        assert!(form.check(2, true));
        assert!(form.check(9, true));
        assert!(!form.check(5, true));
        assert_eq!(form.selected(), vec![9, 2]);
        form.check(9, false);
        assert_eq!(form.selected(), vec![2]);
    }

    #[test]
    fn appended_field_joins_the_snapshot() {
        let mut form = FormState::for_content(None, &content_form_fields(None));
        form.fill(NEW_FIELD_INPUT, "caption");
        let field = content_field_descriptor("caption").unwrap();
        form.append(&field);
        form.append(&field);
        assert!(form.new_field.is_empty());
        assert!(form.fill("content_caption", "A photo"));
        let names: Vec<_> = form.snapshot.descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["name", "type", "content_body", "content_caption"]);
    }
}
