//! Form snapshots and the descriptor lists of the view/content editors.
//!
//! Content records have a dynamic field set. Each field is rendered as a
//! `content_<field>` input and declared by its own descriptor, so the
//! descriptor list travels with every submitted form.

use std::collections::BTreeMap;

use admin_console_gateway::{ContentForm, ContentRecord, RecordId, ViewForm, ViewRecord};
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};
use crate::validator::{FieldDescriptor, FieldKind, FormValidator, ValidationReport};

/// Input-name prefix of dynamic content fields.
pub const CONTENT_FIELD_PREFIX: &str = "content_";

/// Field shown on an empty content form.
const DEFAULT_CONTENT_FIELD: &str = "body";

/// Values of a form at submit time, with the descriptors that govern them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// Record being edited, `None` for a new one.
    pub record_id: Option<RecordId>,
    pub descriptors: Vec<FieldDescriptor>,
    pub values: BTreeMap<String, String>,
    /// Ordered content ids listed in a view form.
    #[serde(default)]
    pub content_ids: Vec<RecordId>,
}

impl FormSnapshot {
    pub fn new(record_id: Option<RecordId>, descriptors: Vec<FieldDescriptor>) -> Self {
        Self {
            record_id,
            descriptors,
            values: BTreeMap::new(),
            content_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", |v| v.trim())
    }

    pub fn validate(&self) -> ValidationReport {
        FormValidator::validate(&self.descriptors, &self.values)
    }

    pub fn to_view_form(&self) -> ViewForm {
        ViewForm {
            name: self.value("name").to_string(),
            title: self.value("title").to_string(),
            description: self.value("description").to_string(),
            contents: self.content_ids.clone(),
        }
    }

    /// `content_<field>` inputs become the record's field map.
    pub fn to_content_form(&self) -> ContentForm {
        let fields = self
            .values
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(CONTENT_FIELD_PREFIX)
                    .filter(|field| !field.is_empty())
                    .map(|field| (field.to_string(), value.clone()))
            })
            .collect();
        ContentForm {
            name: self.value("name").to_string(),
            content_type: self.value("type").to_string(),
            fields,
        }
    }
}

/// Descriptors of the view editor.
pub fn view_form_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("name", "Name", FieldKind::Slug).required(),
        FieldDescriptor::new("title", "Title", FieldKind::Text).required(),
        FieldDescriptor::new("description", "Description", FieldKind::Text),
    ]
}

/// Descriptors of the content editor: fixed fields plus one per record field.
pub fn content_form_fields(record: Option<&ContentRecord>) -> Vec<FieldDescriptor> {
    let mut fields = vec![
        FieldDescriptor::new("name", "Name", FieldKind::Text).required(),
        FieldDescriptor::new("type", "Type", FieldKind::Text).required(),
    ];
    match record {
        Some(record) => fields.extend(record.fields.keys().map(|key| content_field(key))),
        None => fields.push(content_field(DEFAULT_CONTENT_FIELD)),
    }
    fields
}

/// Descriptor for a field added with "add field".
///
/// The name must be a slug so the `content_<name>` input stays addressable.
pub fn content_field_descriptor(name: &str) -> ConsoleResult<FieldDescriptor> {
    let name = name.trim();
    let slug = FieldDescriptor::new("field", "Field name", FieldKind::Slug).required();
    if let Some(message) = slug.check(Some(name)) {
        return Err(ConsoleError::InvalidForm(message));
    }
    Ok(content_field(name))
}

fn content_field(name: &str) -> FieldDescriptor {
    FieldDescriptor::new(format!("{CONTENT_FIELD_PREFIX}{name}"), name, FieldKind::Text)
}

/// Initial values of the view editor.
pub fn view_form_values(view: &ViewRecord) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("name".to_string(), view.name.clone()),
        ("title".to_string(), view.title.clone()),
        ("description".to_string(), view.description.clone()),
    ])
}

/// Initial values of the content editor.
pub fn content_form_values(record: &ContentRecord) -> BTreeMap<String, String> {
    let mut values = BTreeMap::from([
        ("name".to_string(), record.name.clone()),
        ("type".to_string(), record.content_type.clone()),
    ]);
    values.extend(
        record
            .fields
            .iter()
            .map(|(k, v)| (format!("{CONTENT_FIELD_PREFIX}{k}"), v.clone())),
    );
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_inputs_map_to_fields() {
        let snapshot = FormSnapshot::new(Some(3), content_form_fields(None))
            .with_value("name", " intro ")
            .with_value("type", "paragraph")
            .with_value("content_body", "hello")
            .with_value("content_", "ignored");
        let form = snapshot.to_content_form();
        assert_eq!(form.name, "intro");
        assert_eq!(form.content_type, "paragraph");
        assert_eq!(form.fields.len(), 1);
        assert_eq!(form.fields.get("body").map(String::as_str), Some("hello"));
    }

    #[test]
    fn view_form_keeps_content_order() {
        let mut snapshot = FormSnapshot::new(Some(7), view_form_fields())
            .with_value("name", "cv")
            .with_value("title", "X");
        snapshot.content_ids = vec![4, 2, 9];
        let form = snapshot.to_view_form();
        assert_eq!(form.contents, vec![4, 2, 9]);
        assert!(snapshot.validate().is_valid());
    }

    #[test]
    fn view_name_must_be_a_slug() {
        let snapshot = FormSnapshot::new(None, view_form_fields())
            .with_value("name", "My View")
            .with_value("title", "X");
        let report = snapshot.validate();
        assert_eq!(
            report.errors.get("name").map(String::as_str),
            Some("Name must be a valid slug")
        );
    }

    #[test]
    fn added_field_names_are_checked() {
        let field = content_field_descriptor(" caption ").unwrap();
        assert_eq!(field.name, "content_caption");
        assert!(!field.required);
        assert!(matches!(
            content_field_descriptor("two words"),
            Err(ConsoleError::InvalidForm(_))
        ));
        assert!(content_field_descriptor("").is_err());
    }
}
