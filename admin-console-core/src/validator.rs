//! Declarative form validation.
//!
//! A form carries a list of [`FieldDescriptor`]s; [`FormValidator::validate`]
//! checks submitted values against them before any mutating call is made.
//! A form that fails here never reaches the gateway.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

static SLUG_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:[-_][a-z0-9]+)*$").ok());

/// Primitive type a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Integer,
    Email,
    Url,
    /// `YYYY-MM-DD`
    Date,
    /// Lowercase letters and digits, `-`/`_` separated.
    Slug,
}

impl FieldKind {
    /// Name used in "must be a valid ..." messages.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Email => "email",
            Self::Url => "url",
            Self::Date => "date",
            Self::Slug => "slug",
        }
    }

    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Text => true,
            Self::Number => value.parse::<f64>().is_ok_and(f64::is_finite),
            Self::Integer => value.parse::<i64>().is_ok(),
            Self::Email => EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value)),
            Self::Url => url::Url::parse(value).is_ok_and(|u| u.has_host()),
            Self::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
            Self::Slug => SLUG_RE.as_ref().is_some_and(|re| re.is_match(value)),
        }
    }
}

/// One declared field of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Key in the submitted value map.
    pub name: String,
    /// Display name used in messages.
    pub label: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            kind,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Message for `value`, or `None` when it passes.
    pub fn check(&self, value: Option<&str>) -> Option<String> {
        let value = value.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return self
                .required
                .then(|| format!("{} is required", self.label));
        }
        if self.kind.accepts(value) {
            None
        } else {
            Some(format!(
                "{} must be a valid {}",
                self.label,
                self.kind.type_name()
            ))
        }
    }
}

/// Result of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Field name → message. Empty when the form is valid.
    pub errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Stateless validator over a descriptor list.
pub struct FormValidator;

impl FormValidator {
    pub fn validate(
        descriptors: &[FieldDescriptor],
        values: &BTreeMap<String, String>,
    ) -> ValidationReport {
        let errors = descriptors
            .iter()
            .filter_map(|field| {
                field
                    .check(values.get(&field.name).map(String::as_str))
                    .map(|message| (field.name.clone(), message))
            })
            .collect();
        ValidationReport { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_required_field_is_reported_alone() {
        let fields = [
            FieldDescriptor::new("name", "Name", FieldKind::Text).required(),
            FieldDescriptor::new("type", "Type", FieldKind::Text).required(),
        ];
        let report = FormValidator::validate(&fields, &values(&[("name", ""), ("type", "x")]));
        assert!(!report.is_valid());
        assert_eq!(
            report.errors.get("name").map(String::as_str),
            Some("Name is required")
        );
        assert!(!report.errors.contains_key("type"));
    }

    #[test]
    fn filled_required_fields_are_valid() {
        let fields = [
            FieldDescriptor::new("name", "Name", FieldKind::Text).required(),
            FieldDescriptor::new("type", "Type", FieldKind::Text).required(),
        ];
        let report = FormValidator::validate(&fields, &values(&[("name", "ok"), ("type", "ok")]));
        assert!(report.is_valid());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn missing_key_counts_as_empty() {
        let fields = [FieldDescriptor::new("title", "Title", FieldKind::Text).required()];
        let report = FormValidator::validate(&fields, &BTreeMap::new());
        assert_eq!(
            report.errors.get("title").map(String::as_str),
            Some("Title is required")
        );
    }

    #[test]
    fn whitespace_only_is_empty() {
        let field = FieldDescriptor::new("name", "Name", FieldKind::Slug).required();
        assert_eq!(field.check(Some("   ")), Some("Name is required".to_string()));
    }

    #[test]
    fn empty_optional_field_skips_type_check() {
        let field = FieldDescriptor::new("site", "Website", FieldKind::Url);
        assert_eq!(field.check(Some("")), None);
        assert_eq!(field.check(None), None);
    }

    #[test]
    fn type_predicates() {
        let cases = [
            (FieldKind::Number, "3.5", true),
            (FieldKind::Number, "abc", false),
            (FieldKind::Integer, "-12", true),
            (FieldKind::Integer, "1.5", false),
            (FieldKind::Email, "ada@example.org", true),
            (FieldKind::Email, "ada@", false),
            (FieldKind::Url, "https://example.org/a", true),
            (FieldKind::Url, "example.org", false),
            (FieldKind::Date, "2019-02-28", true),
            (FieldKind::Date, "2019-02-30", false),
            (FieldKind::Slug, "home-page_2", true),
            (FieldKind::Slug, "Home Page", false),
        ];
        for (kind, value, ok) in cases {
            let field = FieldDescriptor::new("f", "Field", kind);
            assert_eq!(field.check(Some(value)).is_none(), ok, "{kind:?} {value:?}");
        }
    }

    #[test]
    fn type_failure_message_names_the_type() {
        let field = FieldDescriptor::new("email", "Email", FieldKind::Email).required();
        assert_eq!(
            field.check(Some("nope")),
            Some("Email must be a valid email".to_string())
        );
    }
}
