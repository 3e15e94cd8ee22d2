use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side identifier of a view or content record.
pub type RecordId = u64;

// ============ Pagination ============

/// Pagination request sent with every list operation.
///
/// Pages are 1-indexed.
///
/// # Default
///
/// The default is `page = 1, items_per_page = 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub items_per_page: u32,
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            page: 1,
            items_per_page: 10,
        }
    }
}

impl PaginationRequest {
    #[must_use]
    pub fn new(page: u32, items_per_page: u32) -> Self {
        Self {
            page,
            items_per_page,
        }
    }

    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `items_per_page` is clamped to `1..=max_items_per_page`
    #[must_use]
    pub fn validated(&self, max_items_per_page: u32) -> Self {
        Self {
            page: self.page.max(1),
            items_per_page: self.items_per_page.clamp(1, max_items_per_page.max(1)),
        }
    }
}

/// Page bookkeeping for a list screen.
///
/// Always satisfies `1 <= page <= max(number_of_pages, 1)` and
/// `items_per_page >= 1` when built through [`PaginationState::from_total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub items_per_page: u32,
    pub page: u32,
    pub number_of_pages: u32,
    pub total: u32,
}

impl PaginationState {
    /// Compute the state for `total` items, clamping the requested page.
    #[must_use]
    pub fn from_total(request: PaginationRequest, total: u32) -> Self {
        let items_per_page = request.items_per_page.max(1);
        let number_of_pages = total.div_ceil(items_per_page);
        Self {
            items_per_page,
            page: request.page.clamp(1, number_of_pages.max(1)),
            number_of_pages,
            total,
        }
    }

    /// A single page holding every item, used for search results.
    #[must_use]
    pub fn single_page(total: u32) -> Self {
        Self::from_total(PaginationRequest::new(1, total.max(1)), total)
    }

    /// The request that reproduces this state.
    #[must_use]
    pub fn request(&self) -> PaginationRequest {
        PaginationRequest::new(self.page, self.items_per_page)
    }

    /// Request for another page of the same list.
    #[must_use]
    pub fn goto(&self, page: u32) -> PaginationRequest {
        PaginationRequest::new(page.clamp(1, self.number_of_pages.max(1)), self.items_per_page)
    }

    /// Request for a new page size. Starts over at the first page.
    #[must_use]
    pub fn with_items_per_page(&self, items_per_page: u32) -> PaginationRequest {
        PaginationRequest::new(1, items_per_page.max(1))
    }

    /// Re-derive the state after the server reported its own numbers.
    ///
    /// Servers are not trusted to keep `page` in range.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::from_total(self.request(), self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.number_of_pages
    }
}

/// One page of a list operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub pagination: PaginationState,
}

impl<T> ListPage<T> {
    #[must_use]
    pub fn new(items: Vec<T>, pagination: PaginationState) -> Self {
        Self { items, pagination }
    }
}

// ============ Records ============

/// Weak reference from a view to a content record (lookup only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRef {
    #[serde(alias = "id")]
    pub content_id: RecordId,
    #[serde(alias = "name")]
    pub display_name: String,
}

/// A view: a named template aggregating content records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRecord {
    pub id: RecordId,
    /// Unique, slug-like name.
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub contents: Vec<ContentRef>,
}

impl ViewRecord {
    pub fn content_ids(&self) -> Vec<RecordId> {
        self.contents.iter().map(|c| c.content_id).collect()
    }
}

/// A content record. The key set of `fields` depends on `content_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: RecordId,
    pub name: String,
    /// Free-form type tag.
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default, alias = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "content")]
    pub fields: BTreeMap<String, String>,
}

impl ContentRecord {
    pub fn to_ref(&self) -> ContentRef {
        ContentRef {
            content_id: self.id,
            display_name: self.name.clone(),
        }
    }
}

// ============ Forms ============

/// Payload of `saveView`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewForm {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Ordered content ids currently listed in the form.
    #[serde(default, rename = "content")]
    pub contents: Vec<RecordId>,
}

/// Payload of `saveContent`: `{ name, type, content: {field: value} }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentForm {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(rename = "content")]
    pub fields: BTreeMap<String, String>,
}

// ============ Help ============

/// Help topics served by `/admin/help/{locale}/{topic}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpTopic {
    General,
    View,
    Content,
    Assets,
    Users,
    Stats,
}

impl HelpTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::View => "view",
            Self::Content => "content",
            Self::Assets => "assets",
            Self::Users => "users",
            Self::Stats => "stats",
        }
    }
}

/// Server-rendered help fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpText {
    pub html: String,
}

// ============ Wire envelopes ============

/// `{ ok, id?, errors? }` returned by mutating endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct MutationResponse {
    #[serde(default = "default_ok")]
    pub ok: bool,
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, String>>,
}

fn default_ok() -> bool {
    true
}

/// `{ contentIds }` body of attach/detach.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContentIdsBody<'a> {
    pub content_ids: &'a [RecordId],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_items_by_ten_is_three_pages() {
        let state = PaginationState::from_total(PaginationRequest::new(1, 10), 25);
        assert_eq!(state.number_of_pages, 3);
        assert_eq!(state.page, 1);
        assert!(state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn page_is_clamped_to_last_page() {
        let state = PaginationState::from_total(PaginationRequest::new(9, 10), 25);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn empty_list_stays_on_page_one() {
        let state = PaginationState::from_total(PaginationRequest::new(4, 10), 0);
        assert_eq!(state.number_of_pages, 0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn page_bounds_hold_for_every_transition() {
        for total in [0_u32, 1, 9, 10, 11, 25, 100] {
            for items_per_page in [0_u32, 1, 3, 10, 50] {
                for page in [0_u32, 1, 2, 5, 200] {
                    let state = PaginationState::from_total(
                        PaginationRequest::new(page, items_per_page),
                        total,
                    );
                    assert!(state.page >= 1);
                    assert!(state.page <= state.number_of_pages.max(1));

                    let next = PaginationState::from_total(state.goto(page + 1), total);
                    assert!(next.page >= 1 && next.page <= next.number_of_pages.max(1));

                    let resized =
                        PaginationState::from_total(state.with_items_per_page(items_per_page), total);
                    assert_eq!(resized.page, 1);
                }
            }
        }
    }

    #[test]
    fn validated_request_is_in_range() {
        let req = PaginationRequest::new(0, 500).validated(100);
        assert_eq!(req, PaginationRequest::new(1, 100));
    }

    #[test]
    fn normalized_repairs_server_page() {
        let state = PaginationState {
            items_per_page: 10,
            page: 7,
            number_of_pages: 7,
            total: 25,
        };
        let fixed = state.normalized();
        assert_eq!(fixed.number_of_pages, 3);
        assert_eq!(fixed.page, 3);
    }

    #[test]
    fn content_record_accepts_legacy_keys() {
        let json = r#"{
            "id": 3,
            "name": "intro",
            "type": "paragraph",
            "created_at": "2019-05-01T10:00:00Z",
            "content": {"body": "hello"}
        }"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.content_type, "paragraph");
        assert_eq!(record.fields.get("body").map(String::as_str), Some("hello"));
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn content_form_wire_shape() {
        let mut fields = BTreeMap::new();
        fields.insert("body".to_string(), "hi".to_string());
        let form = ContentForm {
            name: "intro".to_string(),
            content_type: "paragraph".to_string(),
            fields,
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["type"], "paragraph");
        assert_eq!(value["content"]["body"], "hi");
    }

    #[test]
    fn mutation_response_defaults_to_ok() {
        let resp: MutationResponse = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert!(resp.ok);
        assert_eq!(resp.id, Some(7));
        assert!(resp.errors.is_none());
    }
}
