use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    ContentForm, ContentRecord, ContentRef, HelpText, HelpTopic, ListPage, PaginationRequest,
    RecordId, ViewForm, ViewRecord,
};

/// Data gateway trait: one async operation per resource action.
///
/// Implementations own all server communication and never touch the
/// rendered document. Every operation returns a tagged result; nothing is
/// retried automatically.
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Gateway identifier, used in logs.
    fn id(&self) -> &'static str;

    // ============ Views ============

    /// List views (paginated).
    async fn list_views(&self, pagination: &PaginationRequest) -> Result<ListPage<ViewRecord>>;

    /// Fetch one view with its content references.
    async fn get_view(&self, view_id: RecordId) -> Result<ViewRecord>;

    /// Create (`view_id = None`) or update a view. Returns the record id.
    async fn save_view(&self, view_id: Option<RecordId>, form: &ViewForm) -> Result<RecordId>;

    /// Delete a view.
    async fn delete_view(&self, view_id: RecordId) -> Result<()>;

    /// Search views by name or title.
    async fn search_views(&self, term: &str) -> Result<Vec<ViewRecord>>;

    // ============ Content ============

    /// List content records (paginated).
    async fn list_content(&self, pagination: &PaginationRequest)
    -> Result<ListPage<ContentRecord>>;

    /// Fetch one content record.
    async fn get_content(&self, content_id: RecordId) -> Result<ContentRecord>;

    /// Create (`content_id = None`) or update a content record. Returns the record id.
    async fn save_content(
        &self,
        content_id: Option<RecordId>,
        form: &ContentForm,
    ) -> Result<RecordId>;

    /// Delete a content record.
    async fn delete_content(&self, content_id: RecordId) -> Result<()>;

    /// Content suggestions for search-as-you-type.
    async fn search_content(&self, term: &str) -> Result<Vec<ContentRef>>;

    // ============ View ↔ content links ============

    /// Remove content references from a view. The content records survive.
    async fn detach_content(&self, content_ids: &[RecordId], view_id: RecordId) -> Result<()>;

    /// Append existing content records to a view.
    async fn attach_content(&self, content_ids: &[RecordId], view_id: RecordId) -> Result<()>;

    // ============ Help ============

    /// Localized help fragment for a topic.
    async fn get_help(&self, locale: &str, topic: HelpTopic) -> Result<HelpText>;
}
