//! `DataGateway` implementation for `HttpGateway`.

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;
use crate::traits::DataGateway;
use crate::types::{
    ContentForm, ContentRecord, ContentRef, HelpText, HelpTopic, ListPage, PaginationRequest,
    RecordId, ViewForm, ViewRecord,
};

use super::HttpGateway;

#[async_trait]
impl DataGateway for HttpGateway {
    fn id(&self) -> &'static str {
        "http"
    }

    async fn list_views(&self, pagination: &PaginationRequest) -> Result<ListPage<ViewRecord>> {
        self.fetch_views(pagination).await
    }

    async fn get_view(&self, view_id: RecordId) -> Result<ViewRecord> {
        self.fetch_view(view_id).await
    }

    async fn save_view(&self, view_id: Option<RecordId>, form: &ViewForm) -> Result<RecordId> {
        self.store_view(view_id, form).await
    }

    async fn delete_view(&self, view_id: RecordId) -> Result<()> {
        self.remove_view(view_id).await
    }

    async fn search_views(&self, term: &str) -> Result<Vec<ViewRecord>> {
        self.find_views(term).await
    }

    async fn list_content(
        &self,
        pagination: &PaginationRequest,
    ) -> Result<ListPage<ContentRecord>> {
        self.fetch_content_page(pagination).await
    }

    async fn get_content(&self, content_id: RecordId) -> Result<ContentRecord> {
        self.fetch_content(content_id).await
    }

    async fn save_content(
        &self,
        content_id: Option<RecordId>,
        form: &ContentForm,
    ) -> Result<RecordId> {
        self.store_content(content_id, form).await
    }

    async fn delete_content(&self, content_id: RecordId) -> Result<()> {
        self.remove_content(content_id).await
    }

    async fn search_content(&self, term: &str) -> Result<Vec<ContentRef>> {
        self.find_content(term).await
    }

    async fn detach_content(&self, content_ids: &[RecordId], view_id: RecordId) -> Result<()> {
        self.link_content(Method::DELETE, content_ids, view_id, "detachContent")
            .await
    }

    async fn attach_content(&self, content_ids: &[RecordId], view_id: RecordId) -> Result<()> {
        self.link_content(Method::POST, content_ids, view_id, "attachContent")
            .await
    }

    async fn get_help(&self, locale: &str, topic: HelpTopic) -> Result<HelpText> {
        self.fetch_help(locale, topic).await
    }
}
