//! `/admin/content` endpoints.

use reqwest::Method;

use crate::error::{GatewayError, Result};
use crate::types::{
    ContentForm, ContentRecord, ContentRef, ListPage, PaginationRequest, PaginationState, RecordId,
};
use crate::utils::log_sanitizer::field_names;

use super::{HttpGateway, with_query};

impl HttpGateway {
    pub(crate) async fn fetch_content_page(
        &self,
        pagination: &PaginationRequest,
    ) -> Result<ListPage<ContentRecord>> {
        let path = with_query(
            "/admin/content",
            &[
                ("page", pagination.page.to_string()),
                ("itemsPerPage", pagination.items_per_page.to_string()),
            ],
        );
        let page: ListPage<ContentRecord> = self.get_json(&path, "listContent").await?;
        Ok(ListPage::new(
            page.items,
            PaginationState::from_total(*pagination, page.pagination.total),
        ))
    }

    pub(crate) async fn fetch_content(&self, content_id: RecordId) -> Result<ContentRecord> {
        self.get_json(&format!("/admin/content/{content_id}"), "getContent")
            .await
    }

    pub(crate) async fn store_content(
        &self,
        content_id: Option<RecordId>,
        form: &ContentForm,
    ) -> Result<RecordId> {
        let (method, path) = match content_id {
            Some(id) => (Method::PUT, format!("/admin/content/{id}")),
            None => (Method::POST, "/admin/content".to_string()),
        };
        log::debug!(
            "[saveContent] {} field(s): {}",
            form.fields.len(),
            field_names(form.fields.keys())
        );
        let id = self.mutate(method, &path, Some(form), "saveContent").await?;
        id.or(content_id).ok_or_else(|| GatewayError::Parse {
            operation: "saveContent".to_string(),
            detail: "response carries no id for the created content".to_string(),
        })
    }

    pub(crate) async fn remove_content(&self, content_id: RecordId) -> Result<()> {
        self.mutate::<()>(
            Method::DELETE,
            &format!("/admin/content/{content_id}"),
            None,
            "deleteContent",
        )
        .await
        .map(|_| ())
    }

    pub(crate) async fn find_content(&self, term: &str) -> Result<Vec<ContentRef>> {
        let path = with_query("/admin/content", &[("search", term.to_string())]);
        self.get_json(&path, "searchContent").await
    }
}
