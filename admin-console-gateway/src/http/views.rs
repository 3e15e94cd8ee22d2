//! `/admin/views` endpoints.

use reqwest::Method;

use crate::error::{GatewayError, Result};
use crate::types::{
    ContentIdsBody, ListPage, PaginationRequest, PaginationState, RecordId, ViewForm, ViewRecord,
};

use super::{HttpGateway, with_query};

impl HttpGateway {
    pub(crate) async fn fetch_views(
        &self,
        pagination: &PaginationRequest,
    ) -> Result<ListPage<ViewRecord>> {
        let path = with_query(
            "/admin/views",
            &[
                ("page", pagination.page.to_string()),
                ("itemsPerPage", pagination.items_per_page.to_string()),
            ],
        );
        let page: ListPage<ViewRecord> = self.get_json(&path, "listViews").await?;
        Ok(ListPage::new(
            page.items,
            PaginationState::from_total(*pagination, page.pagination.total),
        ))
    }

    pub(crate) async fn fetch_view(&self, view_id: RecordId) -> Result<ViewRecord> {
        self.get_json(&format!("/admin/views/{view_id}"), "getView")
            .await
    }

    pub(crate) async fn store_view(
        &self,
        view_id: Option<RecordId>,
        form: &ViewForm,
    ) -> Result<RecordId> {
        let (method, path) = match view_id {
            Some(id) => (Method::PUT, format!("/admin/views/{id}")),
            None => (Method::POST, "/admin/views".to_string()),
        };
        let id = self.mutate(method, &path, Some(form), "saveView").await?;
        id.or(view_id).ok_or_else(|| GatewayError::Parse {
            operation: "saveView".to_string(),
            detail: "response carries no id for the created view".to_string(),
        })
    }

    pub(crate) async fn remove_view(&self, view_id: RecordId) -> Result<()> {
        self.mutate::<()>(
            Method::DELETE,
            &format!("/admin/views/{view_id}"),
            None,
            "deleteView",
        )
        .await
        .map(|_| ())
    }

    pub(crate) async fn find_views(&self, term: &str) -> Result<Vec<ViewRecord>> {
        let path = with_query("/admin/views", &[("search", term.to_string())]);
        self.get_json(&path, "searchViews").await
    }

    pub(crate) async fn link_content(
        &self,
        method: Method,
        content_ids: &[RecordId],
        view_id: RecordId,
        operation: &str,
    ) -> Result<()> {
        let body = ContentIdsBody { content_ids };
        self.mutate(
            method,
            &format!("/admin/views/{view_id}/content"),
            Some(&body),
            operation,
        )
        .await
        .map(|_| ())
    }
}
