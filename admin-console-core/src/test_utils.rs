//! Test doubles.
//!
//! [`MockGateway`] is an in-memory resource store that logs every call.
//! [`RecordingRenderer`] records every render and keeps the attached
//! handlers so tests can fire surfaces like a user would.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use admin_console_gateway::{
    ContentForm, ContentRecord, ContentRef, DataGateway, GatewayError, HelpText, HelpTopic,
    ListPage, PaginationRequest, PaginationState, RecordId, Result, ViewForm, ViewRecord,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::traits::{BindingToken, Handler, ScreenRenderer};
use crate::types::{
    ListKind, Notice, Region, Screen, ScreenLayout, SearchBox, Slot, Surface, UiEvent,
};
use crate::validator::FieldDescriptor;

// ===== Fixtures =====

fn fixed_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_556_704_800, 0).unwrap_or_default()
}

pub fn view_record(id: RecordId, name: &str) -> ViewRecord {
    ViewRecord {
        id,
        name: name.to_string(),
        title: format!("Title of {name}"),
        description: String::new(),
        created_at: fixed_time(),
        contents: Vec::new(),
    }
}

pub fn content_record(id: RecordId, name: &str) -> ContentRecord {
    ContentRecord {
        id,
        name: name.to_string(),
        content_type: "paragraph".to_string(),
        created_at: fixed_time(),
        updated_at: None,
        fields: BTreeMap::from([("body".to_string(), format!("Body of {name}"))]),
    }
}

// ===== MockGateway =====

/// One gateway call, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    ListViews(PaginationRequest),
    GetView(RecordId),
    SaveView(Option<RecordId>, ViewForm),
    DeleteView(RecordId),
    SearchViews(String),
    ListContent(PaginationRequest),
    GetContent(RecordId),
    SaveContent(Option<RecordId>, ContentForm),
    DeleteContent(RecordId),
    SearchContent(String),
    DetachContent(Vec<RecordId>, RecordId),
    AttachContent(Vec<RecordId>, RecordId),
    GetHelp(String, HelpTopic),
}

impl GatewayCall {
    pub fn operation(&self) -> &'static str {
        match self {
            Self::ListViews(_) => "listViews",
            Self::GetView(_) => "getView",
            Self::SaveView(..) => "saveView",
            Self::DeleteView(_) => "deleteView",
            Self::SearchViews(_) => "searchViews",
            Self::ListContent(_) => "listContent",
            Self::GetContent(_) => "getContent",
            Self::SaveContent(..) => "saveContent",
            Self::DeleteContent(_) => "deleteContent",
            Self::SearchContent(_) => "searchContent",
            Self::DetachContent(..) => "detachContent",
            Self::AttachContent(..) => "attachContent",
            Self::GetHelp(..) => "getHelp",
        }
    }
}

#[derive(Default)]
pub struct MockGateway {
    views: RwLock<BTreeMap<RecordId, ViewRecord>>,
    content: RwLock<BTreeMap<RecordId, ContentRecord>>,
    calls: RwLock<Vec<GatewayCall>>,
    /// Operation name → error returned instead of the result.
    failures: RwLock<HashMap<&'static str, GatewayError>>,
    /// Operation name → delay before answering.
    delays: RwLock<HashMap<&'static str, Duration>>,
    last_id: RwLock<RecordId>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_view(&self, view: ViewRecord) {
        self.bump_id(view.id).await;
        self.views.write().await.insert(view.id, view);
    }

    pub async fn insert_content(&self, record: ContentRecord) {
        self.bump_id(record.id).await;
        self.content.write().await.insert(record.id, record);
    }

    /// Views `1..=count`, named `view-<id>`.
    pub async fn seed_views(&self, count: RecordId) {
        for id in 1..=count {
            self.insert_view(view_record(id, &format!("view-{id}"))).await;
        }
    }

    /// Link existing content records to a view.
    pub async fn link(&self, view_id: RecordId, content_ids: &[RecordId]) {
        let refs = self.refs(content_ids).await;
        if let Some(view) = self.views.write().await.get_mut(&view_id) {
            view.contents.extend(refs);
        }
    }

    pub async fn fail(&self, operation: &'static str, error: GatewayError) {
        self.failures.write().await.insert(operation, error);
    }

    pub async fn delay(&self, operation: &'static str, delay: Duration) {
        self.delays.write().await.insert(operation, delay);
    }

    pub async fn calls(&self) -> Vec<GatewayCall> {
        self.calls.read().await.clone()
    }

    pub async fn calls_of(&self, operation: &str) -> Vec<GatewayCall> {
        self.calls
            .read()
            .await
            .iter()
            .filter(|call| call.operation() == operation)
            .cloned()
            .collect()
    }

    pub async fn view(&self, view_id: RecordId) -> Option<ViewRecord> {
        self.views.read().await.get(&view_id).cloned()
    }

    /// Log the call, wait for its delay, then return its configured failure.
    async fn enter(&self, call: GatewayCall) -> Result<()> {
        let operation = call.operation();
        self.calls.write().await.push(call);
        let delay = self.delays.read().await.get(operation).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match self.failures.read().await.get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    async fn bump_id(&self, id: RecordId) {
        let mut last = self.last_id.write().await;
        *last = (*last).max(id);
    }

    async fn next_id(&self) -> RecordId {
        let mut last = self.last_id.write().await;
        *last += 1;
        *last
    }

    async fn refs(&self, content_ids: &[RecordId]) -> Vec<ContentRef> {
        let content = self.content.read().await;
        content_ids
            .iter()
            .filter_map(|id| content.get(id).map(ContentRecord::to_ref))
            .collect()
    }
}

fn not_found(operation: &str, resource: String) -> GatewayError {
    GatewayError::NotFound {
        operation: operation.to_string(),
        resource,
    }
}

fn page_of<T: Clone>(items: &BTreeMap<RecordId, T>, request: PaginationRequest) -> ListPage<T> {
    let total = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let state = PaginationState::from_total(request, total);
    let skip = ((state.page - 1) * state.items_per_page) as usize;
    let page = items
        .values()
        .skip(skip)
        .take(state.items_per_page as usize)
        .cloned()
        .collect();
    ListPage::new(page, state)
}

#[async_trait]
impl DataGateway for MockGateway {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_views(&self, pagination: &PaginationRequest) -> Result<ListPage<ViewRecord>> {
        self.enter(GatewayCall::ListViews(*pagination)).await?;
        Ok(page_of(&*self.views.read().await, *pagination))
    }

    async fn get_view(&self, view_id: RecordId) -> Result<ViewRecord> {
        self.enter(GatewayCall::GetView(view_id)).await?;
        self.view(view_id)
            .await
            .ok_or_else(|| not_found("getView", format!("/admin/views/{view_id}")))
    }

    async fn save_view(&self, view_id: Option<RecordId>, form: &ViewForm) -> Result<RecordId> {
        self.enter(GatewayCall::SaveView(view_id, form.clone())).await?;
        let contents = self.refs(&form.contents).await;
        let id = match view_id {
            Some(id) => id,
            None => self.next_id().await,
        };
        let mut views = self.views.write().await;
        let created_at = match (view_id, views.get(&id)) {
            (Some(_), Some(existing)) => existing.created_at,
            (Some(_), None) => return Err(not_found("saveView", format!("/admin/views/{id}"))),
            (None, _) => fixed_time(),
        };
        views.insert(
            id,
            ViewRecord {
                id,
                name: form.name.clone(),
                title: form.title.clone(),
                description: form.description.clone(),
                created_at,
                contents,
            },
        );
        Ok(id)
    }

    async fn delete_view(&self, view_id: RecordId) -> Result<()> {
        self.enter(GatewayCall::DeleteView(view_id)).await?;
        self.views
            .write()
            .await
            .remove(&view_id)
            .map(|_| ())
            .ok_or_else(|| not_found("deleteView", format!("/admin/views/{view_id}")))
    }

    async fn search_views(&self, term: &str) -> Result<Vec<ViewRecord>> {
        self.enter(GatewayCall::SearchViews(term.to_string())).await?;
        Ok(self
            .views
            .read()
            .await
            .values()
            .filter(|v| v.name.contains(term) || v.title.contains(term))
            .cloned()
            .collect())
    }

    async fn list_content(
        &self,
        pagination: &PaginationRequest,
    ) -> Result<ListPage<ContentRecord>> {
        self.enter(GatewayCall::ListContent(*pagination)).await?;
        Ok(page_of(&*self.content.read().await, *pagination))
    }

    async fn get_content(&self, content_id: RecordId) -> Result<ContentRecord> {
        self.enter(GatewayCall::GetContent(content_id)).await?;
        self.content
            .read()
            .await
            .get(&content_id)
            .cloned()
            .ok_or_else(|| not_found("getContent", format!("/admin/content/{content_id}")))
    }

    async fn save_content(
        &self,
        content_id: Option<RecordId>,
        form: &ContentForm,
    ) -> Result<RecordId> {
        self.enter(GatewayCall::SaveContent(content_id, form.clone()))
            .await?;
        let id = match content_id {
            Some(id) => id,
            None => self.next_id().await,
        };
        let mut content = self.content.write().await;
        let created_at = match (content_id, content.get(&id)) {
            (Some(_), Some(existing)) => existing.created_at,
            (Some(_), None) => {
                return Err(not_found("saveContent", format!("/admin/content/{id}")));
            }
            (None, _) => fixed_time(),
        };
        content.insert(
            id,
            ContentRecord {
                id,
                name: form.name.clone(),
                content_type: form.content_type.clone(),
                created_at,
                updated_at: content_id.map(|_| fixed_time()),
                fields: form.fields.clone(),
            },
        );
        Ok(id)
    }

    async fn delete_content(&self, content_id: RecordId) -> Result<()> {
        self.enter(GatewayCall::DeleteContent(content_id)).await?;
        self.content
            .write()
            .await
            .remove(&content_id)
            .map(|_| ())
            .ok_or_else(|| not_found("deleteContent", format!("/admin/content/{content_id}")))
    }

    async fn search_content(&self, term: &str) -> Result<Vec<ContentRef>> {
        self.enter(GatewayCall::SearchContent(term.to_string()))
            .await?;
        Ok(self
            .content
            .read()
            .await
            .values()
            .filter(|c| c.name.contains(term))
            .map(ContentRecord::to_ref)
            .collect())
    }

    async fn detach_content(&self, content_ids: &[RecordId], view_id: RecordId) -> Result<()> {
        self.enter(GatewayCall::DetachContent(content_ids.to_vec(), view_id))
            .await?;
        let mut views = self.views.write().await;
        let view = views
            .get_mut(&view_id)
            .ok_or_else(|| not_found("detachContent", format!("/admin/views/{view_id}")))?;
        view.contents.retain(|c| !content_ids.contains(&c.content_id));
        Ok(())
    }

    async fn attach_content(&self, content_ids: &[RecordId], view_id: RecordId) -> Result<()> {
        self.enter(GatewayCall::AttachContent(content_ids.to_vec(), view_id))
            .await?;
        let refs = self.refs(content_ids).await;
        let mut views = self.views.write().await;
        let view = views
            .get_mut(&view_id)
            .ok_or_else(|| not_found("attachContent", format!("/admin/views/{view_id}")))?;
        view.contents.extend(refs);
        Ok(())
    }

    async fn get_help(&self, locale: &str, topic: HelpTopic) -> Result<HelpText> {
        self.enter(GatewayCall::GetHelp(locale.to_string(), topic))
            .await?;
        Ok(HelpText {
            html: format!("<section data-section=\"intro\"><h3>{}</h3></section>", topic.as_str()),
        })
    }
}

// ===== RecordingRenderer =====

/// One renderer call: operation name and the slot it produced or touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCall {
    pub op: &'static str,
    pub slot: Slot,
}

#[derive(Default)]
struct RendererState {
    generation: u64,
    next_token: u64,
    calls: Vec<RenderCall>,
    handlers: BTreeMap<u64, (Region, Surface, Handler)>,
    attached: BTreeMap<Slot, usize>,
    detached: BTreeMap<Slot, usize>,
    notices: Vec<Notice>,
    form_errors: Vec<BTreeMap<String, String>>,
    view_lists: Vec<(Vec<RecordId>, PaginationState)>,
    content_lists: Vec<(Vec<RecordId>, PaginationState)>,
    suggestions: Vec<Vec<RecordId>>,
    forms: Vec<(ListKind, Option<RecordId>)>,
    not_found: Vec<String>,
    appended_fields: Vec<String>,
    help_toggles: usize,
    section_toggles: Vec<String>,
}

impl RendererState {
    fn fresh(&mut self, op: &'static str, slot: Slot) -> Region {
        self.generation += 1;
        self.calls.push(RenderCall { op, slot });
        Region::new(slot, self.generation)
    }
}

/// Renderer that records instead of drawing. Clones share their state.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    state: Arc<Mutex<RendererState>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, RendererState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fire every attached handler of `surface`. Returns how many ran.
    pub fn fire(&self, surface: Surface, event: &UiEvent) -> usize {
        self.fire_where(|_, s| s == surface, event)
    }

    /// Fire the handlers of `surface` attached inside `slot`.
    pub fn fire_in(&self, slot: Slot, surface: Surface, event: &UiEvent) -> usize {
        self.fire_where(|region, s| region.slot == slot && s == surface, event)
    }

    fn fire_where(&self, matches: impl Fn(Region, Surface) -> bool, event: &UiEvent) -> usize {
        let handlers: Vec<Handler> = self
            .state()
            .handlers
            .values()
            .filter(|(region, surface, _)| matches(*region, *surface))
            .map(|(_, _, handler)| Arc::clone(handler))
            .collect();
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.state().calls.clone()
    }

    /// Number of calls of the renderer operation `op`.
    pub fn count(&self, op: &str) -> usize {
        self.state().calls.iter().filter(|c| c.op == op).count()
    }

    pub fn attached(&self, slot: Slot) -> usize {
        self.state().attached.get(&slot).copied().unwrap_or(0)
    }

    pub fn detached(&self, slot: Slot) -> usize {
        self.state().detached.get(&slot).copied().unwrap_or(0)
    }

    /// Bindings currently attached, all regions together.
    pub fn live_bindings(&self) -> usize {
        self.state().handlers.len()
    }

    /// Surfaces currently attached inside `slot`.
    pub fn surfaces_in(&self, slot: Slot) -> Vec<Surface> {
        self.state()
            .handlers
            .values()
            .filter(|(region, _, _)| region.slot == slot)
            .map(|(_, surface, _)| *surface)
            .collect()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.state().notices.clone()
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.state().notices.last().cloned()
    }

    pub fn form_errors(&self) -> Vec<BTreeMap<String, String>> {
        self.state().form_errors.clone()
    }

    /// Ids and pagination of every rendered view list.
    pub fn view_lists(&self) -> Vec<(Vec<RecordId>, PaginationState)> {
        self.state().view_lists.clone()
    }

    pub fn content_lists(&self) -> Vec<(Vec<RecordId>, PaginationState)> {
        self.state().content_lists.clone()
    }

    pub fn suggestions(&self) -> Vec<Vec<RecordId>> {
        self.state().suggestions.clone()
    }

    /// Rendered editors: which kind, and the record they were filled from.
    pub fn forms(&self) -> Vec<(ListKind, Option<RecordId>)> {
        self.state().forms.clone()
    }

    pub fn not_found(&self) -> Vec<String> {
        self.state().not_found.clone()
    }

    pub fn appended_fields(&self) -> Vec<String> {
        self.state().appended_fields.clone()
    }

    pub fn help_toggles(&self) -> usize {
        self.state().help_toggles
    }

    pub fn section_toggles(&self) -> Vec<String> {
        self.state().section_toggles.clone()
    }
}

impl ScreenRenderer for RecordingRenderer {
    fn render_navigation(&mut self, _active: Screen) -> Region {
        self.state().fresh("render_navigation", Slot::Navigation)
    }

    fn mount_screen(&mut self, screen: Screen) -> ScreenLayout {
        let mut state = self.state();
        let main = state.fresh("mount_screen", Slot::Main);
        let (list, detail, panel) = match screen {
            Screen::ViewsHome | Screen::ContentHome => (true, false, true),
            Screen::ViewDetail => (false, true, true),
            Screen::ContentDetail => (false, true, false),
            Screen::Home | Screen::AssetsHome | Screen::UsersHome | Screen::StatsHome => {
                (false, false, false)
            }
        };
        ScreenLayout {
            main,
            list: list.then(|| state.fresh("mount_screen", Slot::List)),
            detail: detail.then(|| state.fresh("mount_screen", Slot::Detail)),
            panel: panel.then(|| state.fresh("mount_screen", Slot::Panel)),
        }
    }

    fn render_placeholder(&mut self, main: Region, _screen: Screen) -> Region {
        self.state().fresh("render_placeholder", main.slot)
    }

    fn render_help(&mut self, _topic: HelpTopic, _help: &HelpText) -> Region {
        self.state().fresh("render_help", Slot::Help)
    }

    fn toggle_help(&mut self, _help: Region) {
        self.state().help_toggles += 1;
    }

    fn toggle_help_section(&mut self, _help: Region, section: &str) {
        self.state().section_toggles.push(section.to_string());
    }

    fn render_list_toolbar(&mut self, panel: Region, _list: ListKind) -> Region {
        self.state().fresh("render_list_toolbar", panel.slot)
    }

    fn render_view_list(
        &mut self,
        list: Region,
        views: &[ViewRecord],
        pagination: &PaginationState,
    ) -> Region {
        let mut state = self.state();
        state
            .view_lists
            .push((views.iter().map(|v| v.id).collect(), *pagination));
        state.fresh("render_view_list", list.slot)
    }

    fn render_content_list(
        &mut self,
        list: Region,
        items: &[ContentRecord],
        pagination: &PaginationState,
    ) -> Region {
        let mut state = self.state();
        state
            .content_lists
            .push((items.iter().map(|c| c.id).collect(), *pagination));
        state.fresh("render_content_list", list.slot)
    }

    fn render_view_form(
        &mut self,
        region: Region,
        view: Option<&ViewRecord>,
        _fields: &[FieldDescriptor],
    ) -> Region {
        let mut state = self.state();
        state.forms.push((ListKind::Views, view.map(|v| v.id)));
        state.fresh("render_view_form", region.slot)
    }

    fn render_content_form(
        &mut self,
        region: Region,
        content: Option<&ContentRecord>,
        _fields: &[FieldDescriptor],
    ) -> Region {
        let mut state = self.state();
        state.forms.push((ListKind::Content, content.map(|c| c.id)));
        state.fresh("render_content_form", region.slot)
    }

    fn render_add_content_chooser(&mut self, panel: Region, _view_id: RecordId) -> Region {
        self.state().fresh("render_add_content_chooser", panel.slot)
    }

    fn render_search_box(&mut self, panel: Region) -> SearchBox {
        let mut state = self.state();
        SearchBox {
            panel: state.fresh("render_search_box", panel.slot),
            suggestions: state.fresh("render_search_box", Slot::Suggestions),
        }
    }

    fn render_suggestions(&mut self, suggestions: Region, items: &[ContentRef]) -> Region {
        let mut state = self.state();
        state
            .suggestions
            .push(items.iter().map(|c| c.content_id).collect());
        state.fresh("render_suggestions", suggestions.slot)
    }

    fn append_content_field(&mut self, _form: Region, field: &FieldDescriptor) {
        self.state().appended_fields.push(field.name.clone());
    }

    fn render_form_errors(&mut self, form: Region, errors: &BTreeMap<String, String>) {
        let mut state = self.state();
        state.form_errors.push(errors.clone());
        state.calls.push(RenderCall {
            op: "render_form_errors",
            slot: form.slot,
        });
    }

    fn render_not_found(&mut self, region: Region, resource: &str) -> Region {
        let mut state = self.state();
        state.not_found.push(resource.to_string());
        state.fresh("render_not_found", region.slot)
    }

    fn clear(&mut self, region: Region) -> Region {
        self.state().fresh("clear", region.slot)
    }

    fn show_notice(&mut self, notice: &Notice) -> Region {
        let mut state = self.state();
        state.notices.push(notice.clone());
        state.fresh("show_notice", Slot::Notice)
    }

    fn bind(&mut self, region: Region, surface: Surface, handler: Handler) -> BindingToken {
        let mut state = self.state();
        state.next_token += 1;
        let id = state.next_token;
        state.handlers.insert(id, (region, surface, handler));
        *state.attached.entry(region.slot).or_default() += 1;
        BindingToken::new(id, region, surface)
    }

    fn unbind(&mut self, token: BindingToken) {
        let mut state = self.state();
        if state.handlers.remove(&token.id()).is_some() {
            *state.detached.entry(token.region().slot).or_default() += 1;
        }
    }
}
