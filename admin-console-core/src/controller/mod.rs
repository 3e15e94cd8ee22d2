//! Screen controller.
//!
//! Single owner of the active screen, the per-list pagination, the live
//! regions and the bindings attached inside them. Handlers and gateway tasks
//! never touch this state directly: they post a [`ControllerEvent`] to the
//! inbox and the controller applies it.
//!
//! ```text
//!  handler ──Intent──┐
//!                    ▼
//!  gateway task ──Completion──▶ inbox ──▶ handle() ──▶ renderer
//!                    ▲                        │
//!  debounce timer ───┘                        └──▶ spawn gateway task
//! ```
//!
//! Every region is repainted in the same order: release the bindings of the
//! region (and of the regions below it), render, then attach the bindings of
//! the new rendering. See [`ScreenController::paint`].

mod bindings;
mod content;
mod debounce;
mod intent;
mod navigation;
mod pending;
mod responses;
mod views;


use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use admin_console_gateway::{GatewayError, PaginationRequest, RecordId};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::ControllerConfig;
use crate::error::{ConsoleError, ConsoleResult};
use crate::traits::{DataGateway, Handler, ScreenRenderer};
use crate::types::{ListKind, Notice, NoticeKind, Region, Screen, Slot, Surface, UiEvent};

pub use bindings::{ActiveRegions, BindingSet};
pub use debounce::{Debouncer, SearchChannel};
pub use intent::{Completion, ControllerEvent, GatewayResult, Intent, Outcome};
pub use pending::{PendingRequests, RequestSlot, RequestTag};

/// Temporary mode of the view editor's side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubMode {
    /// "Create new" / "use existing" choice.
    Choosing { view_id: RecordId },
    /// New content form whose record is attached to the view once saved.
    CreatingContent { view_id: RecordId },
    /// Search box whose suggestions attach existing content.
    PickingContent { view_id: RecordId },
}

impl SubMode {
    fn view_id(self) -> RecordId {
        match self {
            Self::Choosing { view_id }
            | Self::CreatingContent { view_id }
            | Self::PickingContent { view_id } => view_id,
        }
    }
}

pub struct ScreenController {
    gateway: Arc<dyn DataGateway>,
    renderer: Box<dyn ScreenRenderer>,
    config: ControllerConfig,
    screen: Screen,
    /// Incremented on every screen mount.
    visit: u64,
    /// Screen whose record is being fetched before it is mounted.
    transition: Option<Screen>,
    sub_mode: Option<SubMode>,
    regions: ActiveRegions,
    bindings: BindingSet,
    pending: PendingRequests,
    searches: Debouncer,
    pagination: HashMap<ListKind, PaginationRequest>,
    inbox: UnboundedSender<ControllerEvent>,
    events: UnboundedReceiver<ControllerEvent>,
}

impl ScreenController {
    pub fn new(
        gateway: Arc<dyn DataGateway>,
        renderer: Box<dyn ScreenRenderer>,
        config: ControllerConfig,
    ) -> ConsoleResult<Self> {
        config.validate()?;
        let (inbox, events) = mpsc::unbounded_channel();
        Ok(Self {
            gateway,
            renderer,
            searches: Debouncer::new(config.debounce()),
            config,
            screen: Screen::Home,
            visit: 0,
            transition: None,
            sub_mode: None,
            regions: ActiveRegions::default(),
            bindings: BindingSet::default(),
            pending: PendingRequests::default(),
            pagination: HashMap::new(),
            inbox,
            events,
        })
    }

    // ===== Accessors =====

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn visit(&self) -> u64 {
        self.visit
    }

    /// Whether a record fetch for the next screen is outstanding.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Remembered pagination of `list`, or the first page.
    pub fn pagination(&self, list: ListKind) -> PaginationRequest {
        self.pagination
            .get(&list)
            .copied()
            .unwrap_or_else(|| self.config.first_page())
    }

    pub fn live_region(&self, slot: Slot) -> Option<Region> {
        self.regions.get(slot)
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// No request in flight and no search timer running.
    pub fn is_idle(&self) -> bool {
        self.pending.is_idle() && self.searches.is_idle()
    }

    /// Sender for events produced outside of bound handlers.
    pub fn sender(&self) -> UnboundedSender<ControllerEvent> {
        self.inbox.clone()
    }

    // ===== Event loop =====

    /// Show the home screen.
    pub fn start(&mut self) {
        log::info!("Starting admin console on {}", self.gateway.id());
        self.dispatch(Intent::Navigate {
            screen: Screen::Home,
            pagination: None,
        });
    }

    /// Start, then process events forever.
    pub async fn run(&mut self) {
        self.start();
        while let Some(event) = self.events.recv().await {
            self.handle(event);
        }
    }

    /// Process events until nothing is in flight and no search is pending.
    pub async fn settle(&mut self) {
        loop {
            while let Ok(event) = self.events.try_recv() {
                self.handle(event);
            }
            if self.is_idle() {
                break;
            }
            match self.events.recv().await {
                Some(event) => self.handle(event),
                None => break,
            }
        }
    }

    pub fn handle(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::User(intent) => self.dispatch(intent),
            ControllerEvent::Completed(completion) => self.complete(completion),
            ControllerEvent::SearchReady { channel, seq } => self.search_ready(channel, seq),
        }
    }

    pub fn dispatch(&mut self, intent: Intent) {
        log::debug!("[{}] {}", self.screen, intent.name());
        match intent {
            Intent::Navigate { screen, pagination } => self.navigate(screen, pagination),
            Intent::ChangePagination { list, request } => self.change_pagination(list, request),
            Intent::SelectView(view_id) => self.select_view(view_id),
            Intent::NewView => self.new_view(),
            Intent::DeleteView(view_id) => self.delete_view(view_id),
            Intent::SubmitViewForm { view_id, form } => self.submit_view_form(view_id, &form),
            Intent::RemoveContentFromView {
                content_ids,
                view_id,
            } => self.remove_content_from_view(content_ids, view_id),
            Intent::AddContentToView(view_id) => self.add_content_to_view(view_id),
            Intent::CreateContentForView(view_id) => self.create_content_for_view(view_id),
            Intent::UseExistingContent(view_id) => self.use_existing_content(view_id),
            Intent::SearchContent(term) => self.search(SearchChannel::Content, term),
            Intent::SearchViews(term) => self.search(SearchChannel::Views, term),
            Intent::AttachSuggestion {
                content_id,
                view_id,
            } => self.attach_content(self.visit, content_id, view_id),
            Intent::SelectContent(content_id) => self.select_content(content_id),
            Intent::NewContent => self.new_content(),
            Intent::DeleteContent(content_id) => self.delete_content(content_id),
            Intent::SubmitContentForm {
                content_id,
                form,
                attach_to,
            } => self.submit_content_form(content_id, &form, attach_to),
            Intent::AddContentField(name) => self.add_content_field(&name),
            Intent::Cancel => self.cancel(),
            Intent::ToggleHelp => self.toggle_help(),
            Intent::ToggleHelpSection(section) => self.toggle_help_section(&section),
        }
    }

    // ===== Regions and bindings =====

    /// Detach everything bound in `slot` and below, then forget those regions.
    fn release(&mut self, slot: Slot) {
        for token in self.bindings.release(slot) {
            self.renderer.unbind(token);
        }
        self.regions.release(slot);
    }

    /// Repaint `slot`: release, render, adopt the returned region.
    ///
    /// Bindings for the new rendering are attached by the caller afterwards.
    fn paint(
        &mut self,
        slot: Slot,
        render: impl FnOnce(&mut dyn ScreenRenderer) -> Region,
    ) -> Region {
        self.release(slot);
        let region = render(self.renderer.as_mut());
        debug_assert_eq!(region.slot, slot);
        self.regions.set(region);
        region
    }

    /// Attach a handler that turns events of `surface` into an intent.
    fn bind<F>(&mut self, region: Region, surface: Surface, to_intent: F)
    where
        F: Fn(&UiEvent) -> Option<Intent> + Send + Sync + 'static,
    {
        let inbox = self.inbox.clone();
        let handler: Handler = Arc::new(move |event: &UiEvent| {
            let Some(intent) = to_intent(event) else {
                log::debug!("{surface:?} fired without usable data");
                return;
            };
            if inbox.send(ControllerEvent::User(intent)).is_err() {
                log::debug!("Controller gone, dropping {surface:?} event");
            }
        });
        let token = self.renderer.bind(region, surface, handler);
        self.bindings.insert(token);
    }

    // ===== Requests =====

    /// Spawn a gateway call tagged for `slot` and the current visit.
    fn request<F, Fut>(&mut self, slot: RequestSlot, region: Option<Region>, call: F)
    where
        F: FnOnce(Arc<dyn DataGateway>) -> Fut,
        Fut: Future<Output = Outcome> + Send + 'static,
    {
        self.request_for(self.visit, slot, region, call);
    }

    /// Spawn a gateway call on behalf of `visit`, which may already be over.
    fn request_for<F, Fut>(
        &mut self,
        visit: u64,
        slot: RequestSlot,
        region: Option<Region>,
        call: F,
    ) where
        F: FnOnce(Arc<dyn DataGateway>) -> Fut,
        Fut: Future<Output = Outcome> + Send + 'static,
    {
        let tag = self.pending.issue(slot, visit, region);
        let call = call(Arc::clone(&self.gateway));
        let inbox = self.inbox.clone();
        let task = tokio::spawn(async move {
            let outcome = call.await;
            if inbox
                .send(ControllerEvent::Completed(Completion { tag, outcome }))
                .is_err()
            {
                log::debug!("Controller gone, dropping {:?} response", tag.slot);
            }
        });
        self.pending.track(&tag, task.abort_handle());
    }

    // ===== Notices =====

    fn notify(&mut self, notice: &Notice) {
        log::info!("{notice}");
        self.paint(Slot::Notice, |r| r.show_notice(notice));
    }

    /// Log a failed call and surface it as a non-blocking error notice.
    fn report(&mut self, context: &str, error: GatewayError) {
        let error = ConsoleError::from(error);
        error.log(context);
        let kind = match &error {
            ConsoleError::Gateway(GatewayError::Validation { errors, .. }) => NoticeKind::Rejected {
                fields: errors.keys().cloned().collect(),
            },
            other => NoticeKind::Failure {
                detail: other.to_string(),
            },
        };
        self.notify(&Notice::error(kind));
    }

    /// Show server-side field errors in the form, or as a notice once the form is gone.
    fn reject(&mut self, form: Option<Region>, context: &str, error: GatewayError) {
        let live_form = form.filter(|region| self.regions.is_live(*region));
        match (live_form, error.field_errors()) {
            (Some(region), Some(errors)) => {
                log::warn!("{context}: server rejected {} field(s)", errors.len());
                self.renderer.render_form_errors(region, errors);
            }
            _ => self.report(context, error),
        }
    }
}
