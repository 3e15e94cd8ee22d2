//! View editor flows.

use admin_console_gateway::{RecordId, ViewRecord};

use super::{Intent, Outcome, RequestSlot, ScreenController, SearchChannel, SubMode};
use crate::forms::{self, FormSnapshot};
use crate::types::{Region, Screen, ScreenLayout, Slot, Surface};

impl ScreenController {
    /// Fetch the view; the editor is mounted once it arrives.
    pub(super) fn select_view(&mut self, view_id: RecordId) {
        self.transition = Some(Screen::ViewDetail);
        self.request(RequestSlot::Detail, None, move |gateway| async move {
            Outcome::View {
                view_id,
                result: gateway.get_view(view_id).await,
            }
        });
    }

    pub(super) fn new_view(&mut self) {
        let layout = self.mount(Screen::ViewDetail);
        self.show_view_form(layout, None);
        self.fetch_help(Screen::ViewDetail);
    }

    pub(super) fn show_view_form(&mut self, layout: ScreenLayout, view: Option<&ViewRecord>) {
        let Some(detail) = layout.detail else {
            log::error!("{} shell has no detail region", self.screen);
            return;
        };
        let fields = forms::view_form_fields();
        let form = self.paint(Slot::Detail, |r| r.render_view_form(detail, view, &fields));
        self.bind_view_form(form, view.map(|v| v.id));
    }

    fn bind_view_form(&mut self, form: Region, view_id: Option<RecordId>) {
        self.bind(form, Surface::Save, move |event| {
            Some(Intent::SubmitViewForm {
                view_id,
                form: event.form.clone()?,
            })
        });
        self.bind(form, Surface::Cancel, |_| Some(Intent::Cancel));

        let Some(view_id) = view_id else {
            return;
        };
        self.bind(form, Surface::RemoveContent, move |event| {
            Some(Intent::RemoveContentFromView {
                content_ids: event.selected.clone(),
                view_id,
            })
        });
        self.bind(form, Surface::AddContent, move |_| {
            Some(Intent::AddContentToView(view_id))
        });
        self.bind(form, Surface::DeleteRecord, move |_| {
            Some(Intent::DeleteView(view_id))
        });
    }

    /// Validate locally; only a valid form reaches the gateway.
    pub(super) fn submit_view_form(&mut self, view_id: Option<RecordId>, form: &FormSnapshot) {
        let region = self.regions.get(Slot::Detail);
        let report = form.validate();
        if !report.is_valid() {
            log::debug!("View form has {} invalid field(s)", report.errors.len());
            if let Some(region) = region {
                self.renderer.render_form_errors(region, &report.errors);
            }
            return;
        }

        let payload = form.to_view_form();
        self.request(RequestSlot::Mutation, region, move |gateway| async move {
            Outcome::ViewSaved {
                result: gateway.save_view(view_id, &payload).await,
            }
        });
    }

    pub(super) fn delete_view(&mut self, view_id: RecordId) {
        self.request(RequestSlot::Mutation, None, move |gateway| async move {
            Outcome::ViewDeleted {
                view_id,
                result: gateway.delete_view(view_id).await,
            }
        });
    }

    pub(super) fn remove_content_from_view(&mut self, content_ids: Vec<RecordId>, view_id: RecordId) {
        if content_ids.is_empty() {
            log::debug!("No content selected for removal from view #{view_id}");
            return;
        }
        let count = content_ids.len();
        let region = self.regions.get(Slot::Detail);
        self.request(RequestSlot::Mutation, region, move |gateway| async move {
            Outcome::ContentDetached {
                view_id,
                count,
                result: gateway.detach_content(&content_ids, view_id).await,
            }
        });
    }

    // ===== Add-content sub-mode =====

    /// Panel of the view editor, if one is shown.
    fn editor_panel(&self) -> Option<Region> {
        if self.screen != Screen::ViewDetail {
            log::debug!("No view editor on {}", self.screen);
            return None;
        }
        self.regions.get(Slot::Panel)
    }

    /// Leave any running content search before the panel is repainted.
    fn reset_panel(&mut self) {
        self.searches.cancel(SearchChannel::Content);
        self.pending.cancel(RequestSlot::Suggestions);
    }

    pub(super) fn add_content_to_view(&mut self, view_id: RecordId) {
        let Some(panel) = self.editor_panel() else {
            return;
        };
        self.reset_panel();
        let chooser = self.paint(Slot::Panel, |r| r.render_add_content_chooser(panel, view_id));
        self.sub_mode = Some(SubMode::Choosing { view_id });

        self.bind(chooser, Surface::ChooseCreate, move |_| {
            Some(Intent::CreateContentForView(view_id))
        });
        self.bind(chooser, Surface::ChooseExisting, move |_| {
            Some(Intent::UseExistingContent(view_id))
        });
        self.bind(chooser, Surface::Cancel, |_| Some(Intent::Cancel));
    }

    pub(super) fn create_content_for_view(&mut self, view_id: RecordId) {
        let Some(panel) = self.editor_panel() else {
            return;
        };
        self.reset_panel();
        let fields = forms::content_form_fields(None);
        let form = self.paint(Slot::Panel, |r| r.render_content_form(panel, None, &fields));
        self.sub_mode = Some(SubMode::CreatingContent { view_id });
        self.bind_content_form(form, None, Some(view_id));
    }

    pub(super) fn use_existing_content(&mut self, view_id: RecordId) {
        let Some(panel) = self.editor_panel() else {
            return;
        };
        self.reset_panel();
        self.release(Slot::Panel);
        let search = self.renderer.render_search_box(panel);
        self.regions.set(search.panel);
        self.regions.set(search.suggestions);
        self.sub_mode = Some(SubMode::PickingContent { view_id });

        self.bind(search.panel, Surface::ContentSearch, |event| {
            Some(Intent::SearchContent(event.value.clone().unwrap_or_default()))
        });
        self.bind(search.panel, Surface::Cancel, |_| Some(Intent::Cancel));
        self.bind_suggestions(search.suggestions);
    }

    /// Clicking a suggestion attaches it to the view being edited.
    pub(super) fn bind_suggestions(&mut self, suggestions: Region) {
        let Some(SubMode::PickingContent { view_id }) = self.sub_mode else {
            return;
        };
        self.bind(suggestions, Surface::Suggestion, move |event| {
            Some(Intent::AttachSuggestion {
                content_id: event.record_id()?,
                view_id,
            })
        });
    }

    /// Link `content_id` to `view_id`. `visit` is the screen that asked for it;
    /// a save that chains into an attach passes the visit of the save.
    pub(super) fn attach_content(&mut self, visit: u64, content_id: RecordId, view_id: RecordId) {
        self.request_for(visit, RequestSlot::Mutation, None, move |gateway| async move {
            let content_ids = [content_id];
            Outcome::ContentAttached {
                view_id,
                result: gateway.attach_content(&content_ids, view_id).await,
            }
        });
    }
}
