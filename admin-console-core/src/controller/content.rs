//! Content editor flows.

use admin_console_gateway::{ContentRecord, RecordId};

use super::{Intent, Outcome, RequestSlot, ScreenController, SubMode};
use crate::forms::{self, FormSnapshot};
use crate::types::{Notice, NoticeKind, Region, Screen, ScreenLayout, Slot, Surface};

impl ScreenController {
    pub(super) fn select_content(&mut self, content_id: RecordId) {
        self.transition = Some(Screen::ContentDetail);
        self.request(RequestSlot::Detail, None, move |gateway| async move {
            Outcome::Content {
                content_id,
                result: gateway.get_content(content_id).await,
            }
        });
    }

    pub(super) fn new_content(&mut self) {
        let layout = self.mount(Screen::ContentDetail);
        self.show_content_form(layout, None);
        self.fetch_help(Screen::ContentDetail);
    }

    pub(super) fn show_content_form(&mut self, layout: ScreenLayout, record: Option<&ContentRecord>) {
        let Some(detail) = layout.detail else {
            log::error!("{} shell has no detail region", self.screen);
            return;
        };
        let fields = forms::content_form_fields(record);
        let form = self.paint(Slot::Detail, |r| r.render_content_form(detail, record, &fields));
        self.bind_content_form(form, record.map(|c| c.id), None);
    }

    pub(super) fn bind_content_form(
        &mut self,
        form: Region,
        content_id: Option<RecordId>,
        attach_to: Option<RecordId>,
    ) {
        self.bind(form, Surface::Save, move |event| {
            Some(Intent::SubmitContentForm {
                content_id,
                form: event.form.clone()?,
                attach_to,
            })
        });
        self.bind(form, Surface::Cancel, |_| Some(Intent::Cancel));
        self.bind(form, Surface::AddField, |event| {
            Some(Intent::AddContentField(event.value.clone()?))
        });
        if let Some(content_id) = content_id {
            self.bind(form, Surface::DeleteRecord, move |_| {
                Some(Intent::DeleteContent(content_id))
            });
        }
    }

    /// Region of the content form being edited: the side panel while
    /// creating content for a view, the detail region otherwise.
    fn content_form_region(&self) -> Option<Region> {
        match self.sub_mode {
            Some(SubMode::CreatingContent { .. }) => self.regions.get(Slot::Panel),
            _ if self.screen == Screen::ContentDetail => self.regions.get(Slot::Detail),
            _ => None,
        }
    }

    pub(super) fn submit_content_form(
        &mut self,
        content_id: Option<RecordId>,
        form: &FormSnapshot,
        attach_to: Option<RecordId>,
    ) {
        let region = self.content_form_region();
        let report = form.validate();
        if !report.is_valid() {
            log::debug!("Content form has {} invalid field(s)", report.errors.len());
            if let Some(region) = region {
                self.renderer.render_form_errors(region, &report.errors);
            }
            return;
        }

        let payload = form.to_content_form();
        self.request(RequestSlot::Mutation, region, move |gateway| async move {
            Outcome::ContentSaved {
                attach_to,
                result: gateway.save_content(content_id, &payload).await,
            }
        });
    }

    pub(super) fn delete_content(&mut self, content_id: RecordId) {
        self.request(RequestSlot::Mutation, None, move |gateway| async move {
            Outcome::ContentDeleted {
                content_id,
                result: gateway.delete_content(content_id).await,
            }
        });
    }

    /// Append a `content_<name>` input to the open content form.
    pub(super) fn add_content_field(&mut self, name: &str) {
        let Some(form) = self.content_form_region() else {
            return;
        };
        match forms::content_field_descriptor(name) {
            Ok(field) => self.renderer.append_content_field(form, &field),
            Err(e) => {
                e.log("addContentField");
                self.notify(&Notice::error(NoticeKind::InvalidField {
                    detail: e.to_string(),
                }));
            }
        }
    }
}
