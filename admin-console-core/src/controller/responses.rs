//! Applying gateway results.
//!
//! A screen-scoped result is applied only while its tag is current. A
//! mutation always runs to completion: its notice is shown in any case, but
//! follow-up navigation happens only if the user is still where the mutation
//! was issued.

use admin_console_gateway::{GatewayError, PaginationState, ViewRecord};

use super::{Completion, Intent, Outcome, RequestSlot, RequestTag, ScreenController};
use crate::types::{ListKind, Notice, NoticeKind, Screen, Slot, Surface};

impl ScreenController {
    pub(super) fn complete(&mut self, completion: Completion) {
        let Completion { tag, outcome } = completion;
        let latest = self.pending.complete(&tag);
        if tag.slot != RequestSlot::Mutation && !self.is_current(&tag, latest) {
            log::debug!(
                "Discarding stale {:?} response #{} (visit {})",
                tag.slot,
                tag.seq,
                tag.visit
            );
            return;
        }
        // Whether the screen the mutation was issued from is still mounted.
        let same_visit = tag.visit == self.visit;

        match outcome {
            Outcome::Help { topic, result } => match result {
                Ok(help) => {
                    let region = self.paint(Slot::Help, |r| r.render_help(topic, &help));
                    self.bind(region, Surface::HelpSection, |event| {
                        event
                            .data("section")
                            .map(|s| Intent::ToggleHelpSection(s.to_string()))
                    });
                }
                Err(e) => self.report("getHelp", e),
            },

            Outcome::ViewList(result) => match result {
                Ok(page) => {
                    let state = page.pagination.normalized();
                    self.pagination.insert(ListKind::Views, state.request());
                    self.show_view_list(&page.items, state, state);
                }
                Err(e) => self.report("listViews", e),
            },
            Outcome::ViewSearch(result) => match result {
                Ok(views) => {
                    let total = u32::try_from(views.len()).unwrap_or(u32::MAX);
                    // Page links lead back to the list at the page size it had.
                    let links =
                        PaginationState::from_total(self.pagination(ListKind::Views), total);
                    self.show_view_list(&views, PaginationState::single_page(total), links);
                }
                Err(e) => self.report("searchViews", e),
            },
            Outcome::ContentList(result) => match result {
                Ok(page) => {
                    let state = page.pagination.normalized();
                    self.pagination.insert(ListKind::Content, state.request());
                    let Some(list) = self.regions.get(Slot::List) else {
                        return;
                    };
                    let region = self.paint(Slot::List, |r| {
                        r.render_content_list(list, &page.items, &state)
                    });
                    self.bind_list(region, ListKind::Content, state);
                }
                Err(e) => self.report("listContent", e),
            },

            Outcome::View { view_id, result } => {
                self.transition = None;
                match result {
                    Ok(view) => {
                        let layout = self.mount(Screen::ViewDetail);
                        self.show_view_form(layout, Some(&view));
                        self.fetch_help(Screen::ViewDetail);
                    }
                    Err(GatewayError::NotFound { resource, .. }) => {
                        log::warn!("View #{view_id} not found");
                        let layout = self.mount(Screen::ViewDetail);
                        self.show_not_found(layout, &resource, Screen::ViewsHome);
                    }
                    Err(e) => self.report("getView", e),
                }
            }
            Outcome::Content { content_id, result } => {
                self.transition = None;
                match result {
                    Ok(record) => {
                        let layout = self.mount(Screen::ContentDetail);
                        self.show_content_form(layout, Some(&record));
                        self.fetch_help(Screen::ContentDetail);
                    }
                    Err(GatewayError::NotFound { resource, .. }) => {
                        log::warn!("Content #{content_id} not found");
                        let layout = self.mount(Screen::ContentDetail);
                        self.show_not_found(layout, &resource, Screen::ContentHome);
                    }
                    Err(e) => self.report("getContent", e),
                }
            }

            Outcome::Suggestions(result) => match result {
                Ok(items) => {
                    let Some(suggestions) = self.regions.get(Slot::Suggestions) else {
                        return;
                    };
                    let region =
                        self.paint(Slot::Suggestions, |r| r.render_suggestions(suggestions, &items));
                    self.bind_suggestions(region);
                }
                Err(e) => self.report("searchContent", e),
            },

            Outcome::ViewSaved { result } => match result {
                Ok(view_id) => {
                    self.notify(&Notice::success(NoticeKind::ViewSaved { view_id }));
                    if same_visit {
                        self.return_to_list(ListKind::Views);
                    }
                }
                Err(e) => self.reject(tag.region, "saveView", e),
            },
            Outcome::ViewDeleted { view_id, result } => match result {
                Ok(()) => {
                    self.notify(&Notice::success(NoticeKind::ViewDeleted { view_id }));
                    if same_visit && self.screen.parent() == Screen::ViewsHome {
                        self.return_to_list(ListKind::Views);
                    }
                }
                Err(e) => self.report("deleteView", e),
            },
            Outcome::ContentSaved { attach_to, result } => match result {
                Ok(content_id) => {
                    self.notify(&Notice::success(NoticeKind::ContentSaved { content_id }));
                    if let Some(view_id) = attach_to {
                        self.attach_content(tag.visit, content_id, view_id);
                    } else if same_visit && self.screen == Screen::ContentDetail {
                        self.return_to_list(ListKind::Content);
                    }
                }
                Err(e) => self.reject(tag.region, "saveContent", e),
            },
            Outcome::ContentDeleted { content_id, result } => match result {
                Ok(()) => {
                    self.notify(&Notice::success(NoticeKind::ContentDeleted { content_id }));
                    if same_visit && self.screen.parent() == Screen::ContentHome {
                        self.return_to_list(ListKind::Content);
                    }
                }
                Err(e) => self.report("deleteContent", e),
            },
            Outcome::ContentDetached {
                view_id,
                count,
                result,
            } => match result {
                Ok(()) => {
                    self.notify(&Notice::success(NoticeKind::ContentDetached { count }));
                    if same_visit {
                        self.select_view(view_id);
                    }
                }
                Err(e) => self.report("detachContent", e),
            },
            Outcome::ContentAttached { view_id, result } => match result {
                Ok(()) => {
                    self.notify(&Notice::success(NoticeKind::ContentAttached { view_id }));
                    if same_visit && self.screen == Screen::ViewDetail {
                        self.select_view(view_id);
                    }
                }
                Err(e) => self.report("attachContent", e),
            },
        }
    }

    /// Issued for the mounted screen, latest of its slot, target region still shown.
    fn is_current(&self, tag: &RequestTag, latest: bool) -> bool {
        latest
            && tag.visit == self.visit
            && tag.region.is_none_or(|region| self.regions.is_live(region))
    }

    /// Render `views` as described by `state`; page controls act on `links`.
    fn show_view_list(
        &mut self,
        views: &[ViewRecord],
        state: PaginationState,
        links: PaginationState,
    ) {
        let Some(list) = self.regions.get(Slot::List) else {
            return;
        };
        let region = self.paint(Slot::List, |r| r.render_view_list(list, views, &state));
        self.bind_list(region, ListKind::Views, links);
    }

    /// Back to `list` at the page the user left it.
    fn return_to_list(&mut self, list: ListKind) {
        let pagination = self.pagination(list);
        self.navigate(list.screen(), Some(pagination));
    }
}
