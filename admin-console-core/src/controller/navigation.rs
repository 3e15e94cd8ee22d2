//! Screen changes, lists, help and search.

use admin_console_gateway::{PaginationRequest, PaginationState};

use super::{Intent, Outcome, RequestSlot, ScreenController, SearchChannel};
use crate::types::{ListKind, Region, Screen, ScreenLayout, Slot, Surface};

impl ScreenController {
    /// Replace the active screen with an empty shell of `screen`.
    ///
    /// Screen-scoped requests and search timers of the previous screen are
    /// dropped; the navigation is repainted with the new section highlighted.
    pub(super) fn mount(&mut self, screen: Screen) -> ScreenLayout {
        self.pending.abort_screen_scoped();
        self.searches.cancel_all();
        self.visit += 1;
        self.screen = screen;
        self.transition = None;
        self.sub_mode = None;
        log::debug!("Mounting {screen} (visit {})", self.visit);

        let nav = self.paint(Slot::Navigation, |r| r.render_navigation(screen.section()));
        for entry in Screen::MENU {
            self.bind(nav, Surface::MenuEntry(entry), move |_| {
                Some(Intent::Navigate {
                    screen: entry,
                    pagination: None,
                })
            });
        }
        self.bind(nav, Surface::HelpToggle, |_| Some(Intent::ToggleHelp));

        self.release(Slot::Main);
        let layout = self.renderer.mount_screen(screen);
        for region in layout.regions() {
            self.regions.set(region);
        }
        layout
    }

    pub(super) fn navigate(&mut self, screen: Screen, pagination: Option<PaginationRequest>) {
        match screen {
            Screen::ViewDetail => return self.new_view(),
            Screen::ContentDetail => return self.new_content(),
            _ => {}
        }

        let layout = self.mount(screen);
        if let Some(list) = screen.list_kind() {
            let request = pagination
                .unwrap_or_else(|| self.config.first_page())
                .validated(self.config.max_items_per_page);
            self.pagination.insert(list, request);
            if let Some(panel) = layout.panel {
                let toolbar = self.paint(Slot::Panel, |r| r.render_list_toolbar(panel, list));
                self.bind_toolbar(toolbar, list);
            }
            self.fetch_list(list, request);
        } else if screen.is_placeholder() {
            self.paint(Slot::Main, |r| r.render_placeholder(layout.main, screen));
        }
        self.fetch_help(screen);
    }

    /// Page link and items-per-page change alike.
    pub(super) fn change_pagination(&mut self, list: ListKind, request: PaginationRequest) {
        if self.screen != list.screen() {
            log::debug!("Ignoring {list:?} pagination on {}", self.screen);
            return;
        }
        let request = request.validated(self.config.max_items_per_page);
        self.pagination.insert(list, request);
        if list == ListKind::Views {
            self.searches.cancel(SearchChannel::Views);
        }
        self.fetch_list(list, request);
    }

    pub(super) fn fetch_list(&mut self, list: ListKind, request: PaginationRequest) {
        let region = self.regions.get(Slot::List);
        match list {
            ListKind::Views => {
                self.request(RequestSlot::List, region, move |gateway| async move {
                    Outcome::ViewList(gateway.list_views(&request).await)
                });
            }
            ListKind::Content => {
                self.request(RequestSlot::List, region, move |gateway| async move {
                    Outcome::ContentList(gateway.list_content(&request).await)
                });
            }
        }
    }

    pub(super) fn fetch_help(&mut self, screen: Screen) {
        let topic = screen.help_topic();
        let locale = self.config.locale.clone();
        self.request(RequestSlot::Help, None, move |gateway| async move {
            Outcome::Help {
                topic,
                result: gateway.get_help(&locale, topic).await,
            }
        });
    }

    fn bind_toolbar(&mut self, toolbar: Region, list: ListKind) {
        match list {
            ListKind::Views => {
                self.bind(toolbar, Surface::NewRecord, |_| Some(Intent::NewView));
                self.bind(toolbar, Surface::ListSearch, |event| {
                    Some(Intent::SearchViews(event.value.clone().unwrap_or_default()))
                });
            }
            ListKind::Content => {
                self.bind(toolbar, Surface::NewRecord, |_| Some(Intent::NewContent));
            }
        }
    }

    /// Row actions and pagination controls of a freshly rendered list.
    pub(super) fn bind_list(&mut self, region: Region, list: ListKind, state: PaginationState) {
        self.bind(region, Surface::PageLink, move |event| {
            Some(Intent::ChangePagination {
                list,
                request: state.goto(event.number("page")?),
            })
        });
        self.bind(region, Surface::ItemsPerPage, move |event| {
            Some(Intent::ChangePagination {
                list,
                request: state.with_items_per_page(event.number("items")?),
            })
        });
        match list {
            ListKind::Views => {
                self.bind(region, Surface::RowSelect, |event| {
                    event.record_id().map(Intent::SelectView)
                });
                self.bind(region, Surface::RowVisualEdit, |event| {
                    event.record_id().map(Intent::SelectView)
                });
                self.bind(region, Surface::RowDelete, |event| {
                    event.record_id().map(Intent::DeleteView)
                });
            }
            ListKind::Content => {
                self.bind(region, Surface::RowSelect, |event| {
                    event.record_id().map(Intent::SelectContent)
                });
                self.bind(region, Surface::RowDelete, |event| {
                    event.record_id().map(Intent::DeleteContent)
                });
            }
        }
    }

    /// "Not found" state with a link back to `parent`.
    pub(super) fn show_not_found(&mut self, layout: ScreenLayout, resource: &str, parent: Screen) {
        let target = layout.detail.unwrap_or(layout.main);
        let region = self.paint(target.slot, |r| r.render_not_found(target, resource));
        let pagination = parent.list_kind().map(|list| self.pagination(list));
        self.bind(region, Surface::BackLink, move |_| {
            Some(Intent::Navigate {
                screen: parent,
                pagination,
            })
        });
    }

    pub(super) fn cancel(&mut self) {
        if self.transition.take().is_some() {
            log::debug!("Abandoning pending screen change");
            self.pending.cancel(RequestSlot::Detail);
            return;
        }

        if let Some(mode) = self.sub_mode.take() {
            log::debug!("Leaving {mode:?} of view #{}", mode.view_id());
            self.searches.cancel(SearchChannel::Content);
            self.pending.cancel(RequestSlot::Suggestions);
            if let Some(panel) = self.regions.get(Slot::Panel) {
                self.paint(Slot::Panel, |r| r.clear(panel));
            }
            return;
        }

        let parent = self.screen.parent();
        let pagination = parent.list_kind().map(|list| self.pagination(list));
        self.navigate(parent, pagination);
    }

    // ===== Help =====

    pub(super) fn toggle_help(&mut self) {
        match self.regions.get(Slot::Help) {
            Some(help) => self.renderer.toggle_help(help),
            None => log::debug!("No help panel to toggle"),
        }
    }

    pub(super) fn toggle_help_section(&mut self, section: &str) {
        if let Some(help) = self.regions.get(Slot::Help) {
            self.renderer.toggle_help_section(help, section);
        }
    }

    // ===== Search =====

    /// A keystroke in one of the search inputs.
    pub(super) fn search(&mut self, channel: SearchChannel, term: String) {
        let active = match channel {
            SearchChannel::Content => self.regions.get(Slot::Suggestions).is_some(),
            SearchChannel::Views => self.screen == Screen::ViewsHome,
        };
        if !active {
            log::debug!("Ignoring {channel:?} search on {}", self.screen);
            return;
        }

        let term = term.trim().to_string();
        if term.chars().count() < self.config.min_search_len {
            self.searches.cancel(channel);
            match channel {
                SearchChannel::Content => {
                    self.pending.cancel(RequestSlot::Suggestions);
                    if let Some(suggestions) = self.regions.get(Slot::Suggestions) {
                        let region =
                            self.paint(Slot::Suggestions, |r| r.render_suggestions(suggestions, &[]));
                        self.bind_suggestions(region);
                    }
                }
                SearchChannel::Views => {
                    let request = self.pagination(ListKind::Views);
                    self.fetch_list(ListKind::Views, request);
                }
            }
            return;
        }

        self.searches.schedule(channel, term, &self.inbox);
    }

    pub(super) fn search_ready(&mut self, channel: SearchChannel, seq: u64) {
        let Some(term) = self.searches.ready(channel, seq) else {
            log::debug!("Dropping superseded {channel:?} search #{seq}");
            return;
        };
        match channel {
            SearchChannel::Content => {
                let Some(region) = self.regions.get(Slot::Suggestions) else {
                    return;
                };
                self.request(RequestSlot::Suggestions, Some(region), move |gateway| async move {
                    Outcome::Suggestions(gateway.search_content(&term).await)
                });
            }
            SearchChannel::Views => {
                let region = self.regions.get(Slot::List);
                self.request(RequestSlot::List, region, move |gateway| async move {
                    Outcome::ViewSearch(gateway.search_views(&term).await)
                });
            }
        }
    }
}
