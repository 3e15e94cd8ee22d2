//! [`ScreenRenderer`] that builds an HTML document in memory.
//!
//! Every slot holds one fragment. Rendering a slot replaces its fragment
//! and drops the fragments of the slots below it, the way replacing a DOM
//! subtree would. [`HtmlDocument::html`] composes the fragments into a full
//! page.
//!
//! Clones share the same page, so a caller can keep a handle after boxing
//! one into the controller and drive it like a user: [`fill`], [`check`]
//! and [`trigger`].
//!
//! [`fill`]: HtmlDocument::fill
//! [`check`]: HtmlDocument::check
//! [`trigger`]: HtmlDocument::trigger

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use admin_console_core::types::{
    ContentRecord, ContentRef, HelpText, HelpTopic, ListKind, Notice, PaginationState, RecordId,
    Region, Screen, ScreenLayout, SearchBox, Slot, Surface, UiEvent, ViewRecord,
};
use admin_console_core::{BindingToken, FieldDescriptor, Handler, ScreenRenderer};

use crate::components;
use crate::form::FormState;
use crate::i18n::{Language, Translations};

#[derive(Debug, Clone)]
enum Body {
    Html(String),
    Form(FormState),
}

#[derive(Debug, Clone)]
struct Fragment {
    region: Region,
    body: Body,
}

struct Binding {
    region: Region,
    surface: Surface,
    handler: Handler,
}

struct Help {
    topic: HelpTopic,
    html: String,
    visible: bool,
    open: BTreeSet<String>,
}

struct Page {
    language: Language,
    texts: &'static Translations,
    generation: u64,
    next_token: u64,
    fragments: BTreeMap<Slot, Fragment>,
    bindings: BTreeMap<u64, Binding>,
    help: Option<Help>,
}

impl Page {
    /// Replace the fragment of `slot` and forget everything below it.
    fn put(&mut self, slot: Slot, body: Body) -> Region {
        self.generation += 1;
        let region = Region::new(slot, self.generation);
        self.fragments
            .retain(|other, _| *other == slot || !other.is_within(slot));
        self.fragments.insert(slot, Fragment { region, body });
        region
    }

    fn is_live(&self, region: Region) -> bool {
        self.fragments
            .get(&region.slot)
            .is_some_and(|f| f.region == region)
    }

    /// Form rendered in `region`, if the region is still the live one.
    fn form_mut(&mut self, region: Region) -> Option<&mut FormState> {
        match self.fragments.get_mut(&region.slot) {
            Some(Fragment {
                region: live,
                body: Body::Form(form),
            }) if *live == region => Some(form),
            _ => None,
        }
    }

    fn slot_html(&self, slot: Slot) -> String {
        let Some(fragment) = self.fragments.get(&slot) else {
            return String::new();
        };
        let own = match &fragment.body {
            Body::Html(html) => html.clone(),
            Body::Form(form) => components::editor(self.texts, form),
        };
        let children: String = Slot::ALL
            .into_iter()
            .filter(|child| child.parent() == Some(slot))
            .filter(|child| self.fragments.contains_key(child))
            .map(|child| self.slot_html(child))
            .collect();
        format!(
            "<div data-slot=\"{}\" data-region=\"{}\">{own}{children}</div>",
            slot.name(),
            fragment.region.generation
        )
    }

    fn help_html(&self) -> String {
        let Some(help) = &self.help else {
            return String::new();
        };
        let hidden = if help.visible { "" } else { " hidden" };
        let open: Vec<&str> = help.open.iter().map(String::as_str).collect();
        format!(
            "<aside class=\"help\" data-topic=\"{}\" data-open=\"{}\"{hidden}>{}</aside>",
            help.topic.as_str(),
            components::escape(&open.join(" ")),
            help.html
        )
    }
}

/// In-memory HTML document.
#[derive(Clone)]
pub struct HtmlDocument {
    page: Arc<Mutex<Page>>,
}

impl HtmlDocument {
    pub fn new(language: Language) -> Self {
        Self {
            page: Arc::new(Mutex::new(Page {
                language,
                texts: language.texts(),
                generation: 0,
                next_token: 0,
                fragments: BTreeMap::new(),
                bindings: BTreeMap::new(),
                help: None,
            })),
        }
    }

    fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn language(&self) -> Language {
        self.page().language
    }

    /// Type `value` into the input `name` of the form shown in `slot`.
    pub fn fill(&self, slot: Slot, name: &str, value: &str) -> bool {
        let mut page = self.page();
        match page.fragments.get_mut(&slot) {
            Some(Fragment {
                body: Body::Form(form),
                ..
            }) => form.fill(name, value),
            _ => false,
        }
    }

    /// Tick or untick the content row `content_id` of the view form in `slot`.
    pub fn check(&self, slot: Slot, content_id: RecordId, checked: bool) -> bool {
        let mut page = self.page();
        match page.fragments.get_mut(&slot) {
            Some(Fragment {
                body: Body::Form(form),
                ..
            }) => form.check(content_id, checked),
            _ => false,
        }
    }

    /// Fire `surface` inside `slot` the way a browser would.
    ///
    /// Form surfaces pick up what the form holds: a submit carries the
    /// snapshot, "remove" the checked rows, "add field" the typed name.
    /// Returns how many handlers ran.
    pub fn trigger(&self, slot: Slot, surface: Surface, mut event: UiEvent) -> usize {
        let (handlers, event) = {
            let page = self.page();
            let Some(fragment) = page.fragments.get(&slot) else {
                return 0;
            };
            let live = fragment.region;
            if let Body::Form(form) = &fragment.body {
                match surface {
                    Surface::Save if event.form.is_none() => {
                        event.form = Some(form.to_snapshot());
                    }
                    Surface::RemoveContent if event.selected.is_empty() => {
                        event.selected = form.selected();
                    }
                    Surface::AddField if event.value.is_none() => {
                        event.value = Some(form.new_field.clone());
                    }
                    _ => {}
                }
            }
            let handlers: Vec<Handler> = page
                .bindings
                .values()
                .filter(|b| b.region == live && b.surface == surface)
                .map(|b| Arc::clone(&b.handler))
                .collect();
            (handlers, event)
        };
        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }

    /// Surfaces bound in `slot`, in binding order.
    pub fn bound_surfaces(&self, slot: Slot) -> Vec<Surface> {
        self.page()
            .bindings
            .values()
            .filter(|b| b.region.slot == slot)
            .map(|b| b.surface)
            .collect()
    }

    pub fn binding_count(&self) -> usize {
        self.page().bindings.len()
    }

    /// Markup of one slot and the slots below it.
    pub fn fragment(&self, slot: Slot) -> String {
        self.page().slot_html(slot)
    }

    /// Form shown in `slot`, if any.
    pub fn form(&self, slot: Slot) -> Option<FormState> {
        match &self.page().fragments.get(&slot)?.body {
            Body::Form(form) => Some(form.clone()),
            Body::Html(_) => None,
        }
    }

    /// The whole page.
    pub fn html(&self) -> String {
        let page = self.page();
        format!(
            "<!DOCTYPE html>\n<html lang=\"{lang}\"><head><meta charset=\"utf-8\">\
             <title>{title}</title></head><body>{nav}{help}{notice}{main}</body></html>\n",
            lang = page.language.code(),
            title = components::escape(page.texts.common.app_name),
            nav = page.slot_html(Slot::Navigation),
            help = page.help_html(),
            notice = page.slot_html(Slot::Notice),
            main = page.slot_html(Slot::Main),
        )
    }
}

impl ScreenRenderer for HtmlDocument {
    fn render_navigation(&mut self, active: Screen) -> Region {
        let mut page = self.page();
        let html = components::navigation(page.texts, active);
        page.put(Slot::Navigation, Body::Html(html))
    }

    fn mount_screen(&mut self, screen: Screen) -> ScreenLayout {
        let mut page = self.page();
        let shell = components::screen_shell(page.texts, screen);
        let main = page.put(Slot::Main, Body::Html(shell));
        let (list, detail, panel) = match screen {
            Screen::ViewsHome | Screen::ContentHome => (true, false, true),
            Screen::ViewDetail => (false, true, true),
            Screen::ContentDetail => (false, true, false),
            Screen::Home | Screen::AssetsHome | Screen::UsersHome | Screen::StatsHome => {
                (false, false, false)
            }
        };
        let mut child = |slot: Slot| page.put(slot, Body::Html(String::new()));
        let panel = panel.then(|| child(Slot::Panel));
        let list = list.then(|| child(Slot::List));
        let detail = detail.then(|| child(Slot::Detail));
        ScreenLayout {
            main,
            list,
            detail,
            panel,
        }
    }

    fn render_placeholder(&mut self, main: Region, screen: Screen) -> Region {
        let mut page = self.page();
        let html = components::placeholder(page.texts, screen);
        page.put(main.slot, Body::Html(html))
    }

    fn render_help(&mut self, topic: HelpTopic, help: &HelpText) -> Region {
        let mut page = self.page();
        let visible = page.help.as_ref().is_some_and(|h| h.visible);
        page.help = Some(Help {
            topic,
            html: help.html.clone(),
            visible,
            open: BTreeSet::new(),
        });
        page.put(Slot::Help, Body::Html(String::new()))
    }

    fn toggle_help(&mut self, help: Region) {
        let mut page = self.page();
        if !page.is_live(help) {
            return;
        }
        if let Some(help) = page.help.as_mut() {
            help.visible = !help.visible;
        }
    }

    fn toggle_help_section(&mut self, help: Region, section: &str) {
        let mut page = self.page();
        if !page.is_live(help) {
            return;
        }
        if let Some(help) = page.help.as_mut() {
            if !help.open.remove(section) {
                help.open.insert(section.to_string());
            }
        }
    }

    fn render_list_toolbar(&mut self, panel: Region, list: ListKind) -> Region {
        let mut page = self.page();
        let html = components::list_toolbar(page.texts, list);
        page.put(panel.slot, Body::Html(html))
    }

    fn render_view_list(
        &mut self,
        list: Region,
        views: &[ViewRecord],
        pagination: &PaginationState,
    ) -> Region {
        let mut page = self.page();
        let html = components::view_list(page.texts, views, pagination);
        page.put(list.slot, Body::Html(html))
    }

    fn render_content_list(
        &mut self,
        list: Region,
        items: &[ContentRecord],
        pagination: &PaginationState,
    ) -> Region {
        let mut page = self.page();
        let html = components::content_list(page.texts, items, pagination);
        page.put(list.slot, Body::Html(html))
    }

    fn render_view_form(
        &mut self,
        region: Region,
        view: Option<&ViewRecord>,
        fields: &[FieldDescriptor],
    ) -> Region {
        let form = FormState::for_view(view, fields);
        self.page().put(region.slot, Body::Form(form))
    }

    fn render_content_form(
        &mut self,
        region: Region,
        content: Option<&ContentRecord>,
        fields: &[FieldDescriptor],
    ) -> Region {
        let form = FormState::for_content(content, fields);
        self.page().put(region.slot, Body::Form(form))
    }

    fn render_add_content_chooser(&mut self, panel: Region, view_id: RecordId) -> Region {
        let mut page = self.page();
        let html = components::chooser(page.texts, view_id);
        page.put(panel.slot, Body::Html(html))
    }

    fn render_search_box(&mut self, panel: Region) -> SearchBox {
        let mut page = self.page();
        let html = components::search_box(page.texts);
        let panel = page.put(panel.slot, Body::Html(html));
        let suggestions = page.put(Slot::Suggestions, Body::Html(components::suggestions(&[])));
        SearchBox { panel, suggestions }
    }

    fn render_suggestions(&mut self, suggestions: Region, items: &[ContentRef]) -> Region {
        self.page()
            .put(suggestions.slot, Body::Html(components::suggestions(items)))
    }

    fn append_content_field(&mut self, form: Region, field: &FieldDescriptor) {
        if let Some(form) = self.page().form_mut(form) {
            form.append(field);
        }
    }

    fn render_form_errors(&mut self, form: Region, errors: &BTreeMap<String, String>) {
        if let Some(form) = self.page().form_mut(form) {
            form.errors.clone_from(errors);
        }
    }

    fn render_not_found(&mut self, region: Region, resource: &str) -> Region {
        let mut page = self.page();
        let html = components::not_found(page.texts, resource);
        page.put(region.slot, Body::Html(html))
    }

    fn clear(&mut self, region: Region) -> Region {
        self.page().put(region.slot, Body::Html(String::new()))
    }

    fn show_notice(&mut self, notice: &Notice) -> Region {
        let mut page = self.page();
        let html = components::notice(page.texts, notice);
        page.put(Slot::Notice, Body::Html(html))
    }

    fn bind(&mut self, region: Region, surface: Surface, handler: Handler) -> BindingToken {
        let mut page = self.page();
        page.next_token += 1;
        let id = page.next_token;
        page.bindings.insert(
            id,
            Binding {
                region,
                surface,
                handler,
            },
        );
        BindingToken::new(id, region, surface)
    }

    fn unbind(&mut self, token: BindingToken) {
        self.page().bindings.remove(&token.id());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use admin_console_core::forms::view_form_fields;
    use admin_console_core::test_utils::{content_record, view_record};

    use super::*;

    fn counter() -> (Arc<AtomicUsize>, Handler) {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        let handler: Handler = Arc::new(move |_: &UiEvent| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (hits, handler)
    }

    #[test]
    fn rendering_a_slot_drops_its_children() {
        let mut doc = HtmlDocument::new(Language::EnUs);
        let layout = doc.mount_screen(Screen::ViewDetail);
        let panel = layout.panel.unwrap();
        let search = doc.render_search_box(panel);
        assert!(doc.fragment(Slot::Panel).contains("data-slot=\"suggestions\""));

        doc.render_add_content_chooser(search.panel, 7);
        assert!(!doc.fragment(Slot::Panel).contains("data-slot=\"suggestions\""));

        doc.render_placeholder(layout.main, Screen::StatsHome);
        assert!(doc.fragment(Slot::Detail).is_empty());
    }

    #[test]
    fn stale_region_does_not_fire() {
        let mut doc = HtmlDocument::new(Language::EnUs);
        let nav = doc.render_navigation(Screen::Home);
        let (hits, handler) = counter();
        doc.bind(nav, Surface::HelpToggle, handler);
        assert_eq!(doc.trigger(Slot::Navigation, Surface::HelpToggle, UiEvent::new()), 1);

        doc.render_navigation(Screen::ViewsHome);
        assert_eq!(doc.trigger(Slot::Navigation, Surface::HelpToggle, UiEvent::new()), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unbind_detaches_once() {
        let mut doc = HtmlDocument::new(Language::EnUs);
        let nav = doc.render_navigation(Screen::Home);
        let (_, handler) = counter();
        let token = doc.bind(nav, Surface::HelpToggle, handler);
        assert_eq!(doc.binding_count(), 1);
        doc.unbind(token);
        assert_eq!(doc.binding_count(), 0);
    }

    #[test]
    fn submit_carries_the_typed_values() {
        let mut doc = HtmlDocument::new(Language::EnUs);
        let layout = doc.mount_screen(Screen::ViewDetail);
        let form = doc.render_view_form(layout.detail.unwrap(), None, &view_form_fields());

        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        doc.bind(
            form,
            Surface::Save,
            Arc::new(move |event: &UiEvent| {
                *sink.lock().unwrap() = event.form.clone();
            }),
        );
        assert!(doc.fill(Slot::Detail, "name", "landing"));
        assert!(doc.fill(Slot::Detail, "title", "Landing"));
        doc.trigger(Slot::Detail, Surface::Save, UiEvent::new());

        let snapshot = seen.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.value("name"), "landing");
        assert!(snapshot.validate().is_valid());
    }

    #[test]
    fn remove_carries_checked_rows() {
        let mut doc = HtmlDocument::new(Language::EnUs);
        let layout = doc.mount_screen(Screen::ViewDetail);
        let mut view = view_record(7, "landing");
        view.contents = vec![content_record(3, "intro").to_ref()];
        let form = doc.render_view_form(layout.detail.unwrap(), Some(&view), &view_form_fields());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        doc.bind(
            form,
            Surface::RemoveContent,
            Arc::new(move |event: &UiEvent| {
                sink.lock().unwrap().clone_from(&event.selected);
            }),
        );
        assert!(doc.check(Slot::Detail, 3, true));
        doc.trigger(Slot::Detail, Surface::RemoveContent, UiEvent::new());
        assert_eq!(*seen.lock().unwrap(), vec![3]);
    }

    #[test]
    fn errors_keep_the_typed_values() {
        let mut doc = HtmlDocument::new(Language::EnUs);
        let layout = doc.mount_screen(Screen::ViewDetail);
        let form = doc.render_view_form(layout.detail.unwrap(), None, &view_form_fields());
        doc.fill(Slot::Detail, "name", "Bad Name");
        doc.render_form_errors(
            form,
            &BTreeMap::from([("name".to_string(), "Name must be a valid slug".to_string())]),
        );
        let html = doc.fragment(Slot::Detail);
        assert!(html.contains("value=\"Bad Name\""));
        assert!(html.contains("Name must be a valid slug"));
    }

    #[test]
    fn help_visibility_survives_a_new_topic() {
        let mut doc = HtmlDocument::new(Language::FrFr);
        let help = doc.render_help(
            HelpTopic::View,
            &HelpText {
                html: "<section data-section=\"intro\"><h3>x</h3></section>".into(),
            },
        );
        assert!(doc.html().contains(" hidden>"));
        doc.toggle_help(help);
        doc.toggle_help_section(help, "intro");
        let html = doc.html();
        assert!(html.contains("<html lang=\"fr-FR\">"));
        assert!(html.contains("data-open=\"intro\">"));

        doc.render_help(HelpTopic::Content, &HelpText { html: String::new() });
        assert!(!doc.html().contains(" hidden>"));
    }
}
