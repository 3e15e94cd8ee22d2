//! HTML fragments.
//!
//! Each builder returns the inner markup of one region. Class names and
//! `data-*` attributes match the selectors of
//! [`Surface`](admin_console_core::types::Surface), so a browser front end
//! can bind the same surfaces on this markup.

use admin_console_core::forms::CONTENT_FIELD_PREFIX;
use admin_console_core::types::{
    ContentRecord, ContentRef, ListKind, Notice, NoticeKind, NoticeLevel, PaginationState,
    RecordId, Screen, ViewRecord,
};
use admin_console_core::{FieldDescriptor, FieldKind};

use crate::form::{FormState, NEW_FIELD_INPUT};
use crate::i18n::{fill, Translations};

/// Page sizes offered by the items-per-page select.
pub const PAGE_SIZES: [u32; 5] = [5, 10, 25, 50, 100];

/// Escape text for element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn menu_label(t: &Translations, screen: Screen) -> &'static str {
    match screen.section() {
        Screen::ViewsHome | Screen::ViewDetail => t.nav.views,
        Screen::ContentHome | Screen::ContentDetail => t.nav.content,
        Screen::AssetsHome => t.nav.assets,
        Screen::UsersHome => t.nav.users,
        Screen::StatsHome => t.nav.stats,
        Screen::Home => t.nav.home,
    }
}

// ===== Shell =====

pub fn navigation(t: &Translations, active: Screen) -> String {
    let mut html = format!("<nav><strong>{}</strong><ul>", escape(t.common.app_name));
    for screen in Screen::MENU {
        let class = if screen == active.section() {
            " class=\"active\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<li><a href=\"#{slug}\" data-screen=\"{slug}\"{class}>{label}</a></li>",
            slug = screen.slug(),
            label = escape(menu_label(t, screen)),
        ));
    }
    html.push_str(&format!(
        "</ul><button type=\"button\" class=\"help-toggle\">{}</button></nav>",
        escape(t.common.help)
    ));
    html
}

/// Heading of a freshly mounted screen. Child regions are composed after it.
pub fn screen_shell(t: &Translations, screen: Screen) -> String {
    match screen {
        Screen::Home => format!(
            "<h1>{}</h1><p>{}</p>",
            escape(t.screens.home_title),
            escape(t.screens.home_intro)
        ),
        Screen::ViewDetail | Screen::ContentDetail => String::new(),
        other => format!("<h1>{}</h1>", escape(menu_label(t, other))),
    }
}

pub fn placeholder(t: &Translations, screen: Screen) -> String {
    format!(
        "<h1>{}</h1><p class=\"placeholder\">{}</p>",
        escape(menu_label(t, screen)),
        escape(t.screens.placeholder)
    )
}

pub fn not_found(t: &Translations, resource: &str) -> String {
    format!(
        "<p class=\"not-found\">{}</p><a href=\"#\" class=\"back\">{}</a>",
        escape(&fill(t.screens.not_found, &[("resource", resource)])),
        escape(t.common.back)
    )
}

// ===== Lists =====

pub fn list_toolbar(t: &Translations, list: ListKind) -> String {
    match list {
        ListKind::Views => format!(
            "<div class=\"toolbar\"><button type=\"button\" class=\"new-record\">{}</button>\
             <input type=\"search\" class=\"list-search\" placeholder=\"{}\"></div>",
            escape(t.lists.new_view),
            escape(t.lists.search_views)
        ),
        ListKind::Content => format!(
            "<div class=\"toolbar\"><button type=\"button\" class=\"new-record\">{}</button></div>",
            escape(t.lists.new_content)
        ),
    }
}

pub fn view_list(t: &Translations, views: &[ViewRecord], pagination: &PaginationState) -> String {
    let mut html = format!(
        "<table class=\"records\"><thead><tr><th>{}</th><th>{}</th><th>{}</th><th>{}</th></tr></thead><tbody>",
        escape(t.lists.name),
        escape(t.lists.title),
        escape(t.lists.created),
        escape(t.lists.actions)
    );
    for view in views {
        html.push_str(&format!(
            "<tr data-id=\"{id}\"><td>{name}</td><td>{title}</td><td>{created}</td>\
             <td><a href=\"#\" class=\"edit\">{edit}</a> \
             <a href=\"#\" class=\"visual-edit\">{visual}</a> \
             <button type=\"button\" class=\"delete\">{delete}</button></td></tr>",
            id = view.id,
            name = escape(&view.name),
            title = escape(&view.title),
            created = view.created_at.format("%Y-%m-%d"),
            edit = escape(t.common.edit),
            visual = escape(t.lists.visual_edit),
            delete = escape(t.common.delete),
        ));
    }
    if views.is_empty() {
        html.push_str(&empty_row(t, 4));
    }
    html.push_str("</tbody></table>");
    html.push_str(&pagination_controls(t, pagination));
    html
}

pub fn content_list(
    t: &Translations,
    items: &[ContentRecord],
    pagination: &PaginationState,
) -> String {
    let mut html = format!(
        "<table class=\"records\"><thead><tr><th>{}</th><th>{}</th><th>{}</th><th>{}</th></tr></thead><tbody>",
        escape(t.lists.name),
        escape(t.lists.content_type),
        escape(t.lists.created),
        escape(t.lists.actions)
    );
    for item in items {
        html.push_str(&format!(
            "<tr data-id=\"{id}\"><td>{name}</td><td>{kind}</td><td>{created}</td>\
             <td><a href=\"#\" class=\"edit\">{edit}</a> \
             <button type=\"button\" class=\"delete\">{delete}</button></td></tr>",
            id = item.id,
            name = escape(&item.name),
            kind = escape(&item.content_type),
            created = item.created_at.format("%Y-%m-%d"),
            edit = escape(t.common.edit),
            delete = escape(t.common.delete),
        ));
    }
    if items.is_empty() {
        html.push_str(&empty_row(t, 4));
    }
    html.push_str("</tbody></table>");
    html.push_str(&pagination_controls(t, pagination));
    html
}

fn empty_row(t: &Translations, columns: usize) -> String {
    format!(
        "<tr class=\"empty\"><td colspan=\"{columns}\">{}</td></tr>",
        escape(t.common.no_data)
    )
}

/// Page links, summary and the items-per-page select.
pub fn pagination_controls(t: &Translations, state: &PaginationState) -> String {
    let pages = state.number_of_pages.max(1);
    let mut html = String::from("<div class=\"pagination\">");
    if state.has_previous() {
        html.push_str(&format!(
            "<a href=\"#\" data-page=\"{}\" rel=\"prev\">{}</a>",
            state.page - 1,
            escape(t.pagination.prev)
        ));
    }
    for page in 1..=pages {
        if page == state.page {
            html.push_str(&format!("<span class=\"current\">{page}</span>"));
        } else {
            html.push_str(&format!("<a href=\"#\" data-page=\"{page}\">{page}</a>"));
        }
    }
    if state.has_next() {
        html.push_str(&format!(
            "<a href=\"#\" data-page=\"{}\" rel=\"next\">{}</a>",
            state.page + 1,
            escape(t.pagination.next)
        ));
    }
    let summary = fill(
        t.pagination.page_of,
        &[("page", &state.page.to_string()), ("pages", &pages.to_string())],
    );
    let total = fill(t.pagination.total, &[("total", &state.total.to_string())]);
    html.push_str(&format!(
        "<span class=\"summary\">{} · {}</span>",
        escape(&summary),
        escape(&total)
    ));

    let mut sizes = PAGE_SIZES.to_vec();
    if !sizes.contains(&state.items_per_page) {
        sizes.push(state.items_per_page);
        sizes.sort_unstable();
    }
    html.push_str(&format!(
        "<label>{} <select class=\"items-per-page\">",
        escape(t.pagination.items_per_page)
    ));
    for size in sizes {
        let selected = if size == state.items_per_page {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{size}\" data-items=\"{size}\"{selected}>{size}</option>"
        ));
    }
    html.push_str("</select></label></div>");
    html
}

// ===== Editors =====

fn field_label(t: &Translations, field: &FieldDescriptor) -> String {
    match field.name.as_str() {
        "name" => t.forms.name.to_string(),
        "title" => t.forms.title.to_string(),
        "description" => t.forms.description.to_string(),
        "type" => t.forms.content_type.to_string(),
        _ => field.label.clone(),
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Number | FieldKind::Integer => "number",
        FieldKind::Email => "email",
        FieldKind::Url => "url",
        FieldKind::Date => "date",
        FieldKind::Text | FieldKind::Slug => "text",
    }
}

fn form_title(t: &Translations, form: &FormState) -> &'static str {
    match (form.kind, form.record_id().is_some()) {
        (ListKind::Views, false) => t.forms.new_view,
        (ListKind::Views, true) => t.forms.edit_view,
        (ListKind::Content, false) => t.forms.new_content,
        (ListKind::Content, true) => t.forms.edit_content,
    }
}

fn field_row(t: &Translations, form: &FormState, field: &FieldDescriptor) -> String {
    let name = escape(&field.name);
    let value = escape(form.value(&field.name));
    let required = if field.required { " required" } else { "" };
    let input = if field.name.starts_with(CONTENT_FIELD_PREFIX) {
        format!("<textarea name=\"{name}\"{required}>{value}</textarea>")
    } else {
        format!(
            "<input type=\"{}\" name=\"{name}\" value=\"{value}\"{required}>",
            input_type(field.kind)
        )
    };
    let error = form
        .errors
        .get(&field.name)
        .map(|message| format!("<span class=\"error\">{}</span>", escape(message)))
        .unwrap_or_default();
    let class = if error.is_empty() {
        "field"
    } else {
        "field invalid"
    };
    format!(
        "<div class=\"{class}\"><label>{}</label>{input}{error}</div>",
        escape(&field_label(t, field))
    )
}

fn view_contents(t: &Translations, contents: &[ContentRef], form: &FormState) -> String {
    let mut html = format!(
        "<fieldset class=\"contents\"><legend>{}</legend><ul>",
        escape(t.forms.contents)
    );
    for content in contents {
        let checked = if form.checked.contains(&content.content_id) {
            " checked"
        } else {
            ""
        };
        html.push_str(&format!(
            "<li><label><input type=\"checkbox\" data-id=\"{}\"{checked}> {}</label></li>",
            content.content_id,
            escape(&content.display_name)
        ));
    }
    html.push_str(&format!(
        "</ul><button type=\"button\" class=\"remove-content\">{}</button>\
         <button type=\"button\" class=\"add-content\">{}</button></fieldset>",
        escape(t.forms.remove_selected),
        escape(t.forms.add_content)
    ));
    html
}

/// View or content editor, with inline errors and typed values.
pub fn editor(t: &Translations, form: &FormState) -> String {
    let record = form
        .record_id()
        .map(|id| format!(" data-id=\"{id}\""))
        .unwrap_or_default();
    let mut html = format!(
        "<form class=\"editor {kind}\"{record}><h2>{title}</h2>",
        kind = match form.kind {
            ListKind::Views => "view",
            ListKind::Content => "content",
        },
        title = escape(form_title(t, form)),
    );
    for field in &form.snapshot.descriptors {
        html.push_str(&field_row(t, form, field));
    }
    match form.kind {
        ListKind::Views if form.record_id().is_some() => {
            html.push_str(&view_contents(t, &form.contents, form));
        }
        ListKind::Views => {}
        ListKind::Content => html.push_str(&format!(
            "<div class=\"add-field\"><input type=\"text\" name=\"{NEW_FIELD_INPUT}\" \
             placeholder=\"{}\" value=\"{}\"><button type=\"button\" class=\"add-field\">{}</button></div>",
            escape(t.forms.field_name),
            escape(&form.new_field),
            escape(t.forms.add_field)
        )),
    }
    html.push_str(&format!(
        "<div class=\"actions\"><button type=\"submit\">{}</button>\
         <button type=\"button\" class=\"cancel\">{}</button>",
        escape(t.common.save),
        escape(t.common.cancel)
    ));
    if form.record_id().is_some() {
        html.push_str(&format!(
            "<button type=\"button\" class=\"delete-record\">{}</button>",
            escape(t.common.delete)
        ));
    }
    html.push_str("</div></form>");
    html
}

// ===== Add-content panel =====

pub fn chooser(t: &Translations, view_id: RecordId) -> String {
    format!(
        "<div class=\"chooser\" data-view=\"{view_id}\"><h3>{}</h3>\
         <button type=\"button\" class=\"create-content\">{}</button>\
         <button type=\"button\" class=\"use-existing\">{}</button>\
         <button type=\"button\" class=\"cancel\">{}</button></div>",
        escape(t.chooser.title),
        escape(t.chooser.create_new),
        escape(t.chooser.use_existing),
        escape(t.common.cancel)
    )
}

pub fn search_box(t: &Translations) -> String {
    format!(
        "<div class=\"content-picker\"><input type=\"search\" class=\"content-search\" placeholder=\"{}\">\
         <button type=\"button\" class=\"cancel\">{}</button></div>",
        escape(t.chooser.search_placeholder),
        escape(t.common.cancel)
    )
}

pub fn suggestions(items: &[ContentRef]) -> String {
    let mut html = String::from("<ul class=\"suggestions\">");
    for item in items {
        html.push_str(&format!(
            "<li data-id=\"{}\">{}</li>",
            item.content_id,
            escape(&item.display_name)
        ));
    }
    html.push_str("</ul>");
    html
}

// ===== Notices =====

pub fn notice_text(t: &Translations, kind: &NoticeKind) -> String {
    let n = &t.notices;
    match kind {
        NoticeKind::ViewSaved { view_id } => fill(n.view_saved, &[("id", &view_id.to_string())]),
        NoticeKind::ViewDeleted { view_id } => {
            fill(n.view_deleted, &[("id", &view_id.to_string())])
        }
        NoticeKind::ContentSaved { content_id } => {
            fill(n.content_saved, &[("id", &content_id.to_string())])
        }
        NoticeKind::ContentDeleted { content_id } => {
            fill(n.content_deleted, &[("id", &content_id.to_string())])
        }
        NoticeKind::ContentDetached { count } => {
            fill(n.content_detached, &[("count", &count.to_string())])
        }
        NoticeKind::ContentAttached { view_id } => {
            fill(n.content_attached, &[("id", &view_id.to_string())])
        }
        NoticeKind::Rejected { fields } => fill(n.rejected, &[("fields", &fields.join(", "))]),
        NoticeKind::Failure { detail } => fill(n.failure, &[("detail", detail)]),
        NoticeKind::InvalidField { detail } => fill(n.invalid_field, &[("detail", detail)]),
    }
}

pub fn notice(t: &Translations, notice: &Notice) -> String {
    let level = match notice.level {
        NoticeLevel::Success => "success",
        NoticeLevel::Info => "info",
        NoticeLevel::Error => "error",
    };
    format!(
        "<p class=\"notice {level}\" role=\"status\">{}</p>",
        escape(&notice_text(t, &notice.kind))
    )
}

#[cfg(test)]
mod tests {
    use admin_console_core::forms::{content_form_fields, view_form_fields};
    use admin_console_core::test_utils::{content_record, view_record};
    use admin_console_core::types::PaginationRequest;

    use super::*;
    use crate::i18n::Language;

    fn en() -> &'static Translations {
        Language::EnUs.texts()
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn navigation_highlights_the_section() {
        let html = navigation(en(), Screen::ViewDetail);
        assert!(html.contains("data-screen=\"views\" class=\"active\""));
        assert!(!html.contains("data-screen=\"home\" class=\"active\""));
        assert!(html.contains("class=\"help-toggle\""));
    }

    #[test]
    fn view_rows_carry_their_id() {
        let views = [view_record(3, "a<b")];
        let state = PaginationState::from_total(PaginationRequest::new(1, 10), 1);
        let html = view_list(en(), &views, &state);
        assert!(html.contains("<tr data-id=\"3\">"));
        assert!(html.contains("a&lt;b"));
        assert!(html.contains("class=\"visual-edit\""));
        assert!(html.contains("2019-05-01"));
    }

    #[test]
    fn pagination_links_skip_the_current_page() {
        let state = PaginationState::from_total(PaginationRequest::new(2, 10), 25);
        let html = pagination_controls(en(), &state);
        assert!(html.contains("data-page=\"1\" rel=\"prev\""));
        assert!(html.contains("<span class=\"current\">2</span>"));
        assert!(html.contains("data-page=\"3\" rel=\"next\""));
        assert!(html.contains("Page 2 of 3"));
        assert!(html.contains("<option value=\"10\" data-items=\"10\" selected>"));
    }

    #[test]
    fn odd_page_size_is_offered() {
        let state = PaginationState::from_total(PaginationRequest::new(1, 7), 3);
        let html = pagination_controls(en(), &state);
        assert!(html.contains("<option value=\"7\" data-items=\"7\" selected>"));
        assert!(!html.contains("rel=\"next\""));
    }

    #[test]
    fn editor_shows_errors_and_values() {
        let mut form = FormState::for_view(None, &view_form_fields());
        form.fill("name", "Bad Name");
        form.errors
            .insert("name".into(), "Name must be a valid slug".into());
        let html = editor(en(), &form);
        assert!(html.contains("<h2>New view</h2>"));
        assert!(html.contains("value=\"Bad Name\""));
        assert!(html.contains("<span class=\"error\">Name must be a valid slug</span>"));
        assert!(!html.contains("delete-record"));
        assert!(!html.contains("add-content"));
    }

    #[test]
    fn content_editor_uses_textareas_for_fields() {
        let record = content_record(4, "outro");
        let form = FormState::for_content(Some(&record), &content_form_fields(Some(&record)));
        let html = editor(en(), &form);
        assert!(html.contains("<textarea name=\"content_body\">Body of outro</textarea>"));
        assert!(html.contains("class=\"delete-record\""));
        assert!(html.contains("button type=\"button\" class=\"add-field\""));
    }

    #[test]
    fn notices_are_localized() {
        let kind = NoticeKind::ContentDetached { count: 2 };
        assert_eq!(
            notice_text(en(), &kind),
            "2 content item(s) removed from the view"
        );
        assert_eq!(
            notice_text(Language::FrFr.texts(), &kind),
            "2 contenu(s) retiré(s) de la vue"
        );
    }
}
