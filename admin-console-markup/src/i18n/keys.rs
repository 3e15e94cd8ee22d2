//! Translation keys
//!
//! Every label of the generated markup, grouped by where it appears:
//!
//! 1. **`nav.*`**: menu entries
//! 2. **`lists.*` / `pagination.*`**: list screens
//! 3. **`forms.*` / `chooser.*`**: editors and the add-content panel
//! 4. **`notices.*`**: flash messages; `{id}`, `{count}`, `{fields}` and
//!    `{detail}` are substituted
//! 5. **`common.*`**: words reused in several places

/// Root of all translation texts
pub struct Translations {
    pub common: CommonTexts,
    pub nav: NavTexts,
    pub lists: ListTexts,
    pub pagination: PaginationTexts,
    pub forms: FormTexts,
    pub chooser: ChooserTexts,
    pub notices: NoticeTexts,
    pub screens: ScreenTexts,
}

pub struct CommonTexts {
    pub app_name: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub edit: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub no_data: &'static str,
}

pub struct NavTexts {
    pub home: &'static str,
    pub views: &'static str,
    pub content: &'static str,
    pub assets: &'static str,
    pub users: &'static str,
    pub stats: &'static str,
}

pub struct ListTexts {
    pub name: &'static str,
    pub title: &'static str,
    pub content_type: &'static str,
    pub created: &'static str,
    pub actions: &'static str,
    pub visual_edit: &'static str,
    pub new_view: &'static str,
    pub new_content: &'static str,
    pub search_views: &'static str,
}

pub struct PaginationTexts {
    /// `{page}` and `{pages}` are substituted.
    pub page_of: &'static str,
    /// `{total}` is substituted.
    pub total: &'static str,
    pub items_per_page: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
}

pub struct FormTexts {
    pub new_view: &'static str,
    pub edit_view: &'static str,
    pub new_content: &'static str,
    pub edit_content: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub content_type: &'static str,
    pub contents: &'static str,
    pub remove_selected: &'static str,
    pub add_content: &'static str,
    pub add_field: &'static str,
    pub field_name: &'static str,
}

pub struct ChooserTexts {
    pub title: &'static str,
    pub create_new: &'static str,
    pub use_existing: &'static str,
    pub search_placeholder: &'static str,
}

pub struct NoticeTexts {
    pub view_saved: &'static str,
    pub view_deleted: &'static str,
    pub content_saved: &'static str,
    pub content_deleted: &'static str,
    pub content_detached: &'static str,
    pub content_attached: &'static str,
    pub rejected: &'static str,
    pub failure: &'static str,
    pub invalid_field: &'static str,
}

pub struct ScreenTexts {
    pub home_title: &'static str,
    pub home_intro: &'static str,
    /// `{resource}` is substituted.
    pub not_found: &'static str,
    pub placeholder: &'static str,
}
