//! English (en-US)

use super::keys::{
    ChooserTexts, CommonTexts, FormTexts, ListTexts, NavTexts, NoticeTexts, PaginationTexts,
    ScreenTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Admin Console",
        save: "Save",
        cancel: "Cancel",
        delete: "Delete",
        edit: "Edit",
        back: "Back",
        help: "Help",
        no_data: "Nothing here yet",
    },

    nav: NavTexts {
        home: "Home",
        views: "Views",
        content: "Content",
        assets: "Assets",
        users: "Users",
        stats: "Statistics",
    },

    lists: ListTexts {
        name: "Name",
        title: "Title",
        content_type: "Type",
        created: "Created",
        actions: "Actions",
        visual_edit: "Visual edit",
        new_view: "New view",
        new_content: "New content",
        search_views: "Search views",
    },

    pagination: PaginationTexts {
        page_of: "Page {page} of {pages}",
        total: "{total} items",
        items_per_page: "Items per page",
        prev: "Previous",
        next: "Next",
    },

    forms: FormTexts {
        new_view: "New view",
        edit_view: "Edit view",
        new_content: "New content",
        edit_content: "Edit content",
        name: "Name",
        title: "Title",
        description: "Description",
        content_type: "Type",
        contents: "Content",
        remove_selected: "Remove selected",
        add_content: "Add content",
        add_field: "Add field",
        field_name: "Field name",
    },

    chooser: ChooserTexts {
        title: "Add content to this view",
        create_new: "Create new",
        use_existing: "Use existing",
        search_placeholder: "Type to search content",
    },

    notices: NoticeTexts {
        view_saved: "View #{id} saved",
        view_deleted: "View #{id} deleted",
        content_saved: "Content #{id} saved",
        content_deleted: "Content #{id} deleted",
        content_detached: "{count} content item(s) removed from the view",
        content_attached: "Content added to view #{id}",
        rejected: "The server rejected: {fields}",
        failure: "Something went wrong: {detail}",
        invalid_field: "{detail}",
    },

    screens: ScreenTexts {
        home_title: "Welcome",
        home_intro: "Pick a section in the menu to start editing.",
        not_found: "{resource} could not be found.",
        placeholder: "This section is not implemented yet.",
    },
};
