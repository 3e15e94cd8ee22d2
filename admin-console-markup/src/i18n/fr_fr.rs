//! Français (fr-FR)

use super::keys::{
    ChooserTexts, CommonTexts, FormTexts, ListTexts, NavTexts, NoticeTexts, PaginationTexts,
    ScreenTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Console d'administration",
        save: "Enregistrer",
        cancel: "Annuler",
        delete: "Supprimer",
        edit: "Modifier",
        back: "Retour",
        help: "Aide",
        no_data: "Rien pour l'instant",
    },

    nav: NavTexts {
        home: "Accueil",
        views: "Vues",
        content: "Contenus",
        assets: "Ressources",
        users: "Utilisateurs",
        stats: "Statistiques",
    },

    lists: ListTexts {
        name: "Nom",
        title: "Titre",
        content_type: "Type",
        created: "Créé le",
        actions: "Actions",
        visual_edit: "Édition visuelle",
        new_view: "Nouvelle vue",
        new_content: "Nouveau contenu",
        search_views: "Rechercher des vues",
    },

    pagination: PaginationTexts {
        page_of: "Page {page} sur {pages}",
        total: "{total} éléments",
        items_per_page: "Éléments par page",
        prev: "Précédent",
        next: "Suivant",
    },

    forms: FormTexts {
        new_view: "Nouvelle vue",
        edit_view: "Modifier la vue",
        new_content: "Nouveau contenu",
        edit_content: "Modifier le contenu",
        name: "Nom",
        title: "Titre",
        description: "Description",
        content_type: "Type",
        contents: "Contenus",
        remove_selected: "Retirer la sélection",
        add_content: "Ajouter un contenu",
        add_field: "Ajouter un champ",
        field_name: "Nom du champ",
    },

    chooser: ChooserTexts {
        title: "Ajouter un contenu à cette vue",
        create_new: "Créer",
        use_existing: "Choisir un existant",
        search_placeholder: "Tapez pour rechercher",
    },

    notices: NoticeTexts {
        view_saved: "Vue n°{id} enregistrée",
        view_deleted: "Vue n°{id} supprimée",
        content_saved: "Contenu n°{id} enregistré",
        content_deleted: "Contenu n°{id} supprimé",
        content_detached: "{count} contenu(s) retiré(s) de la vue",
        content_attached: "Contenu ajouté à la vue n°{id}",
        rejected: "Le serveur a refusé : {fields}",
        failure: "Une erreur est survenue : {detail}",
        invalid_field: "{detail}",
    },

    screens: ScreenTexts {
        home_title: "Bienvenue",
        home_intro: "Choisissez une section dans le menu pour commencer.",
        not_found: "{resource} est introuvable.",
        placeholder: "Cette section n'est pas encore disponible.",
    },
};
