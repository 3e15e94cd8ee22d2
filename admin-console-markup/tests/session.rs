//! End-to-end runs of the controller against the HTML document.

use std::sync::Arc;

use admin_console_core::test_utils::{content_record, GatewayCall, MockGateway};
use admin_console_core::types::{
    ListKind, PaginationRequest, Screen, Slot, Surface, UiEvent, ViewForm,
};
use admin_console_core::{ControllerConfig, DataGateway};
use admin_console_markup::form::NEW_FIELD_INPUT;
use admin_console_markup::{Language, Session, Target};

async fn session(gateway: &Arc<MockGateway>, language: Language) -> Session {
    Session::open(
        Arc::clone(gateway) as Arc<dyn DataGateway>,
        language,
        ControllerConfig::default(),
    )
    .await
    .unwrap()
}

/// View 7 with content 3 and 4.
async fn seeded() -> Arc<MockGateway> {
    let gateway = Arc::new(MockGateway::new());
    gateway.seed_views(7).await;
    gateway.insert_content(content_record(3, "intro")).await;
    gateway.insert_content(content_record(4, "outro")).await;
    gateway.link(7, &[3, 4]).await;
    gateway
}

#[tokio::test]
async fn home_page_has_menu_and_help() {
    let gateway = Arc::new(MockGateway::new());
    let mut s = session(&gateway, Language::EnUs).await;
    let html = s.html();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en-US\">"));
    assert!(html.contains("data-screen=\"home\" class=\"active\""));
    assert!(html.contains("<h1>Welcome</h1>"));
    assert!(html.contains("data-topic=\"general\""));
    assert!(html.contains(" hidden>"));

    assert_eq!(
        s.trigger(Slot::Navigation, Surface::HelpToggle, UiEvent::new())
            .await,
        1
    );
    assert!(!s.html().contains(" hidden>"));
}

#[tokio::test]
async fn list_page_links_drive_pagination() {
    let gateway = Arc::new(MockGateway::new());
    gateway.seed_views(25).await;
    let mut s = session(&gateway, Language::EnUs).await;

    s.show(Target::Screen {
        screen: Screen::ViewsHome,
        pagination: Some(PaginationRequest::new(2, 10)),
    })
    .await;
    let list = s.document().fragment(Slot::List);
    assert!(list.contains("<tr data-id=\"11\">"));
    assert!(!list.contains("<tr data-id=\"1\">"));
    assert!(list.contains("<span class=\"current\">2</span>"));

    s.trigger(
        Slot::List,
        Surface::PageLink,
        UiEvent::new().with_data("page", "3"),
    )
    .await;
    assert_eq!(
        s.controller().pagination(ListKind::Views),
        PaginationRequest::new(3, 10)
    );
    let list = s.document().fragment(Slot::List);
    assert!(list.contains("<tr data-id=\"21\">"));
    assert!(list.contains("Page 3 of 3"));
}

#[tokio::test]
async fn edited_view_is_saved_and_list_comes_back() {
    let gateway = seeded().await;
    let mut s = session(&gateway, Language::EnUs).await;

    s.show(Target::View(7)).await;
    assert_eq!(s.controller().screen(), Screen::ViewDetail);
    let form = s.document().form(Slot::Detail).unwrap();
    assert_eq!(form.record_id(), Some(7));
    assert_eq!(form.value("name"), "view-7");

    assert!(s.fill(Slot::Detail, "title", "Fresh title"));
    s.trigger(Slot::Detail, Surface::Save, UiEvent::new()).await;

    assert_eq!(
        gateway.calls_of("saveView").await,
        vec![GatewayCall::SaveView(
            Some(7),
            ViewForm {
                name: "view-7".into(),
                title: "Fresh title".into(),
                description: String::new(),
                contents: vec![3, 4],
            }
        )]
    );
    assert_eq!(s.controller().screen(), Screen::ViewsHome);
    let html = s.html();
    assert!(html.contains("View #7 saved"));
    assert!(html.contains("Fresh title"));
}

#[tokio::test]
async fn invalid_view_form_shows_errors_without_a_request() {
    let gateway = seeded().await;
    let mut s = session(&gateway, Language::EnUs).await;
    s.show(Target::View(7)).await;

    s.fill(Slot::Detail, "name", "Not A Slug");
    s.fill(Slot::Detail, "title", "");
    s.trigger(Slot::Detail, Surface::Save, UiEvent::new()).await;

    assert!(gateway.calls_of("saveView").await.is_empty());
    assert_eq!(s.controller().screen(), Screen::ViewDetail);
    let detail = s.document().fragment(Slot::Detail);
    assert!(detail.contains("value=\"Not A Slug\""));
    assert!(detail.contains("Name must be a valid slug"));
    assert!(detail.contains("field invalid"));
}

#[tokio::test]
async fn checked_content_is_removed_from_the_view() {
    let gateway = seeded().await;
    let mut s = session(&gateway, Language::EnUs).await;
    s.show(Target::View(7)).await;

    assert!(s.check(Slot::Detail, 3, true));
    s.trigger(Slot::Detail, Surface::RemoveContent, UiEvent::new())
        .await;

    assert_eq!(
        gateway.calls_of("detachContent").await,
        vec![GatewayCall::DetachContent(vec![3], 7)]
    );
    let form = s.document().form(Slot::Detail).unwrap();
    assert_eq!(form.snapshot.content_ids, vec![4]);
    assert!(s.html().contains("1 content item(s) removed from the view"));
}

#[tokio::test]
async fn missing_view_offers_a_way_back() {
    let gateway = seeded().await;
    let mut s = session(&gateway, Language::EnUs).await;
    s.show(Target::View(99)).await;

    let detail = s.document().fragment(Slot::Detail);
    assert!(detail.contains("could not be found"));
    assert!(detail.contains("class=\"back\""));

    s.trigger(Slot::Detail, Surface::BackLink, UiEvent::new())
        .await;
    assert_eq!(s.controller().screen(), Screen::ViewsHome);
    assert!(s.document().fragment(Slot::List).contains("<tr data-id=\"7\">"));
}

#[tokio::test]
async fn content_editor_grows_a_field() {
    let gateway = seeded().await;
    let mut s = session(&gateway, Language::EnUs).await;
    s.show(Target::Content(3)).await;
    assert_eq!(s.controller().screen(), Screen::ContentDetail);

    assert!(s.fill(Slot::Detail, NEW_FIELD_INPUT, "caption"));
    s.trigger(Slot::Detail, Surface::AddField, UiEvent::new())
        .await;
    assert!(s.fill(Slot::Detail, "content_caption", "A photo"));

    s.trigger(Slot::Detail, Surface::Save, UiEvent::new()).await;
    let saved = gateway.calls_of("saveContent").await;
    let [GatewayCall::SaveContent(Some(3), form)] = saved.as_slice() else {
        panic!("unexpected calls: {saved:?}");
    };
    assert_eq!(form.fields.get("caption").map(String::as_str), Some("A photo"));
    assert_eq!(s.controller().screen(), Screen::ContentHome);
}

#[tokio::test]
async fn bad_field_name_is_reported() {
    let gateway = seeded().await;
    let mut s = session(&gateway, Language::FrFr).await;
    s.show(Target::Content(3)).await;

    s.fill(Slot::Detail, NEW_FIELD_INPUT, "two words");
    s.trigger(Slot::Detail, Surface::AddField, UiEvent::new())
        .await;

    let notice = s.document().fragment(Slot::Notice);
    assert!(notice.contains("notice error"));
    assert!(!s.document().fragment(Slot::Detail).contains("content_two"));
}

#[tokio::test]
async fn french_pages_are_translated() {
    let gateway = seeded().await;
    let mut s = session(&gateway, Language::FrFr).await;
    s.show(Target::Screen {
        screen: Screen::ViewsHome,
        pagination: None,
    })
    .await;

    let html = s.html();
    assert!(html.contains("<html lang=\"fr-FR\">"));
    assert!(html.contains("<h1>Vues</h1>"));
    assert!(html.contains("Nouvelle vue"));
    assert!(html.contains("Page 1 sur 1"));
}
