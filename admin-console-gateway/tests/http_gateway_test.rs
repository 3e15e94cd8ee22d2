//! Live tests against a running admin server.
//!
//! Run with `ADMIN_CONSOLE_BASE_URL=http://localhost:8080 cargo test -- --ignored`.

mod common;

use admin_console_gateway::{GatewayError, HelpTopic, PaginationRequest};

#[tokio::test]
#[ignore = "requires a running admin server"]
async fn test_list_views_pagination() {
    skip_if_no_server!("ADMIN_CONSOLE_BASE_URL");
    let gateway = require_some!(common::gateway());

    let page = require_ok!(gateway.list_views(&PaginationRequest::new(1, 5)).await);
    assert!(page.items.len() <= 5);
    assert!(page.pagination.page >= 1);
    assert!(page.pagination.page <= page.pagination.number_of_pages.max(1));
}

#[tokio::test]
#[ignore = "requires a running admin server"]
async fn test_view_lifecycle() {
    skip_if_no_server!("ADMIN_CONSOLE_BASE_URL");
    let gateway = require_some!(common::gateway());

    let name = common::unique_name("view");
    let id = require_ok!(
        gateway.save_view(None, &common::view_form(&name)).await,
        "create view"
    );

    let view = require_ok!(gateway.get_view(id).await);
    assert_eq!(view.name, name);

    let content_id = require_ok!(
        gateway
            .save_content(None, &common::content_form(&common::unique_name("content")))
            .await,
        "create content"
    );
    require_ok!(gateway.attach_content(&[content_id], id).await);
    let view = require_ok!(gateway.get_view(id).await);
    assert!(view.content_ids().contains(&content_id));

    require_ok!(gateway.detach_content(&[content_id], id).await);
    let view = require_ok!(gateway.get_view(id).await);
    assert!(!view.content_ids().contains(&content_id));

    require_ok!(gateway.delete_content(content_id).await);
    require_ok!(gateway.delete_view(id).await);

    let gone = gateway.get_view(id).await;
    assert!(
        matches!(gone, Err(GatewayError::NotFound { .. })),
        "unexpected result: {gone:?}"
    );
}

#[tokio::test]
#[ignore = "requires a running admin server"]
async fn test_duplicate_view_name_is_rejected() {
    skip_if_no_server!("ADMIN_CONSOLE_BASE_URL");
    let gateway = require_some!(common::gateway());

    let name = common::unique_name("dup");
    let id = require_ok!(gateway.save_view(None, &common::view_form(&name)).await);
    let second = gateway.save_view(None, &common::view_form(&name)).await;
    assert!(
        matches!(&second, Err(GatewayError::Validation { errors, .. }) if !errors.is_empty()),
        "unexpected result: {second:?}"
    );
    require_ok!(gateway.delete_view(id).await);
}

#[tokio::test]
#[ignore = "requires a running admin server"]
async fn test_help_and_search() {
    skip_if_no_server!("ADMIN_CONSOLE_BASE_URL");
    let gateway = require_some!(common::gateway());

    let help = require_ok!(gateway.get_help("en", HelpTopic::General).await);
    assert!(!help.html.is_empty());

    let suggestions = require_ok!(gateway.search_content("a").await);
    for suggestion in &suggestions {
        assert!(!suggestion.display_name.is_empty());
    }
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let gateway = require_ok!(admin_console_gateway::create_gateway(
        &admin_console_gateway::GatewayConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            connect_timeout_secs: 1,
            request_timeout_secs: 2,
        }
    ));
    let result = gateway.get_view(1).await;
    assert!(
        matches!(&result, Err(e) if e.is_transport()),
        "unexpected result: {result:?}"
    );
}
