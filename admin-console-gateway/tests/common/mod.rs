//! Shared helpers for the live-server tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::env;
use std::sync::Arc;

use admin_console_gateway::{ContentForm, DataGateway, GatewayConfig, ViewForm, create_gateway};

/// Skip the test when an environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_server {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: environment variable {} is not set", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
///
/// Only the error is formatted; the `Ok` type need not be `Debug`.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {:?}", res.as_ref().err());
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {:?}",
            format_args!($($msg)+),
            res.as_ref().err()
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Gateway pointed at `ADMIN_CONSOLE_BASE_URL`.
pub fn gateway() -> Option<Arc<dyn DataGateway>> {
    let base_url = env::var("ADMIN_CONSOLE_BASE_URL").ok()?;
    create_gateway(&GatewayConfig {
        base_url,
        ..GatewayConfig::default()
    })
    .ok()
}

/// Name unlikely to clash with existing records.
pub fn unique_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("{prefix}-test-{nanos:08x}")
}

pub fn view_form(name: &str) -> ViewForm {
    ViewForm {
        name: name.to_string(),
        title: format!("Test view {name}"),
        description: "Created by the gateway integration tests".to_string(),
        contents: Vec::new(),
    }
}

pub fn content_form(name: &str) -> ContentForm {
    let mut fields = BTreeMap::new();
    fields.insert("body".to_string(), "integration test body".to_string());
    ContentForm {
        name: name.to_string(),
        content_type: "paragraph".to_string(),
        fields,
    }
}
