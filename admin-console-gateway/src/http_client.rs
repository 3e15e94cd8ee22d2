//! Generic HTTP client tools
//!
//! Shared request/response handling for the `/admin` endpoints: sending,
//! logging, status classification and body decoding. Every endpoint builds
//! its own `RequestBuilder` and hands it over here.

use std::collections::BTreeMap;

use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{GatewayError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// `{ errors: {...} }` shape used to tell validation failures apart.
#[derive(Debug, Deserialize)]
struct ErrorsBody {
    errors: BTreeMap<String, String>,
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `operation` - operation name, used in logs and errors
    /// * `method_name` - HTTP method, used in logs
    /// * `url` - request URL, used in logs
    pub async fn execute_request(
        request_builder: RequestBuilder,
        operation: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{operation}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    operation: operation.to_string(),
                    detail: e.to_string(),
                }
            } else {
                GatewayError::Transport {
                    operation: operation.to_string(),
                    status: None,
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{operation}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    operation: operation.to_string(),
                    detail: e.to_string(),
                }
            } else {
                GatewayError::Transport {
                    operation: operation.to_string(),
                    status: Some(status_code),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{operation}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Turn a status code and body into the success body or a tagged error.
    ///
    /// - 2xx: the body, unless it is `{ ok: false, errors }`
    /// - 404: [`GatewayError::NotFound`]
    /// - other non-2xx carrying an `errors` map: [`GatewayError::Validation`]
    /// - anything else: [`GatewayError::Transport`]
    pub fn classify(
        status_code: u16,
        response_text: String,
        operation: &str,
        resource: &str,
    ) -> Result<String> {
        if (200..300).contains(&status_code) {
            if let Some(errors) = rejected_fields(&response_text) {
                log::warn!("[{operation}] Server rejected {} field(s)", errors.len());
                return Err(GatewayError::Validation {
                    operation: operation.to_string(),
                    errors,
                });
            }
            return Ok(response_text);
        }

        if status_code == 404 {
            log::warn!("[{operation}] {resource} not found");
            return Err(GatewayError::NotFound {
                operation: operation.to_string(),
                resource: resource.to_string(),
            });
        }

        if let Ok(body) = serde_json::from_str::<ErrorsBody>(&response_text) {
            log::warn!(
                "[{operation}] Validation failed (HTTP {status_code}): {} field(s)",
                body.errors.len()
            );
            return Err(GatewayError::Validation {
                operation: operation.to_string(),
                errors: body.errors,
            });
        }

        log::error!("[{operation}] Server error (HTTP {status_code})");
        Err(GatewayError::Transport {
            operation: operation.to_string(),
            status: Some(status_code),
            detail: truncate_for_log(&response_text),
        })
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(GatewayError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str, operation: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{operation}] JSON parse failed: {e}");
            log::error!(
                "[{operation}] Raw response: {}",
                truncate_for_log(response_text)
            );
            GatewayError::Parse {
                operation: operation.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Encode a request body.
    pub fn to_body<T: serde::Serialize + ?Sized>(payload: &T, operation: &str) -> Result<String> {
        serde_json::to_string(payload).map_err(|e| GatewayError::Serialization {
            operation: operation.to_string(),
            detail: e.to_string(),
        })
    }
}

/// Field errors of a `{ ok: false, errors }` body. `None` for anything else.
fn rejected_fields(response_text: &str) -> Option<BTreeMap<String, String>> {
    #[derive(Deserialize)]
    struct Rejected {
        ok: bool,
        #[serde(default)]
        errors: BTreeMap<String, String>,
    }

    let body: Rejected = serde_json::from_str(response_text).ok()?;
    (!body.ok).then_some(body.errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- classify ----

    #[test]
    fn success_body_passes_through() {
        let result = HttpUtils::classify(200, r#"{"ok":true,"id":3}"#.into(), "saveView", "/v");
        assert_eq!(result.as_deref(), Ok(r#"{"ok":true,"id":3}"#));
    }

    #[test]
    fn ok_false_is_validation_even_with_200() {
        let result = HttpUtils::classify(
            200,
            r#"{"ok":false,"errors":{"name":"taken"}}"#.into(),
            "saveView",
            "/admin/views",
        );
        match result {
            Err(GatewayError::Validation { errors, .. }) => {
                assert_eq!(errors.get("name").map(String::as_str), Some("taken"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn not_found_status() {
        let result = HttpUtils::classify(404, String::new(), "getView", "/admin/views/9");
        assert!(
            matches!(&result, Err(GatewayError::NotFound { resource, .. }) if resource == "/admin/views/9"),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn unprocessable_with_errors_is_validation() {
        let result = HttpUtils::classify(
            422,
            r#"{"errors":{"title":"required"}}"#.into(),
            "saveView",
            "/admin/views/7",
        );
        assert!(matches!(result, Err(GatewayError::Validation { .. })));
    }

    #[test]
    fn server_error_is_transport() {
        let result = HttpUtils::classify(500, "<html>boom</html>".into(), "listViews", "/x");
        assert!(
            matches!(&result, Err(GatewayError::Transport { status: Some(500), .. })),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn bad_request_without_errors_is_transport() {
        let result = HttpUtils::classify(400, r#"{"message":"bad"}"#.into(), "listViews", "/x");
        assert!(matches!(result, Err(GatewayError::Transport { .. })));
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(GatewayError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
