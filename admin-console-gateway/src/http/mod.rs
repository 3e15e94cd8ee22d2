//! reqwest-backed [`DataGateway`](crate::DataGateway) for the `/admin` API.

mod content;
mod data_gateway;
mod help;
mod views;

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};
use crate::http_client::HttpUtils;
use crate::types::{MutationResponse, RecordId};

/// Default connection timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`HttpGateway`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server origin, e.g. `http://localhost:8080`. Paths start at `/admin`.
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// HTTP data gateway.
pub struct HttpGateway {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl HttpGateway {
    /// Build the gateway and its HTTP client.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Transport {
                operation: "createClient".to_string(),
                status: None,
                detail: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and return the classified success body.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        operation: &str,
    ) -> Result<String> {
        let url = self.url(path);
        let mut request: RequestBuilder = self
            .client
            .request(method.clone(), &url)
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let (status, text) =
            HttpUtils::execute_request(request, operation, method.as_str(), &url).await?;
        HttpUtils::classify(status, text, operation, path)
    }

    /// GET a JSON document.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        operation: &str,
    ) -> Result<T> {
        let text = self.send(Method::GET, path, None, operation).await?;
        HttpUtils::parse_json(&text, operation)
    }

    /// Run a mutating request and decode the `{ ok, id?, errors? }` envelope.
    ///
    /// An empty success body counts as `{ ok: true }`.
    pub(crate) async fn mutate<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
        operation: &str,
    ) -> Result<Option<RecordId>> {
        let body = payload
            .map(|p| HttpUtils::to_body(p, operation))
            .transpose()?;
        let text = self.send(method, path, body, operation).await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let envelope: MutationResponse = HttpUtils::parse_json(&text, operation)?;
        if !envelope.ok {
            return Err(GatewayError::Validation {
                operation: operation.to_string(),
                errors: envelope.errors.unwrap_or_default(),
            });
        }
        Ok(envelope.id)
    }
}

/// Path with a URL-encoded query string.
pub(crate) fn with_query(path: &str, params: &[(&str, String)]) -> String {
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_values_are_encoded() {
        let path = with_query("/admin/content", &[("search", "a b&c".to_string())]);
        assert_eq!(path, "/admin/content?search=a%20b%26c");
    }

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let gateway = HttpGateway::new(&GatewayConfig {
            base_url: "http://cms.local/".to_string(),
            ..GatewayConfig::default()
        })
        .unwrap();
        assert_eq!(gateway.url("/admin/views"), "http://cms.local/admin/views");
    }
}
