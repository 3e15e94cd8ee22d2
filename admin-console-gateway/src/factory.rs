//! Gateway factory.

use std::sync::Arc;

use crate::error::Result;
use crate::http::{GatewayConfig, HttpGateway};
use crate::traits::DataGateway;

/// Creates the HTTP [`DataGateway`] for the given settings.
///
/// The gateway is wrapped in `Arc<dyn DataGateway>` so it can be shared with
/// the tasks the controller spawns for each request.
///
/// # Examples
///
/// ```rust,no_run
/// use admin_console_gateway::{create_gateway, GatewayConfig};
///
/// let gateway = create_gateway(&GatewayConfig {
///     base_url: "http://localhost:8080".to_string(),
///     ..GatewayConfig::default()
/// }).unwrap();
/// assert_eq!(gateway.id(), "http");
/// ```
pub fn create_gateway(config: &GatewayConfig) -> Result<Arc<dyn DataGateway>> {
    log::debug!("Creating HTTP gateway for {}", config.base_url);
    Ok(Arc::new(HttpGateway::new(config)?))
}
