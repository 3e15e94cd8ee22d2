//! # admin-console-gateway
//!
//! Data access layer of the admin console: record types for views and
//! content, the [`DataGateway`] trait the controller talks to, and an HTTP
//! implementation for the `/admin` resource API.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | `list_views` | GET | `/admin/views?page&itemsPerPage` |
//! | `get_view` | GET | `/admin/views/{id}` |
//! | `save_view` | POST / PUT | `/admin/views[/{id}]` |
//! | `delete_view` | DELETE | `/admin/views/{id}` |
//! | `search_views` | GET | `/admin/views?search=term` |
//! | `list_content` | GET | `/admin/content?page&itemsPerPage` |
//! | `get_content` | GET | `/admin/content/{id}` |
//! | `save_content` | POST / PUT | `/admin/content[/{id}]` |
//! | `delete_content` | DELETE | `/admin/content/{id}` |
//! | `search_content` | GET | `/admin/content?search=term` |
//! | `detach_content` | DELETE | `/admin/views/{viewId}/content` |
//! | `attach_content` | POST | `/admin/views/{viewId}/content` |
//! | `get_help` | GET | `/admin/help/{locale}/{topic}` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use admin_console_gateway::{create_gateway, GatewayConfig, PaginationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = create_gateway(&GatewayConfig::default())?;
//!
//!     let page = gateway.list_views(&PaginationRequest::new(1, 10)).await?;
//!     for view in &page.items {
//!         println!("{} ({})", view.title, view.name);
//!     }
//!     println!(
//!         "page {}/{}",
//!         page.pagination.page, page.pagination.number_of_pages
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, GatewayError>`](GatewayError):
//!
//! - [`GatewayError::Validation`]: the server rejected fields of a payload
//! - [`GatewayError::NotFound`]: the record does not exist
//! - [`GatewayError::Transport`] / [`GatewayError::Timeout`]: network or server failure
//!
//! Nothing is retried automatically.

mod error;
mod factory;
mod http;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{FieldErrors, GatewayError, Result};

// Re-export factory functions
pub use factory::create_gateway;

// Re-export the HTTP implementation
pub use http::{GatewayConfig, HttpGateway};

// Re-export core trait
pub use traits::DataGateway;

// Re-export types
pub use types::{
    ContentForm, ContentRecord, ContentRef, HelpText, HelpTopic, ListPage, PaginationRequest,
    PaginationState, RecordId, ViewForm, ViewRecord,
};
