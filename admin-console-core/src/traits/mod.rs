//! Seams of the controller: data access and rendering.

mod screen_renderer;

pub use screen_renderer::{BindingToken, Handler, ScreenRenderer};

// Re-export the gateway trait
pub use admin_console_gateway::DataGateway;
