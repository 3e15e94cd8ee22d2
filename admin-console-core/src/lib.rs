//! Admin Console Core Library
//!
//! Controller layer of the admin console:
//! - screen state machine and navigation ([`ScreenController`])
//! - local form validation driven by field descriptors ([`FormValidator`])
//! - the rendering contract every front end implements ([`ScreenRenderer`])
//!
//! Data access goes through [`DataGateway`] (see `admin-console-gateway`).
//! The crate never touches a document directly: renderers hand out region
//! handles and binding tokens, and the controller passes them back.

pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod traits;
pub mod types;
pub mod validator;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use config::ControllerConfig;
pub use controller::{
    Completion, ControllerEvent, Intent, Outcome, RequestSlot, RequestTag, ScreenController,
    SearchChannel,
};
pub use error::{ConsoleError, ConsoleResult};
pub use forms::FormSnapshot;
pub use traits::{BindingToken, DataGateway, Handler, ScreenRenderer};
pub use validator::{FieldDescriptor, FieldKind, FormValidator, ValidationReport};
