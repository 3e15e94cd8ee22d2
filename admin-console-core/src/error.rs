//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use admin_console_gateway::GatewayError;

/// Console layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ConsoleError {
    /// Data gateway error
    #[error("{0}")]
    Gateway(#[from] GatewayError),

    /// A form could not be built or extended
    #[error("Invalid form: {0}")]
    InvalidForm(String),

    /// Controller settings out of range
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Whether it is expected behavior (user input, deleted record) rather than a fault.
    ///
    /// `true` logs at `warn`, `false` at `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidForm(_) => true,
            Self::Gateway(e) => e.is_expected(),
            Self::Config(_) => false,
        }
    }

    /// Log the error at the level its kind calls for.
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Console layer Result type alias
pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;
