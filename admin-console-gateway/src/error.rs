use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name → message, as reported by the server or the local validator.
pub type FieldErrors = BTreeMap<String, String>;

/// Unified error type for all gateway operations.
///
/// Each variant carries the `operation` that produced it (`"listViews"`,
/// `"saveContent"`, ...) plus variant-specific context. Errors are values:
/// every gateway call returns [`Result<T, GatewayError>`](Result) and callers
/// match on the variant instead of relying on an implicit error channel.
///
/// # Transport errors
///
/// [`Transport`](Self::Transport), [`Timeout`](Self::Timeout) and
/// [`Parse`](Self::Parse) are grouped as transport failures by
/// [`is_transport`](Self::is_transport). They are never retried by the
/// gateway itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum GatewayError {
    /// Network failure or an unexpected server error (5xx, non-JSON 4xx, ...).
    Transport {
        /// Operation that produced the error.
        operation: String,
        /// HTTP status, when a response was received.
        status: Option<u16>,
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    Timeout {
        /// Operation that produced the error.
        operation: String,
        /// Error details.
        detail: String,
    },

    /// The server rejected the payload with field-level messages.
    Validation {
        /// Operation that produced the error.
        operation: String,
        /// Field name → message.
        errors: FieldErrors,
    },

    /// The addressed record no longer exists.
    NotFound {
        /// Operation that produced the error.
        operation: String,
        /// Resource path or id that was not found.
        resource: String,
    },

    /// The response body could not be decoded.
    Parse {
        /// Operation that produced the error.
        operation: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The request body could not be encoded.
    Serialization {
        /// Operation that produced the error.
        operation: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl GatewayError {
    /// Whether the failure is expected behavior (user input, deleted record),
    /// used to pick the log level.
    ///
    /// `true` logs at `warn`, `false` at `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::NotFound { .. })
    }

    /// Whether the failure belongs to the transport class surfaced as a notice.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::Parse { .. } | Self::Serialization { .. }
        )
    }

    /// Name of the operation that failed.
    pub fn operation(&self) -> &str {
        match self {
            Self::Transport { operation, .. }
            | Self::Timeout { operation, .. }
            | Self::Validation { operation, .. }
            | Self::NotFound { operation, .. }
            | Self::Parse { operation, .. }
            | Self::Serialization { operation, .. } => operation,
        }
    }

    /// Field errors of a server-side validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport {
                operation,
                status,
                detail,
            } => {
                if let Some(status) = status {
                    write!(f, "[{operation}] Server error (HTTP {status}): {detail}")
                } else {
                    write!(f, "[{operation}] Network error: {detail}")
                }
            }
            Self::Timeout { operation, detail } => {
                write!(f, "[{operation}] Request timeout: {detail}")
            }
            Self::Validation { operation, errors } => {
                let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
                write!(f, "[{operation}] Rejected fields: {}", fields.join(", "))
            }
            Self::NotFound {
                operation,
                resource,
            } => {
                write!(f, "[{operation}] '{resource}' not found")
            }
            Self::Parse { operation, detail } => {
                write!(f, "[{operation}] Parse error: {detail}")
            }
            Self::Serialization { operation, detail } => {
                write!(f, "[{operation}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for GatewayError {}

/// Convenience type alias for `Result<T, GatewayError>`.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = GatewayError::Transport {
            operation: "listViews".to_string(),
            status: None,
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[listViews] Network error: connection refused");
    }

    #[test]
    fn display_server_error() {
        let e = GatewayError::Transport {
            operation: "getView".to_string(),
            status: Some(502),
            detail: "bad gateway".to_string(),
        };
        assert_eq!(e.to_string(), "[getView] Server error (HTTP 502): bad gateway");
    }

    #[test]
    fn display_validation_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("name".to_string(), "already used".to_string());
        errors.insert("title".to_string(), "too long".to_string());
        let e = GatewayError::Validation {
            operation: "saveView".to_string(),
            errors,
        };
        assert_eq!(e.to_string(), "[saveView] Rejected fields: name, title");
    }

    #[test]
    fn display_not_found() {
        let e = GatewayError::NotFound {
            operation: "getContent".to_string(),
            resource: "/admin/content/9".to_string(),
        };
        assert_eq!(e.to_string(), "[getContent] '/admin/content/9' not found");
    }

    #[test]
    fn classification() {
        let timeout = GatewayError::Timeout {
            operation: "x".into(),
            detail: "slow".into(),
        };
        assert!(timeout.is_transport());
        assert!(!timeout.is_expected());

        let missing = GatewayError::NotFound {
            operation: "x".into(),
            resource: "1".into(),
        };
        assert!(missing.is_expected());
        assert!(!missing.is_transport());
        assert!(missing.field_errors().is_none());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = GatewayError::Parse {
            operation: "getHelp".into(),
            detail: "eof".into(),
        };
        let value = serde_json::to_value(&e).unwrap();
        assert_eq!(value["code"], "Parse");
        assert_eq!(value["operation"], "getHelp");
    }
}
