//! Utility modules.

/// Log sanitization helpers: body truncation, value-free field summaries.
pub mod log_sanitizer;
