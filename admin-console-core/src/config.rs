//! Controller settings.

use std::time::Duration;

use admin_console_gateway::PaginationRequest;
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};

/// Settings of a [`ScreenController`](crate::ScreenController).
///
/// Every field has a default, so a partial TOML table is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Locale used for help fragments.
    pub locale: String,
    pub default_items_per_page: u32,
    pub max_items_per_page: u32,
    /// Quiet period before a search-as-you-type request is sent.
    pub search_debounce_ms: u64,
    /// Shorter terms (after trimming) clear results instead of searching.
    pub min_search_len: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            default_items_per_page: 10,
            max_items_per_page: 100,
            search_debounce_ms: 300,
            min_search_len: 1,
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.max_items_per_page == 0 {
            return Err(ConsoleError::Config(
                "max_items_per_page must be positive".to_string(),
            ));
        }
        if self.default_items_per_page == 0 || self.default_items_per_page > self.max_items_per_page
        {
            return Err(ConsoleError::Config(format!(
                "default_items_per_page must be within 1..={}",
                self.max_items_per_page
            )));
        }
        if self.locale.trim().is_empty() {
            return Err(ConsoleError::Config("locale must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// First page with the configured page size.
    pub fn first_page(&self) -> PaginationRequest {
        PaginationRequest::new(1, self.default_items_per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ControllerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.first_page(), PaginationRequest::new(1, 10));
        assert_eq!(config.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn partial_table_keeps_defaults() {
        let config: ControllerConfig =
            serde_json::from_str(r#"{"locale":"fr","search_debounce_ms":50}"#).unwrap();
        assert_eq!(config.locale, "fr");
        assert_eq!(config.search_debounce_ms, 50);
        assert_eq!(config.max_items_per_page, 100);
    }

    #[test]
    fn page_size_above_max_is_rejected() {
        let config = ControllerConfig {
            default_items_per_page: 500,
            ..ControllerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConsoleError::Config(_))));
    }
}
