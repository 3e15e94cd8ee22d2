//! Settings file
//!
//! ```toml
//! language = "fr-FR"
//!
//! [gateway]
//! base_url = "http://localhost:8080"
//! request_timeout_secs = 30
//!
//! [controller]
//! locale = "fr"
//! default_items_per_page = 25
//! search_debounce_ms = 300
//! ```
//!
//! Every key is optional. Without `--config` the file is looked up in the
//! user config directory and a missing file means defaults.

use std::path::{Path, PathBuf};

use admin_console_core::ControllerConfig;
use admin_console_gateway::GatewayConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::i18n::Language;

const APP_DIR: &str = "admin-console";
const FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("Invalid controller settings: {0}")]
    Controller(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// UI language code (`en-US`, `fr-FR`, or the short forms).
    pub language: String,
    pub gateway: GatewayConfig,
    pub controller: ControllerConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            gateway: GatewayConfig::default(),
            controller: ControllerConfig::default(),
        }
    }
}

impl AppSettings {
    /// `<config dir>/admin-console/config.toml`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
    }

    /// Load `path`, or the default location when `None`.
    ///
    /// An explicit path must exist; the default one may not.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => {
                    tracing::debug!("No config directory, using default settings");
                    return Ok(Self::default());
                }
            },
        };

        if !required && !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Loaded settings from {}", path.display());
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text)?;
        settings.language()?;
        settings
            .controller
            .validate()
            .map_err(|e| SettingsError::Controller(e.to_string()))?;
        Ok(settings)
    }

    pub fn language(&self) -> Result<Language, SettingsError> {
        Language::from_code(self.language.trim())
            .ok_or_else(|| SettingsError::UnknownLanguage(self.language.clone()))
    }
}
