//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/lexicat/lexicat.toml`
//! 3. Environment variables: `LEXICAT_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified" and inherit from the layer below).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub words_per_line: Option<usize>,
    pub data_file: Option<PathBuf>,
}

/// Unified configuration for lexicat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Words per line for category printing (default: 5)
    pub words_per_line: usize,
    /// Default data file used when a load/save prompt is left empty
    pub data_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words_per_line: 5,
            data_file: None,
        }
    }
}

/// Get the XDG config directory for lexicat.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lexicat").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("lexicat.toml"))
}

fn load_raw_settings(path: &std::path::Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if specified,
    /// otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            words_per_line: overlay.words_per_line.unwrap_or(self.words_per_line),
            data_file: overlay.data_file.clone().or_else(|| self.data_file.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/lexicat/lexicat.toml`
    /// 3. Environment variables: `LEXICAT_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply LEXICAT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(Environment::with_prefix("LEXICAT"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_int("words_per_line") {
            settings.words_per_line = val.max(1) as usize;
        }
        if let Ok(val) = config.get_string("data_file") {
            settings.data_file = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# lexicat configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/lexicat/lexicat.toml
#   Env:    LEXICAT_* environment variables (explicit overrides)

# Words per line when printing a category
# words_per_line = 5

# Data file used when a load/save prompt is left empty
# data_file = "~/words.txt"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
