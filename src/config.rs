//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/tripwise/tripwise.toml`
//! 3. Environment variables: `TRIPWISE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Unified configuration for tripwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Tree file used when no file name is given (default: data dir `tree.txt`)
    pub tree_file: PathBuf,
    /// Save the tree back to `tree_file` after learning a destination
    pub autosave: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tree_file: default_tree_file(),
            autosave: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub tree_file: Option<PathBuf>,
    pub autosave: Option<bool>,
}

/// Get the default tree file (`$XDG_DATA_HOME/tripwise/tree.txt`).
fn default_tree_file() -> PathBuf {
    ProjectDirs::from("", "", "tripwise")
        .map(|dirs| dirs.data_dir().join("tree.txt"))
        .unwrap_or_else(|| PathBuf::from("tree.txt"))
}

/// Get the XDG config directory for tripwise.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tripwise").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("tripwise.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings from the global config location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence, reading `config_file` if it exists.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `config_file` (TOML)
    /// 3. Environment variables: `TRIPWISE_*` prefix
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            tree_file: overlay
                .tree_file
                .clone()
                .unwrap_or_else(|| self.tree_file.clone()),
            autosave: overlay.autosave.unwrap_or(self.autosave),
        }
    }

    /// Apply TRIPWISE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("TRIPWISE").try_parsing(true))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("tree_file") {
            settings.tree_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_bool("autosave") {
            settings.autosave = val;
        }

        Ok(settings)
    }

    /// Expand `~` and `$VAR` in the tree file path.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.tree_file.to_string_lossy().as_ref());
        self.tree_file = PathBuf::from(expanded);
    }

    /// Render as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
