use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::file::is_protected;
use crate::app::infrastructure::error::{PlaygroundError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundSettings {
    /// File focused when the first tab is closed or the last tab goes away.
    /// Must be one of the protected defaults.
    #[serde(default = "default_fallback_file")]
    pub fallback_file: String,

    /// Restore the saved workspace snapshot on startup.
    #[serde(default)]
    pub restore_workspace: bool,

    /// `tracing` filter directive; `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// List pinned files ahead of the rest in the explorer.
    #[serde(default = "default_pinned_first")]
    pub pinned_first: bool,

    /// Tab size in spaces handed to the editor view (default 2)
    #[serde(default = "default_tab_size")]
    pub tab_size: u32,
}

fn default_fallback_file() -> String {
    "index.html".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_pinned_first() -> bool {
    true
}

fn default_tab_size() -> u32 {
    2
}

impl Default for PlaygroundSettings {
    fn default() -> Self {
        Self {
            fallback_file: default_fallback_file(),
            restore_workspace: false,
            log_filter: default_log_filter(),
            pinned_first: default_pinned_first(),
            tab_size: default_tab_size(),
        }
    }
}

impl PlaygroundSettings {
    /// The configured fallback, or `index.html` if the configured one is
    /// not a protected default (it could otherwise be deleted).
    pub fn effective_fallback(&self) -> &str {
        if is_protected(&self.fallback_file) {
            &self.fallback_file
        } else {
            tracing::warn!(fallback = %self.fallback_file, "fallback file is not a default, using index.html");
            "index.html"
        }
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if config_path.exists() {
            Self::load_from(&config_path).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to parse settings, using defaults");
                Self::default()
            })
        } else {
            let default = Self::default();
            // Try to save defaults for next time
            if let Err(e) = default.save() {
                tracing::debug!(error = %e, "could not write default settings");
            }
            default
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| PlaygroundError::Settings(format!("{}: {}", path.display(), e)))
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("playpad");
        path.push("settings.json");
        path
    }
}
