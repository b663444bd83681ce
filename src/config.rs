//! Highlight configuration persistence
//!
//! Stored in `~/.config/auto-highlight/config.yaml`. Keys use the host
//! option names (`highlightSelection`, ...).

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Auto-highlight options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    /// Keep the engine running and react to cursor moves
    #[serde(default = "default_highlight_selection")]
    pub highlight_selection: bool,

    /// Shorter candidates (in characters) are never toggled
    #[serde(default = "default_minimum_length")]
    pub highlight_selection_minimum_length: usize,

    /// Toggles allowed before the whole set is reset
    #[serde(default = "default_max_number_of_word")]
    pub highlight_selection_max_number_of_word: usize,
}

fn default_highlight_selection() -> bool {
    true
}

fn default_minimum_length() -> usize {
    2
}

fn default_max_number_of_word() -> usize {
    2
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            highlight_selection: default_highlight_selection(),
            highlight_selection_minimum_length: default_minimum_length(),
            highlight_selection_max_number_of_word: default_max_number_of_word(),
        }
    }
}

impl HighlightConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp numeric options to their minimum of 1
    pub fn sanitized(mut self) -> Self {
        if self.highlight_selection_minimum_length == 0 {
            tracing::warn!("highlightSelectionMinimumLength must be at least 1, using 1");
            self.highlight_selection_minimum_length = 1;
        }
        if self.highlight_selection_max_number_of_word == 0 {
            tracing::warn!("highlightSelectionMaxNumberOfWord must be at least 1, using 1");
            self.highlight_selection_max_number_of_word = 1;
        }
        self
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
