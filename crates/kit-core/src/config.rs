use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// Settings for the component explorer shell.
///
/// Every field has a default so that a missing or partial `explorer.toml`
/// still produces a usable explorer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellSettings {
    #[serde(default = "default_title")]
    pub title: String,
    /// Theme key, see `kit_ui::theme::Theme::from_key`.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// `tracing` level name: trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_title() -> String {
    "tokenkit explorer".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            theme: default_theme(),
            log_level: default_log_level(),
        }
    }
}

/// Story-level switches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorySettings {
    /// Render slider tooltips in the slider story.
    #[serde(default = "default_true")]
    pub show_tooltips: bool,
    /// Maximum number of entries kept in the action log.
    #[serde(default = "default_action_log_limit")]
    pub action_log_limit: usize,
}

fn default_true() -> bool {
    true
}

fn default_action_log_limit() -> usize {
    50
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            show_tooltips: default_true(),
            action_log_limit: default_action_log_limit(),
        }
    }
}

/// Top-level structure of `explorer.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub explorer: ShellSettings,
    #[serde(default)]
    pub stories: StorySettings,
}

impl ExplorerConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, UiError> {
        Ok(toml::from_str(contents)?)
    }
}
