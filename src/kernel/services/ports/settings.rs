use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_NOTE_EXTENSION: &str = "md";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder: Option<PathBuf>,
    #[serde(default)]
    pub explorer: ExplorerSettings,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerSettings {
    /// Appended to new file names that have no extension.
    #[serde(default = "default_extension")]
    pub default_extension: String,
}

fn default_extension() -> String {
    DEFAULT_NOTE_EXTENSION.to_string()
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            default_extension: default_extension(),
        }
    }
}

impl ExplorerSettings {
    /// The configured extension without a leading dot; blank falls back to `md`.
    pub fn normalized_extension(&self) -> String {
        let ext = self.default_extension.trim().trim_start_matches('.');
        if ext.is_empty() {
            default_extension()
        } else {
            ext.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_selected_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_selected_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            focus_border: Some("cyan".to_string()),
            inactive_border: Some("dark_gray".to_string()),
            accent_fg: Some("yellow".to_string()),
            header_fg: Some("cyan".to_string()),
            folder_fg: Some("blue".to_string()),
            markdown_fg: Some("green".to_string()),
            selection_bg: Some("dark_gray".to_string()),
            selection_fg: Some("white".to_string()),
            palette_border: Some("cyan".to_string()),
            palette_bg: None,
            palette_fg: Some("white".to_string()),
            palette_selected_bg: Some("dark_gray".to_string()),
            palette_selected_fg: Some("white".to_string()),
            palette_muted_fg: Some("dark_gray".to_string()),
            error_fg: Some("red".to_string()),
            warning_fg: Some("yellow".to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_folder: None,
            explorer: ExplorerSettings::default(),
            keybindings: Vec::new(),
            theme: ThemeSettings::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
