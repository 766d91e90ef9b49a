//! Configuration file support for the mask tool.
//!
//! This module provides serialization and deserialization of tool settings,
//! allowing users to export and import their configuration as JSON.

use serde::{Deserialize, Serialize};

use crate::accumulator::Sign;
use crate::keybindings::KeyBindings;
use crate::labeling::Connectivity;

/// Log level setting for the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Drawing mode active when the tool starts
    #[serde(default)]
    pub default_sign: Sign,

    /// Pixel adjacency used for connected-component labeling
    #[serde(default)]
    pub connectivity: Connectivity,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Default folder for mask exports
    #[serde(default)]
    pub export_folder: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_sign: Sign::default(),
            connectivity: Connectivity::default(),
            log_level: LogLevel::default(),
            export_folder: String::new(),
        }
    }
}

/// Tool configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,

    /// Keybinding configuration
    #[serde(default)]
    pub keybindings: KeyBindings,
}

fn default_app_name() -> String {
    "rmask".to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: Preferences::default(),
            keybindings: KeyBindings::default(),
        }
    }
}

impl ToolConfig {
    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a configuration from JSON.
    ///
    /// Missing sections fall back to their defaults, so configs written by
    /// older builds keep loading.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json_round_trip() {
        let mut config = ToolConfig::default();
        config.preferences.default_sign = Sign::Subtract;
        config.preferences.connectivity = Connectivity::Eight;
        config.keybindings.undo = 'u';

        let json = config.to_json().unwrap();
        let restored = ToolConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = ToolConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(config.app_name, "rmask");
        assert_eq!(config.preferences, Preferences::default());
        assert_eq!(config.keybindings, KeyBindings::default());
    }

    #[test]
    fn test_log_level_maps_to_level_filter() {
        assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_sign_serializes_lowercase() {
        let json = serde_json::to_string(&Sign::Subtract).unwrap();
        assert_eq!(json, "\"subtract\"");
    }
}
