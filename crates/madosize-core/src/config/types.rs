//! Configuration type definitions.
//!
//! Every field is optional so that a project config only overrides what it
//! names; the accessors on [`MadoConfig`] fill in defaults.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::display::DisplayFallback;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MadoConfig {
    #[serde(default)]
    pub accessibility: AccessibilityConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Accessibility layer settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccessibilityConfig {
    /// Upper bound in seconds for each blocking accessibility call.
    /// Default: 1.0 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_timeout_secs: Option<f32>,
}

/// Owning-display selection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    /// Display chosen for a window that overlaps none: "first" or "nearest".
    /// Default: "first".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<DisplayFallback>,
}

/// CLI output settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Print JSON instead of human-readable text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

impl MadoConfig {
    pub fn messaging_timeout_secs(&self) -> f32 {
        self.accessibility
            .messaging_timeout_secs
            .unwrap_or_else(defaults::default_messaging_timeout_secs)
    }

    pub fn display_fallback(&self) -> DisplayFallback {
        self.display.fallback.unwrap_or_default()
    }

    pub fn json_output(&self) -> bool {
        self.output.json.unwrap_or(false)
    }
}
