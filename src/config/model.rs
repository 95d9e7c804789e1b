//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::active::DEFAULT_ACTIVE_CLASS;
use crate::viewport::{
    ArmPolicy, Breakpoint, Environment, Threshold, ViewportDispatcher, DEFAULT_DEBOUNCE,
};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub active: ActiveConfig,
    #[serde(default)]
    pub toggle: ToggleConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Active-element binding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveConfig {
    /// Class applied to the clicked element.
    #[serde(default = "default_active_class")]
    pub class: String,
}

impl Default for ActiveConfig {
    fn default() -> Self {
        Self {
            class: default_active_class(),
        }
    }
}

/// Toggle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleConfig {
    /// Class flipped on the menu button.
    #[serde(default = "default_toggle_class")]
    pub class: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            class: default_toggle_class(),
        }
    }
}

/// Viewport dispatcher settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub arm_policy: ArmPolicy,
    /// Width at or below which the layout goes compact.
    #[serde(default = "default_compact_below")]
    pub compact_below: Threshold,
    /// Pixels per terminal column, for hosts that measure in cells.
    #[serde(default = "default_cell_width")]
    pub cell_width_px: u32,
    /// Pixels per terminal row.
    #[serde(default = "default_cell_height")]
    pub cell_height_px: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            arm_policy: ArmPolicy::default(),
            compact_below: default_compact_below(),
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
        }
    }
}

impl ViewportConfig {
    /// A dispatcher using this debounce window and arm policy.
    pub fn dispatcher(&self, env: Arc<dyn Environment>) -> ViewportDispatcher {
        ViewportDispatcher::new(env)
            .with_debounce(Duration::from_millis(self.debounce_ms))
            .with_arm_policy(self.arm_policy)
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for `viewstate.log`. Logging is off when unset.
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

fn default_active_class() -> String {
    DEFAULT_ACTIVE_CLASS.to_string()
}
fn default_toggle_class() -> String {
    "open".to_string()
}
fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}
fn default_compact_below() -> Threshold {
    Threshold::Named(Breakpoint::Md)
}
fn default_cell_width() -> u32 {
    8
}
fn default_cell_height() -> u32 {
    16
}
fn default_log_level() -> String {
    "info".to_string()
}
