//! Navigator configuration.
//!
//! [`NavigatorConfig`] is the raw, serde-friendly form: every field has a
//! default, and `mode` stays a string so an unsupported value surfaces as
//! [`NavError::InvalidConfiguration`] at construction rather than as a parse
//! error. [`NavigatorConfig::validate`] turns it into checked [`Options`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, Result};
use crate::input::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP, KeyBindings, KeyCode};

/// Navigation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Nearest neighbour by Manhattan distance.
    #[default]
    Auto,
    /// Previous/next sibling on left/right only.
    Horizontal,
    /// Previous/next sibling on up/down only.
    Vertical,
    /// Row-major grid of a fixed column count.
    Grid,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Auto, Mode::Horizontal, Mode::Vertical, Mode::Grid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| NavError::InvalidConfiguration(format!("Unsupported navigation mode: {s}")))
    }
}

fn default_mode() -> String {
    Mode::Auto.as_str().to_string()
}
fn default_marker() -> String {
    "selected".to_string()
}
fn default_left() -> KeyCode {
    KEY_LEFT
}
fn default_up() -> KeyCode {
    KEY_UP
}
fn default_right() -> KeyCode {
    KEY_RIGHT
}
fn default_down() -> KeyCode {
    KEY_DOWN
}

/// Raw navigator configuration as read from TOML, JSON or code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// One of `auto`, `horizontal`, `vertical`, `grid`.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Marker (class name) applied to the selected element.
    #[serde(
        default = "default_marker",
        alias = "selected_marker_name",
        alias = "selectedMarkerName"
    )]
    pub selected: String,
    #[serde(default = "default_left")]
    pub left: KeyCode,
    #[serde(default = "default_up")]
    pub up: KeyCode,
    #[serde(default = "default_right")]
    pub right: KeyCode,
    #[serde(default = "default_down")]
    pub down: KeyCode,
    /// Grid column count; 0 means detect from the layout.
    #[serde(default, alias = "column_count", alias = "columnCount")]
    pub cols: u32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            selected: default_marker(),
            left: KEY_LEFT,
            up: KEY_UP,
            right: KEY_RIGHT,
            down: KEY_DOWN,
            cols: 0,
        }
    }
}

impl NavigatorConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded navigator config from {}", path.as_ref().display());
        Self::from_toml(&text)
    }

    /// Build a config from a JSON object (the plugin option vocabulary).
    /// `null` yields the defaults.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(Self::deserialize(value)?)
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode.as_str().to_string();
        self
    }

    pub fn with_columns(mut self, cols: u32) -> Self {
        self.cols = cols;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.selected = marker.into();
        self
    }

    pub fn with_keys(mut self, left: KeyCode, up: KeyCode, right: KeyCode, down: KeyCode) -> Self {
        self.left = left;
        self.up = up;
        self.right = right;
        self.down = down;
        self
    }

    /// Check the config and produce typed [`Options`].
    pub fn validate(&self) -> Result<Options> {
        let mode: Mode = self.mode.parse()?;
        if self.selected.trim().is_empty() {
            return Err(NavError::InvalidConfiguration(
                "selected marker name must not be empty".into(),
            ));
        }
        Ok(Options {
            mode,
            marker: self.selected.clone(),
            bindings: KeyBindings::new(self.left, self.up, self.right, self.down),
            columns: self.cols,
        })
    }
}

/// Validated navigator options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub marker: String,
    pub bindings: KeyBindings,
    /// Configured grid columns; 0 means auto-detect.
    pub columns: u32,
}
