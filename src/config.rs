//! Render configuration loaded from TOML
//!
//! Every field is optional; missing values fall back to the defaults.
//!
//! ```toml
//! layout = "ansi"
//!
//! [grid]
//! cell_width = 48
//! cell_height = 48
//! key_size = 44
//! left_margin = 2
//! top_margin = 15
//!
//! [export]
//! width = 650
//! height = 200
//! stroke_width = 3
//! svg_stroke = "black"
//! png_background = "black"
//! png_stroke = "white"
//! png_scale = 2
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::keyboard::{self, Layout, DEFAULT_LAYOUT};
use crate::renderer::{ExportConfig, GridConfig};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Name of the keyboard layout
    pub layout: String,
    /// Key grid geometry
    pub grid: GridConfig,
    /// SVG and PNG output settings
    pub export: ExportConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.to_string(),
            grid: GridConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout name
    pub fn with_layout(mut self, name: impl Into<String>) -> Self {
        self.layout = name.into();
        self
    }

    /// Set the grid configuration
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Set the export configuration
    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Resolve the configured layout name
    pub fn layout(&self) -> Result<&'static Layout, ConfigError> {
        keyboard::layout(&self.layout).ok_or_else(|| ConfigError::unknown_layout(&self.layout))
    }
}

impl FromStr for RenderConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}
