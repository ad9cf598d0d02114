//! TOML configuration for hosts embedding the shadow widget.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::color::Color;
use crate::error::Result;
use crate::style::ShadowStyle;

/// Top-level configuration for a rendering host.
///
/// Every table and field is optional; missing entries take their defaults.
///
/// ```toml
/// [surface]
/// width = 480
/// height = 272
///
/// [shadow]
/// radius = 8
/// offset_x = 6
/// offset_y = 6
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UmbraConfig {
    pub surface: SurfaceConfig,
    pub shadow: ShadowStyle,
}

/// Dimensions and background of the host surface.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 272,
            background: Color::rgb(10, 10, 18),
        }
    }
}

impl UmbraConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
