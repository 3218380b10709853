//! The portable theme file format.
//!
//! A theme file is a JSON object with camelCase keys:
//!
//! ```json
//! {
//!   "themeName": "Ocean",
//!   "modifiedAt": "2024-03-01T12:00:00.000Z",
//!   "colorFormat": "hex",
//!   "usesPrefix": false,
//!   "themePrefix": "",
//!   "palettes": [
//!     {
//!       "id": "b0c1",
//!       "propName": "brand",
//!       "displayName": "Brand",
//!       "componentColor": "primary",
//!       "colors": [
//!         { "propName": "brandPrimary", "cssVarName": "--brand-primary",
//!           "displayName": "Brand Primary", "value": "#0077be" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! These types carry raw color text only. Validation happens in
//! [`import_theme`](crate::import_theme), which turns a [`ThemeFile`] into a
//! [`UserTheme`](crate::UserTheme).
//!
//! YAML with the same keys is accepted when reading, for hand-written themes.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// How colors are written when a theme is exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl ColorFormat {
    /// All formats, in file-format order.
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsl];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ColorFormat::ALL
            .into_iter()
            .find(|format| s.eq_ignore_ascii_case(format.as_str()))
            .ok_or_else(|| format!("unknown color format '{}' (expected hex, rgb or hsl)", s))
    }
}

/// On-file form of a theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeFile {
    pub theme_name: String,
    #[serde(default)]
    pub modified_at: String,
    #[serde(default)]
    pub color_format: ColorFormat,
    #[serde(default)]
    pub uses_prefix: bool,
    #[serde(default)]
    pub theme_prefix: String,
    #[serde(default)]
    pub palettes: Vec<PaletteFile>,
}

/// On-file form of a palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteFile {
    pub id: String,
    #[serde(default)]
    pub prop_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub component_color: String,
    #[serde(default)]
    pub colors: Vec<ColorEntry>,
}

/// On-file form of one color: names plus raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop_name: Option<String>,
    #[serde(default)]
    pub css_var_name: String,
    #[serde(default)]
    pub display_name: String,
    pub value: String,
}

/// Serialization format of a theme file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Picks the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(FileFormat::Json),
            "yaml" | "yml" => Some(FileFormat::Yaml),
            _ => None,
        }
    }
}

impl ThemeFile {
    /// Parses a theme from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a theme from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses theme text in the given format.
    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        match format {
            FileFormat::Json => Self::from_json(content),
            FileFormat::Yaml => Self::from_yaml(content),
        }
    }

    /// Reads a theme file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnsupportedFormat`] for unknown extensions, otherwise
    /// I/O or (de)serialization errors.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path).ok_or_else(|| ThemeError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    /// Compact JSON, the form written by [`save_theme`](crate::save_theme).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON for display.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of colors across all palettes.
    pub fn color_count(&self) -> usize {
        self.palettes.iter().map(|p| p.colors.len()).sum()
    }
}
