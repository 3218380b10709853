//! Error types for theme loading, import and saving.
//!
//! Name conversion never fails (it returns an empty string instead), so the
//! only typed errors in this crate come from color parsing, theme import and
//! file handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::color::ColorParseError;

/// Error returned when a theme file cannot be imported.
///
/// Import is all-or-nothing: the first color that fails to parse aborts the
/// whole theme, and the error names that color's raw value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    /// A color value in the file is not a valid CSS color.
    #[error("Unable to parse \"{value}\" as a valid CSS color value")]
    InvalidColor {
        /// The raw value as written in the file.
        value: String,
        /// Id of the palette containing the color.
        palette: String,
        /// Underlying parser failure.
        #[source]
        source: ColorParseError,
    },
}

impl ImportError {
    /// Returns the raw color value that failed to parse.
    pub fn value(&self) -> &str {
        match self {
            ImportError::InvalidColor { value, .. } => value,
        }
    }
}

/// Error type for reading, importing and saving theme files.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme's colors did not validate.
    #[error(transparent)]
    Import(#[from] ImportError),

    /// JSON (de)serialization failure.
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization failure.
    #[error("invalid theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not map to a known theme format.
    #[error("unsupported theme file extension: {}", path.display())]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },

    /// I/O error while reading or writing a theme file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for theme file operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
