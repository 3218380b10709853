//! Saving themes as downloadable JSON files.
//!
//! [`save_theme`] stamps the theme, exports it and hands the bytes to a
//! [`ThemeSink`], which decides where they end up. Two sinks ship with the
//! crate:
//!
//! - [`DirectorySink`] writes `<slug>.json` into a directory.
//! - [`MemorySink`] keeps the last payload in memory.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::codec::export_theme;
use crate::error::Result;
use crate::theme::UserTheme;
use crate::util::slugify;

/// File stem used when a theme name has no usable characters.
const FALLBACK_STEM: &str = "theme";

/// Destination for exported theme bytes.
pub trait ThemeSink {
    /// Stores one file.
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes files into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// The directory must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ThemeSink for DirectorySink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<()> {
        let path = self.dir.join(filename);
        std::fs::write(&path, bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote theme file");
        Ok(())
    }
}

/// Keeps the most recent file in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored payload as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

impl ThemeSink for MemorySink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<()> {
        self.filename = Some(filename.to_string());
        self.bytes = bytes.to_vec();
        Ok(())
    }
}

/// File name a theme is saved under: its slug plus `.json`.
///
/// ```rust
/// use swatchbook::{theme_filename, UserTheme};
///
/// assert_eq!(theme_filename(&UserTheme::blank("Ocean Breeze")), "ocean-breeze.json");
/// assert_eq!(theme_filename(&UserTheme::blank("!!!")), "theme.json");
/// ```
pub fn theme_filename(theme: &UserTheme) -> String {
    let slug = slugify(&theme.theme_name);
    let stem = if slug.is_empty() { FALLBACK_STEM } else { &slug };
    format!("{}.json", stem)
}

/// Stamps `modified_at`, exports the theme as compact JSON and stores it.
///
/// Returns the file name used.
pub fn save_theme<S>(theme: &mut UserTheme, sink: &mut S) -> Result<String>
where
    S: ThemeSink + ?Sized,
{
    theme.modified_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let json = export_theme(theme).to_json()?;
    let filename = theme_filename(theme);
    debug!(theme = %theme.theme_name, file = %filename, "saving theme");
    sink.save(&filename, json.as_bytes())?;
    Ok(filename)
}
