//! Swatchbook - theme palettes with consistent color naming.
//!
//! A theme is a list of palettes, each an ordered list of colors. Every color
//! is known by three names that must stay in sync, plus a CSS color value.
//! Swatchbook provides:
//!
//! - A fail-soft name converter between prop names, CSS variable names and
//!   display names ([`names`])
//! - A CSS color value parser and renderer ([`color`])
//! - Import and export of JSON theme files, with all-or-nothing validation
//!   ([`import_theme`], [`export_theme`])
//! - CSS custom property output ([`render_theme_as_css`])
//! - An editor state container driven by operations ([`editor`])
//! - Saving themes through a pluggable sink ([`save_theme`])
//!
//! # Quick Start
//!
//! ```rust
//! use swatchbook::{import_theme, render_theme_as_css, ThemeFile};
//!
//! let file = ThemeFile::from_json(r##"{
//!     "themeName": "Ocean",
//!     "colorFormat": "hex",
//!     "palettes": [{
//!         "id": "p1",
//!         "propName": "brand",
//!         "displayName": "Brand",
//!         "componentColor": "primary",
//!         "colors": [
//!             { "propName": "deepSea", "cssVarName": "--deep-sea",
//!               "displayName": "Deep Sea", "value": "rgb(0, 105, 148)" },
//!             { "propName": "foam", "cssVarName": "--foam",
//!               "displayName": "Foam", "value": "white" }
//!         ]
//!     }]
//! }"##).unwrap();
//!
//! let theme = import_theme(file).unwrap();
//! assert_eq!(
//!     render_theme_as_css(Some(&theme), false),
//!     "--deep-sea: #006994; --foam: #ffffff"
//! );
//! ```
//!
//! # Naming
//!
//! | Convention | Example |
//! |------------|---------|
//! | prop name | `deepSea` |
//! | CSS variable name | `--deep-sea` |
//! | display name | `Deep Sea` |
//!
//! Conversions that do not apply (invalid or empty input) return `""`
//! rather than an error. See [`names`] for the prefix rules.
//!
//! # Errors
//!
//! Import fails on the first color value that does not parse, with
//! [`ImportError::InvalidColor`]. File-level operations return
//! [`ThemeError`].

pub mod color;
mod codec;
pub mod editor;
mod error;
pub mod names;
pub mod sink;
pub mod theme;
mod util;

pub use codec::{
    export_theme, import_theme, import_theme_with, load_theme, render_color, render_color_css,
    render_theme_as_css,
};
pub use color::{ColorKeyword, ColorParseError, ColorValueParser, CssColor, CssColorParser};
pub use editor::{EditorOp, EditorState};
pub use error::{ImportError, Result, ThemeError};
pub use names::{derive_names, ColorNames, NameSource, PrefixConfig};
pub use sink::{save_theme, theme_filename, DirectorySink, MemorySink, ThemeSink};
pub use theme::{
    ColorEntry, ColorFormat, ColorPalette, FileFormat, PaletteFile, ThemeColor,
    ThemeColorShallowCopy, ThemeFile, UserTheme,
};
pub use util::{capitalize, slugify};
