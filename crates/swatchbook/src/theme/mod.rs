//! Theme data: the on-disk file form and the validated in-memory form.
//!
//! - [`file`]: serde types mirroring the JSON theme file ([`ThemeFile`]).
//! - [`model`]: the editable theme with parsed colors ([`UserTheme`]).
//!
//! [`import_theme`](crate::import_theme) and
//! [`export_theme`](crate::export_theme) convert between the two.

pub mod file;
pub mod model;

pub use file::{ColorEntry, ColorFormat, FileFormat, PaletteFile, ThemeFile};
pub use model::{
    ColorPalette, ThemeColor, ThemeColorShallowCopy, UserTheme, DEFAULT_COMPONENT_COLOR,
};
