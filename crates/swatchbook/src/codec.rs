//! Conversion between theme files and validated themes.
//!
//! [`import_theme`] validates every raw color value of a [`ThemeFile`] and
//! produces a [`UserTheme`]; [`export_theme`] goes the other way, rendering
//! each color in the theme's [`ColorFormat`].
//!
//! Import is all-or-nothing. The first value that does not parse aborts the
//! import with [`ImportError::InvalidColor`], and no partial theme is
//! returned.
//!
//! ```rust
//! use swatchbook::{export_theme, import_theme, ThemeFile};
//!
//! let file = ThemeFile::from_json(r##"{
//!     "themeName": "Mono",
//!     "palettes": [{ "id": "p1", "colors": [
//!         { "cssVarName": "--ink", "displayName": "Ink", "value": "rgb(0 0 0)" }
//!     ]}]
//! }"##).unwrap();
//!
//! let theme = import_theme(file).unwrap();
//! assert_eq!(export_theme(&theme).palettes[0].colors[0].value, "#000000");
//! ```

use std::path::Path;

use crate::color::{ColorKeyword, ColorValueParser, CssColorParser};
use crate::error::{ImportError, Result};
use crate::theme::{
    ColorEntry, ColorFormat, ColorPalette, PaletteFile, ThemeColor, ThemeFile, UserTheme,
};

// ─── Import ─────────────────────────────────────────────────────────────────

/// Validates a theme file with the built-in CSS color parser.
pub fn import_theme(file: ThemeFile) -> std::result::Result<UserTheme, ImportError> {
    import_theme_with(file, &CssColorParser)
}

/// Validates a theme file with a caller-supplied color parser.
pub fn import_theme_with<P>(
    file: ThemeFile,
    parser: &P,
) -> std::result::Result<UserTheme, ImportError>
where
    P: ColorValueParser + ?Sized,
{
    let palettes = file
        .palettes
        .into_iter()
        .map(|palette| import_palette(palette, parser))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(UserTheme {
        theme_name: file.theme_name,
        modified_at: file.modified_at,
        color_format: file.color_format,
        uses_prefix: file.uses_prefix,
        theme_prefix: file.theme_prefix,
        palettes,
    })
}

fn import_palette<P>(
    palette: PaletteFile,
    parser: &P,
) -> std::result::Result<ColorPalette, ImportError>
where
    P: ColorValueParser + ?Sized,
{
    let colors = palette
        .colors
        .into_iter()
        .map(|entry| import_color(entry, &palette.id, parser))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(ColorPalette {
        id: palette.id,
        prop_name: palette.prop_name,
        display_name: palette.display_name,
        component_color: palette.component_color,
        colors,
        updated: false,
    })
}

fn import_color<P>(
    entry: ColorEntry,
    palette_id: &str,
    parser: &P,
) -> std::result::Result<ThemeColor, ImportError>
where
    P: ColorValueParser + ?Sized,
{
    let color = parser
        .parse(&entry.value)
        .map_err(|source| ImportError::InvalidColor {
            value: entry.value.clone(),
            palette: palette_id.to_string(),
            source,
        })?;

    Ok(ThemeColor {
        color: color.with_name(entry.display_name.clone()),
        prop_name: entry.prop_name,
        css_var_name: entry.css_var_name,
        display_name: entry.display_name,
        value: entry.value,
        is_selected: false,
    })
}

/// Reads a theme file from disk and imports it.
///
/// ```rust,no_run
/// let theme = swatchbook::load_theme("themes/ocean.json")?;
/// println!("{} colors", theme.color_count());
/// # Ok::<(), swatchbook::ThemeError>(())
/// ```
pub fn load_theme<P: AsRef<Path>>(path: P) -> Result<UserTheme> {
    let file = ThemeFile::from_path(path)?;
    Ok(import_theme(file)?)
}

// ─── Export ─────────────────────────────────────────────────────────────────

/// Projects a theme back to its file form, rendering every color in the
/// theme's [`ColorFormat`].
pub fn export_theme(theme: &UserTheme) -> ThemeFile {
    ThemeFile {
        theme_name: theme.theme_name.clone(),
        modified_at: theme.modified_at.clone(),
        color_format: theme.color_format,
        uses_prefix: theme.uses_prefix,
        theme_prefix: theme.theme_prefix.clone(),
        palettes: theme
            .palettes
            .iter()
            .map(|palette| export_palette(palette, theme.color_format))
            .collect(),
    }
}

fn export_palette(palette: &ColorPalette, format: ColorFormat) -> PaletteFile {
    PaletteFile {
        id: palette.id.clone(),
        prop_name: palette.prop_name.clone(),
        display_name: palette.display_name.clone(),
        component_color: palette.component_color.clone(),
        colors: palette
            .colors
            .iter()
            .map(|color| ColorEntry {
                prop_name: color.prop_name.clone(),
                css_var_name: color.css_var_name.clone(),
                display_name: color.display_name.clone(),
                value: render_color(color, format),
            })
            .collect(),
    }
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Renders one color as text in the given format.
///
/// Raw values `currentcolor` and `inherit` (any case) are returned as
/// written. Colors with alpha use the alpha-carrying form of the format.
pub fn render_color(color: &ThemeColor, format: ColorFormat) -> String {
    if ColorKeyword::from_name(&color.value).is_some() {
        return color.value.clone();
    }

    let css = &color.color;
    match (format, css.has_alpha()) {
        (ColorFormat::Hsl, true) => css.hsla_string(),
        (ColorFormat::Hsl, false) => css.hsl_string(),
        (ColorFormat::Rgb, true) => css.rgba_string(),
        (ColorFormat::Rgb, false) => css.rgb_string(),
        (ColorFormat::Hex, true) => css.hex_alpha(),
        (ColorFormat::Hex, false) => css.hex(),
    }
}

/// Renders one color as a `name: value` declaration in the theme's format.
pub fn render_color_css(theme: &UserTheme, color: &ThemeColor) -> String {
    format!(
        "{}: {}",
        color.css_var_name,
        render_color(color, theme.color_format)
    )
}

/// Renders every color of a theme as CSS declarations.
///
/// Declarations follow palette order, then color order, and are joined by
/// `"; "`, or by `"\n;"` when `with_new_lines` is set. No theme renders as
/// an empty string.
pub fn render_theme_as_css(theme: Option<&UserTheme>, with_new_lines: bool) -> String {
    let Some(theme) = theme else {
        return String::new();
    };
    let separator = if with_new_lines { "\n;" } else { "; " };
    theme
        .palettes
        .iter()
        .flat_map(|palette| palette.colors.iter())
        .map(|color| render_color_css(theme, color))
        .collect::<Vec<_>>()
        .join(separator)
}
