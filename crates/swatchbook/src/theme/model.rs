//! In-memory theme types.
//!
//! Unlike the file types, every [`ThemeColor`] here holds a parsed
//! [`CssColor`] next to its raw text, so the theme can be re-rendered in any
//! [`ColorFormat`].

use crate::color::{ColorParseError, CssColor};
use crate::names::{self, derive_names, ColorNames, NameSource, PrefixConfig};

use super::file::ColorFormat;

/// Component color tag given to palettes created from scratch.
pub const DEFAULT_COMPONENT_COLOR: &str = "primary";

/// One color slot in a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColor {
    /// The parsed color.
    pub color: CssColor,
    /// camelCase identifier.
    pub prop_name: Option<String>,
    /// CSS custom property name.
    pub css_var_name: String,
    /// Human readable label.
    pub display_name: String,
    /// Raw value as written, e.g. `#ff0000` or `inherit`.
    pub value: String,
    pub is_selected: bool,
}

/// Every field of a [`ThemeColor`] except the parsed color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeColorShallowCopy {
    pub prop_name: Option<String>,
    pub css_var_name: String,
    pub display_name: String,
    pub value: String,
    pub is_selected: bool,
}

impl ThemeColor {
    /// Creates a color with explicit names. The raw value is the color's own
    /// text form.
    pub fn new(color: CssColor, names: ColorNames) -> Self {
        let value = color.to_string();
        let prop_name = (!names.prop_name.is_empty()).then_some(names.prop_name);
        let color = color.with_name(names.display_name.clone());
        Self {
            color,
            prop_name,
            css_var_name: names.css_var_name,
            display_name: names.display_name,
            value,
            is_selected: false,
        }
    }

    /// Parses `raw` and names the color from `source`, deriving the other
    /// two names.
    ///
    /// The raw text is kept as the color's `value`.
    pub fn parse(
        prefix: PrefixConfig<'_>,
        source: &NameSource,
        raw: &str,
    ) -> Result<Self, ColorParseError> {
        let color = CssColor::parse(raw)?;
        let mut theme_color = Self::new(color, derive_names(prefix, source));
        theme_color.value = raw.to_string();
        Ok(theme_color)
    }

    /// Names a color by prop name, deriving the CSS variable and display names.
    pub fn from_prop_name(prefix: PrefixConfig<'_>, prop_name: &str, color: CssColor) -> Self {
        Self::new(
            color,
            derive_names(prefix, &NameSource::PropName(prop_name.to_string())),
        )
    }

    /// Names a color by CSS variable name, deriving the prop and display names.
    pub fn from_css_var_name(
        prefix: PrefixConfig<'_>,
        css_var_name: &str,
        color: CssColor,
    ) -> Self {
        Self::new(
            color,
            derive_names(prefix, &NameSource::CssVarName(css_var_name.to_string())),
        )
    }

    /// Names a color by display name, deriving the prop and CSS variable names.
    pub fn from_display_name(
        prefix: PrefixConfig<'_>,
        display_name: &str,
        color: CssColor,
    ) -> Self {
        Self::new(
            color,
            derive_names(prefix, &NameSource::DisplayName(display_name.to_string())),
        )
    }

    /// Re-derives all names from one source name.
    pub fn rename(&mut self, prefix: PrefixConfig<'_>, source: &NameSource) {
        let names = derive_names(prefix, source);
        self.prop_name = (!names.prop_name.is_empty()).then_some(names.prop_name);
        self.css_var_name = names.css_var_name;
        self.color.name = Some(names.display_name.clone());
        self.display_name = names.display_name;
    }

    /// Returns the three names, with a missing prop name as `""`.
    pub fn names(&self) -> ColorNames {
        ColorNames {
            prop_name: self.prop_name.clone().unwrap_or_default(),
            css_var_name: self.css_var_name.clone(),
            display_name: self.display_name.clone(),
        }
    }

    /// Copies everything but the parsed color.
    pub fn shallow_copy(&self) -> ThemeColorShallowCopy {
        ThemeColorShallowCopy {
            prop_name: self.prop_name.clone(),
            css_var_name: self.css_var_name.clone(),
            display_name: self.display_name.clone(),
            value: self.value.clone(),
            is_selected: self.is_selected,
        }
    }
}

/// A named, ordered collection of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    /// Unique within its theme.
    pub id: String,
    pub prop_name: String,
    pub display_name: String,
    pub component_color: String,
    pub colors: Vec<ThemeColor>,
    /// Set by edits; cleared when the theme is exported.
    pub updated: bool,
}

impl ColorPalette {
    /// Creates an empty palette with a fresh id.
    pub fn empty(display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            prop_name: names::display_name_to_prop_name(&display_name),
            display_name,
            component_color: DEFAULT_COMPONENT_COLOR.to_string(),
            colors: Vec::new(),
            updated: false,
        }
    }

    /// Sets the display name and the prop name derived from it.
    pub fn rename(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
        self.prop_name = names::display_name_to_prop_name(&self.display_name);
    }
}

/// A theme with validated colors.
#[derive(Debug, Clone, PartialEq)]
pub struct UserTheme {
    pub theme_name: String,
    /// RFC 3339 timestamp of the last save.
    pub modified_at: String,
    pub color_format: ColorFormat,
    pub uses_prefix: bool,
    pub theme_prefix: String,
    pub palettes: Vec<ColorPalette>,
}

impl UserTheme {
    /// Creates a theme with no palettes.
    pub fn blank(theme_name: impl Into<String>) -> Self {
        Self {
            theme_name: theme_name.into(),
            modified_at: String::new(),
            color_format: ColorFormat::default(),
            uses_prefix: false,
            theme_prefix: String::new(),
            palettes: Vec::new(),
        }
    }

    /// Enables variable prefixing, returning `self` for chaining.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.uses_prefix = true;
        self.theme_prefix = prefix.into();
        self
    }

    /// Sets the export color format, returning `self` for chaining.
    pub fn with_color_format(mut self, format: ColorFormat) -> Self {
        self.color_format = format;
        self
    }

    /// The prefix convention used by the name converter.
    pub fn prefix(&self) -> PrefixConfig<'_> {
        PrefixConfig {
            enabled: self.uses_prefix,
            prefix: &self.theme_prefix,
        }
    }

    pub fn palette(&self, id: &str) -> Option<&ColorPalette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    pub fn palette_mut(&mut self, id: &str) -> Option<&mut ColorPalette> {
        self.palettes.iter_mut().find(|p| p.id == id)
    }

    /// Total number of colors across all palettes.
    pub fn color_count(&self) -> usize {
        self.palettes.iter().map(|p| p.colors.len()).sum()
    }

    /// Returns true when any palette has unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.palettes.iter().any(|p| p.updated)
    }
}
