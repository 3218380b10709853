//! Structured CSS color values.
//!
//! A [`CssColor`] is what a raw CSS color string becomes once it has been
//! validated. It keeps the resolved sRGB channels plus alpha, and can render
//! itself back to any of the textual forms a theme file may use:
//!
//! | Accessor | Example |
//! |----------|---------|
//! | [`hex`](CssColor::hex) | `#ff6b35` |
//! | [`hex_alpha`](CssColor::hex_alpha) | `#ff6b3580` |
//! | [`rgb_string`](CssColor::rgb_string) | `rgb(255, 107, 53)` |
//! | [`rgba_string`](CssColor::rgba_string) | `rgba(255, 107, 53, 0.5)` |
//! | [`hsl_string`](CssColor::hsl_string) | `hsl(16, 100%, 60%)` |
//! | [`hsla_string`](CssColor::hsla_string) | `hsla(16, 100%, 60%, 0.5)` |
//!
//! The keywords `currentcolor` and `inherit` are valid color values that have
//! no channels of their own. They parse to a keyword color which renders as
//! the keyword from every accessor.
//!
//! # Example
//!
//! ```rust
//! use swatchbook::color::parse_color;
//!
//! let color = parse_color("hsl(0, 100%, 50%)").unwrap();
//! assert_eq!(color.hex(), "#ff0000");
//! assert!(!color.has_alpha());
//!
//! let translucent = parse_color("rgba(0, 0, 255, 0.25)").unwrap();
//! assert_eq!(translucent.hsla_string(), "hsla(240, 100%, 50%, 0.25)");
//! ```

mod error;
mod parse;

use std::fmt;
use std::str::FromStr;

pub use error::ColorParseError;
pub use parse::parse_color;

// ─── Keywords ───────────────────────────────────────────────────────────────

/// CSS keywords accepted as color values that do not resolve to channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKeyword {
    /// `currentcolor`
    CurrentColor,
    /// `inherit`
    Inherit,
}

impl ColorKeyword {
    /// Returns the canonical lowercase spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKeyword::CurrentColor => "currentcolor",
            ColorKeyword::Inherit => "inherit",
        }
    }

    /// Matches a keyword case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("currentcolor") {
            Some(ColorKeyword::CurrentColor)
        } else if name.eq_ignore_ascii_case("inherit") {
            Some(ColorKeyword::Inherit)
        } else {
            None
        }
    }
}

// ─── CssColor ───────────────────────────────────────────────────────────────

/// A parsed CSS color value.
#[derive(Debug, Clone, PartialEq)]
pub struct CssColor {
    red: u8,
    green: u8,
    blue: u8,
    /// Alpha in `0.0..=1.0`.
    alpha: f32,
    keyword: Option<ColorKeyword>,
    /// Display name carried alongside the color (the owning entry's label).
    pub name: Option<String>,
}

impl CssColor {
    /// Creates an opaque color from sRGB channels.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Creates a color from sRGB channels and alpha. Alpha is clamped to `0.0..=1.0`.
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: alpha.clamp(0.0, 1.0),
            keyword: None,
            name: None,
        }
    }

    /// Creates a color from HSL components.
    ///
    /// `hue` is in degrees (any value, wrapped to `0..360`); `saturation` and
    /// `lightness` are fractions in `0.0..=1.0`.
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let (r, g, b) = hsl_to_rgb(hue, saturation.clamp(0.0, 1.0), lightness.clamp(0.0, 1.0));
        Self::rgba(r, g, b, alpha)
    }

    /// Creates a keyword color (`currentcolor` or `inherit`).
    pub fn keyword(keyword: ColorKeyword) -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            alpha: 1.0,
            keyword: Some(keyword),
            name: None,
        }
    }

    /// Parses a raw CSS color string. See [`parse_color`].
    pub fn parse(raw: &str) -> Result<Self, ColorParseError> {
        parse_color(raw)
    }

    /// Sets the display name, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the sRGB channels.
    pub fn channels(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Returns alpha in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Returns the keyword this color stands for, if any.
    pub fn as_keyword(&self) -> Option<ColorKeyword> {
        self.keyword
    }

    /// Returns true when the color is not fully opaque.
    ///
    /// Keyword colors never report alpha.
    pub fn has_alpha(&self) -> bool {
        self.keyword.is_none() && self.alpha < 1.0
    }

    /// `#rrggbb`, lowercase.
    pub fn hex(&self) -> String {
        if let Some(keyword) = self.keyword {
            return keyword.as_str().to_string();
        }
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// `#rrggbbaa`, lowercase.
    pub fn hex_alpha(&self) -> String {
        if let Some(keyword) = self.keyword {
            return keyword.as_str().to_string();
        }
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red,
            self.green,
            self.blue,
            alpha_to_byte(self.alpha)
        )
    }

    /// `rgb(r, g, b)`.
    pub fn rgb_string(&self) -> String {
        if let Some(keyword) = self.keyword {
            return keyword.as_str().to_string();
        }
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    /// `rgba(r, g, b, a)`.
    pub fn rgba_string(&self) -> String {
        if let Some(keyword) = self.keyword {
            return keyword.as_str().to_string();
        }
        format!(
            "rgba({}, {}, {}, {})",
            self.red,
            self.green,
            self.blue,
            format_alpha(self.alpha)
        )
    }

    /// `hsl(h, s%, l%)`, components rounded to integers.
    pub fn hsl_string(&self) -> String {
        if let Some(keyword) = self.keyword {
            return keyword.as_str().to_string();
        }
        let (h, s, l) = self.hsl();
        format!("hsl({}, {}%, {}%)", h, s, l)
    }

    /// `hsla(h, s%, l%, a)`, components rounded to integers.
    pub fn hsla_string(&self) -> String {
        if let Some(keyword) = self.keyword {
            return keyword.as_str().to_string();
        }
        let (h, s, l) = self.hsl();
        format!("hsla({}, {}%, {}%, {})", h, s, l, format_alpha(self.alpha))
    }

    /// Returns `(hue°, saturation%, lightness%)` rounded to integers.
    pub fn hsl(&self) -> (u16, u8, u8) {
        let (h, s, l) = rgb_to_hsl(self.red, self.green, self.blue);
        let hue = (h.round() as u16) % 360;
        (hue, (s * 100.0).round() as u8, (l * 100.0).round() as u8)
    }

    /// Compares two colors by value, ignoring the display name.
    ///
    /// Alpha is compared at 8-bit precision, the resolution of `#rrggbbaa`.
    pub fn same_color(&self, other: &CssColor) -> bool {
        self.keyword == other.keyword
            && self.channels() == other.channels()
            && alpha_to_byte(self.alpha) == alpha_to_byte(other.alpha)
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_alpha() {
            f.write_str(&self.hex_alpha())
        } else {
            f.write_str(&self.hex())
        }
    }
}

impl FromStr for CssColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

// ─── Parser seam ────────────────────────────────────────────────────────────

/// Turns raw color text into a [`CssColor`].
///
/// Theme import is written against this trait so a host can substitute its
/// own notion of a valid color.
pub trait ColorValueParser {
    /// Parses one raw value.
    fn parse(&self, raw: &str) -> Result<CssColor, ColorParseError>;
}

/// The built-in parser backed by [`parse_color`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorParser;

impl ColorValueParser for CssColorParser {
    fn parse(&self, raw: &str) -> Result<CssColor, ColorParseError> {
        parse_color(raw)
    }
}

impl<F> ColorValueParser for F
where
    F: Fn(&str) -> Result<CssColor, ColorParseError>,
{
    fn parse(&self, raw: &str) -> Result<CssColor, ColorParseError> {
        self(raw)
    }
}

// ─── Conversions ────────────────────────────────────────────────────────────

fn alpha_to_byte(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Alpha rounded to two decimals, without trailing zeros (`0.5`, `1`, `0.33`).
fn format_alpha(alpha: f32) -> String {
    let rounded = (alpha * 100.0).round() / 100.0;
    format!("{}", rounded)
}

/// sRGB channels to `(hue°, saturation, lightness)` with fractions in `0..=1`.
fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    if delta == 0.0 {
        return (0.0, 0.0, lightness);
    }

    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
    let hue = if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (hue, saturation.min(1.0), lightness)
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let hue = hue.rem_euclid(360.0);
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match hue {
        h if h < 60.0 => (chroma, x, 0.0),
        h if h < 120.0 => (x, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, x),
        h if h < 240.0 => (0.0, x, chroma),
        h if h < 300.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let to_byte = |c: f32| ((c + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}
