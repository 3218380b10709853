//! Conversions between the three names a theme color goes by.
//!
//! Every color in a palette can be addressed three ways:
//!
//! | Convention | Example | Used for |
//! |------------|---------|----------|
//! | prop name | `primaryActionColor` | keys in structured data |
//! | CSS variable name | `--primary-action-color` | custom properties in stylesheets |
//! | display name | `Primary Action Color` | labels shown to people |
//!
//! When one of them is set (on creation or rename), the other two are derived
//! with the functions in this module.
//!
//! # Fail-Soft Contract
//!
//! None of these functions return `Result`. Input that fails the relevant
//! validity check ([`is_prop_name`], [`is_css_var_name`], or simply being
//! empty) produces an empty string, and callers must treat `""` as
//! "conversion not applicable", never as a real name.
//!
//! # Theme Prefixes
//!
//! A theme may namespace its variables with a prefix (e.g. `--app`), stored
//! in [`PrefixConfig`]. Converting *to* a CSS variable name strips a leading
//! `{prefix}-` when the result would start with it. Converting *from* a CSS
//! variable name replaces the first occurrence of the prefix text with `-`
//! before splitting.
//!
//! The two directions are not symmetric. Going to a CSS variable name yields
//! the hyphenated words without a leading `--` (`primary-color`), with or
//! without a prefix match, while going back requires the `--`. The reverse
//! direction also matches the prefix anywhere in the string, not only at the
//! start.
//!
//! # Example
//!
//! ```rust
//! use swatchbook::names::{self, PrefixConfig};
//!
//! assert_eq!(names::prop_name_to_display_name("backgroundColor"), "Background Color");
//! assert_eq!(
//!     names::css_var_name_to_prop_name(PrefixConfig::NONE, "--background-color"),
//!     "backgroundColor"
//! );
//!
//! let app = PrefixConfig::new("--app");
//! assert_eq!(names::prop_name_to_css_var_name(app, "appPrimary"), "primary");
//! assert_eq!(names::css_var_name_to_display_name(app, "--app-primary"), "Primary");
//! ```

/// Character codes below `'a'` start a new camel-case word.
const LOWERCASE_START: u32 = 'a' as u32;

/// A theme's variable prefixing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixConfig<'a> {
    /// Whether the prefix applies at all.
    pub enabled: bool,
    /// Prefix text, typically including the leading `--` (e.g. `--app`).
    pub prefix: &'a str,
}

impl PrefixConfig<'static> {
    /// No prefixing.
    pub const NONE: PrefixConfig<'static> = PrefixConfig {
        enabled: false,
        prefix: "",
    };
}

impl<'a> PrefixConfig<'a> {
    /// An enabled prefix.
    pub fn new(prefix: &'a str) -> Self {
        Self {
            enabled: true,
            prefix,
        }
    }
}

impl Default for PrefixConfig<'_> {
    fn default() -> Self {
        PrefixConfig::NONE
    }
}

// ─── Validity ───────────────────────────────────────────────────────────────

/// Returns true for a usable prop name.
///
/// Accepted shapes:
/// - all lowercase ASCII letters (`primary`)
/// - a lowercase first letter, at least one uppercase letter after it, only
///   ASCII letters in between, and a final character outside
///   `` [ \ ] ^ _ ` `` (`primaryColor`, `fooBar1`)
pub fn is_prop_name(name: &str) -> bool {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase()) {
        return true;
    }

    let chars: Vec<char> = name.chars().collect();
    let (first, last) = match (chars.first(), chars.last()) {
        (Some(first), Some(last)) if chars.len() >= 2 => (*first, *last),
        _ => return false,
    };

    first.is_ascii_lowercase()
        && chars[1..chars.len() - 1].iter().all(|c| c.is_ascii_alphabetic())
        && chars[1..].iter().any(|c| c.is_ascii_uppercase())
        && !('['..='`').contains(&last)
}

/// Returns true for `--` followed by ASCII word characters or hyphens.
pub fn is_css_var_name(name: &str) -> bool {
    name.strip_prefix("--").is_some_and(|rest| {
        rest.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    })
}

// ─── Splitting ──────────────────────────────────────────────────────────────

/// Splits a camel-case identifier into words.
///
/// Any character whose code is below `'a'` (uppercase letters, digits, most
/// punctuation) starts a new word. Empty words are dropped.
///
/// ```rust
/// use swatchbook::names::split_camel_case;
///
/// assert_eq!(split_camel_case("backgroundColor"), vec!["background", "Color"]);
/// assert_eq!(split_camel_case("gray100"), vec!["gray", "1", "0", "0"]);
/// assert!(split_camel_case("").is_empty());
/// ```
pub fn split_camel_case(input: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (index, c) in input.char_indices() {
        if (c as u32) < LOWERCASE_START {
            words.push(&input[start..index]);
            start = index;
        }
    }
    words.push(&input[start..]);
    words.retain(|word| !word.is_empty());
    words
}

/// Splits a CSS variable name into its hyphen-separated words.
///
/// Returns an empty vector when `input` is not a valid CSS variable name.
///
/// ```rust
/// use swatchbook::names::split_css_var_name;
///
/// assert_eq!(split_css_var_name("--background-color"), vec!["background", "color"]);
/// assert!(split_css_var_name("background-color").is_empty());
/// ```
pub fn split_css_var_name(input: &str) -> Vec<&str> {
    if !is_css_var_name(input) {
        return Vec::new();
    }
    input[2..].split('-').collect()
}

// ─── Prefix handling ────────────────────────────────────────────────────────

/// Strips `{prefix}-` from `--{joined}` when it starts with it; otherwise
/// returns `joined` unchanged.
fn strip_leading_prefix(prefix: PrefixConfig<'_>, joined: String) -> String {
    if prefix.enabled {
        let full = format!("--{}", joined);
        let needle = format!("{}-", prefix.prefix);
        if full.starts_with(&needle) {
            return full.replacen(&needle, "", 1);
        }
    }
    joined
}

/// Replaces the first occurrence of the prefix text with `-`.
fn replace_prefix(prefix: PrefixConfig<'_>, css_var_name: &str) -> String {
    if prefix.enabled {
        css_var_name.replacen(prefix.prefix, "-", 1)
    } else {
        css_var_name.to_string()
    }
}

// ─── Conversions ────────────────────────────────────────────────────────────

/// `backgroundColor` → `Background Color`.
pub fn prop_name_to_display_name(prop_name: &str) -> String {
    if !is_prop_name(prop_name) {
        return String::new();
    }
    split_camel_case(prop_name)
        .into_iter()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `backgroundColor` → `background-color`, subject to prefix stripping.
pub fn prop_name_to_css_var_name(prefix: PrefixConfig<'_>, prop_name: &str) -> String {
    if !is_prop_name(prop_name) {
        return String::new();
    }
    let joined = split_camel_case(prop_name)
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    strip_leading_prefix(prefix, joined)
}

/// `--background-color` → `backgroundColor`.
pub fn css_var_name_to_prop_name(prefix: PrefixConfig<'_>, css_var_name: &str) -> String {
    if !is_css_var_name(css_var_name) {
        return String::new();
    }
    let name = replace_prefix(prefix, css_var_name);
    let words = split_css_var_name(&name);
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };
    let mut prop_name = first.to_string();
    for word in rest {
        prop_name.push_str(&capitalize(word));
    }
    prop_name
}

/// `--background-color` → `Background Color`.
pub fn css_var_name_to_display_name(prefix: PrefixConfig<'_>, css_var_name: &str) -> String {
    if !is_css_var_name(css_var_name) {
        return String::new();
    }
    let name = replace_prefix(prefix, css_var_name);
    split_css_var_name(&name)
        .into_iter()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Background Color` → `background-color`, subject to prefix stripping.
pub fn display_name_to_css_var_name(prefix: PrefixConfig<'_>, display_name: &str) -> String {
    if display_name.is_empty() {
        return String::new();
    }
    let joined = display_name
        .split(' ')
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    strip_leading_prefix(prefix, joined)
}

/// `Background Color` → `backgroundColor`.
pub fn display_name_to_prop_name(display_name: &str) -> String {
    if display_name.is_empty() {
        return String::new();
    }
    let mut words = display_name.split(' ');
    let mut prop_name = words.next().unwrap_or_default().to_lowercase();
    for word in words {
        prop_name.push_str(&capitalize(word));
    }
    prop_name
}

fn capitalize(word: &str) -> String {
    crate::util::capitalize(word)
}

// ─── Whole-name derivation ──────────────────────────────────────────────────

/// Which name a color was given; the other two are derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    PropName(String),
    CssVarName(String),
    DisplayName(String),
}

impl NameSource {
    /// Guesses the convention of a free-form name.
    ///
    /// CSS variable names are recognised by their `--`, prop names by
    /// [`is_prop_name`]; anything else is taken as a display name.
    pub fn detect(name: &str) -> Self {
        if is_css_var_name(name) {
            NameSource::CssVarName(name.to_string())
        } else if is_prop_name(name) {
            NameSource::PropName(name.to_string())
        } else {
            NameSource::DisplayName(name.to_string())
        }
    }

    /// Short label for the convention.
    pub fn convention(&self) -> &'static str {
        match self {
            NameSource::PropName(_) => "prop name",
            NameSource::CssVarName(_) => "css variable",
            NameSource::DisplayName(_) => "display name",
        }
    }
}

/// The three names of one color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorNames {
    pub prop_name: String,
    pub css_var_name: String,
    pub display_name: String,
}

/// Derives all three names from the one that was given.
///
/// The source name is kept verbatim; derived names may be empty when the
/// source fails validation.
pub fn derive_names(prefix: PrefixConfig<'_>, source: &NameSource) -> ColorNames {
    match source {
        NameSource::PropName(prop_name) => ColorNames {
            prop_name: prop_name.clone(),
            css_var_name: prop_name_to_css_var_name(prefix, prop_name),
            display_name: prop_name_to_display_name(prop_name),
        },
        NameSource::CssVarName(css_var_name) => ColorNames {
            prop_name: css_var_name_to_prop_name(prefix, css_var_name),
            css_var_name: css_var_name.clone(),
            display_name: css_var_name_to_display_name(prefix, css_var_name),
        },
        NameSource::DisplayName(display_name) => ColorNames {
            prop_name: display_name_to_prop_name(display_name),
            css_var_name: display_name_to_css_var_name(prefix, display_name),
            display_name: display_name.clone(),
        },
    }
}
