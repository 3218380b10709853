//! Small string helpers shared by the name converter and the file sink.

use deunicode::deunicode;

/// Uppercases the first character, leaving the rest untouched.
///
/// ```rust
/// use swatchbook::capitalize;
///
/// assert_eq!(capitalize("color"), "Color");
/// assert_eq!(capitalize("iOS"), "IOS");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a theme name into a file-name friendly slug.
///
/// Non-ASCII text is transliterated, spaces become `-`, anything else that
/// is not alphanumeric is dropped, and runs of `-` are collapsed.
///
/// ```rust
/// use swatchbook::slugify;
///
/// assert_eq!(slugify("My Dark Theme"), "my-dark-theme");
/// assert_eq!(slugify("Café  Crème!"), "cafe-creme");
/// ```
pub fn slugify(text: &str) -> String {
    let transliterated = deunicode(text);
    let mut slug: String = transliterated
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    slug.trim_matches('-').to_string()
}
