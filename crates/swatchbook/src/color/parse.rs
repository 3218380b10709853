//! CSS color value parsing.
//!
//! Supports:
//!
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb()` / `rgba()`: comma or space separated, numbers or percentages,
//!   optional alpha after `,` or `/`
//! - `hsl()` / `hsla()`: hue as a number or angle (`deg`, `rad`, `grad`,
//!   `turn`), saturation and lightness as percentages
//! - Keywords: `currentcolor`, `inherit`, `transparent`
//! - Every CSS named color (`red`, `orange`, `rebeccapurple`, ...)
//!
//! Keywords, names and function names are case-insensitive.
//!
//! Tokenizing is done by `cssparser`, so comments and whitespace inside the
//! value behave as they do in a stylesheet.

use cssparser::{
    parse_color_keyword, parse_hash_color, BasicParseErrorKind, Color, ParseError,
    ParseErrorKind, Parser, ParserInput, ToCss, Token, RGBA,
};

use super::{ColorKeyword, ColorParseError, CssColor};

type ParseResult<'i, T> = Result<T, ParseError<'i, ColorParseError>>;

/// Parses a raw CSS color value.
///
/// # Example
///
/// ```rust
/// use swatchbook::color::parse_color;
///
/// assert_eq!(parse_color("#f80").unwrap().hex(), "#ff8800");
/// assert_eq!(parse_color("rgb(0 128 255 / 50%)").unwrap().rgba_string(), "rgba(0, 128, 255, 0.5)");
/// assert!(parse_color("not-a-color").is_err());
/// ```
pub fn parse_color(raw: &str) -> Result<CssColor, ColorParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(|p| parse_value(p))
        .map_err(into_owned_error)
}

fn into_owned_error(err: ParseError<'_, ColorParseError>) -> ColorParseError {
    match err.kind {
        ParseErrorKind::Custom(e) => e,
        ParseErrorKind::Basic(kind) => ColorParseError::Syntax(describe_basic_error(&kind)),
    }
}

fn describe_basic_error(kind: &BasicParseErrorKind<'_>) -> String {
    match kind {
        BasicParseErrorKind::UnexpectedToken(token) => unexpected(token),
        BasicParseErrorKind::EndOfInput => "unexpected end of input".to_string(),
        BasicParseErrorKind::AtRuleInvalid(name) => format!("unexpected at-rule @{}", name),
        BasicParseErrorKind::AtRuleBodyInvalid | BasicParseErrorKind::QualifiedRuleInvalid => {
            "unexpected rule".to_string()
        }
    }
}

/// Names a stray token by its CSS text.
fn unexpected(token: &Token<'_>) -> String {
    format!("unexpected `{}`", token.to_css_string())
}

fn parse_value<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, CssColor> {
    let token = input.next()?.clone();
    match token {
        Token::Hash(ref digits) | Token::IDHash(ref digits) => {
            parse_hex(digits).map_err(|e| input.new_custom_error(e))
        }
        Token::Ident(ref name) => parse_keyword(name).map_err(|e| input.new_custom_error(e)),
        Token::Function(ref name) => {
            let name = name.to_ascii_lowercase();
            match name.as_str() {
                "rgb" | "rgba" => input.parse_nested_block(|block| parse_rgb(block)),
                "hsl" | "hsla" => input.parse_nested_block(|block| parse_hsl(block)),
                _ => Err(input.new_custom_error(ColorParseError::UnsupportedFunction(name))),
            }
        }
        other => Err(input.new_custom_error(ColorParseError::Syntax(unexpected(&other)))),
    }
}

/// Parses hex digits (without the `#`).
fn parse_hex(digits: &str) -> Result<CssColor, ColorParseError> {
    parse_hash_color(digits.as_bytes())
        .ok()
        .and_then(|color: Color| resolved(&color))
        .ok_or_else(|| ColorParseError::InvalidHex(digits.to_string()))
}

/// Resolves keywords and CSS named colors.
fn parse_keyword(name: &str) -> Result<CssColor, ColorParseError> {
    if let Some(keyword) = ColorKeyword::from_name(name) {
        return Ok(CssColor::keyword(keyword));
    }
    parse_color_keyword(name)
        .ok()
        .and_then(|color: Color| resolved(&color))
        .ok_or_else(|| ColorParseError::UnknownKeyword(name.to_string()))
}

/// Converts an sRGB color from cssparser. Other color spaces are not resolved.
fn resolved(color: &Color) -> Option<CssColor> {
    match color {
        Color::CurrentColor => Some(CssColor::keyword(ColorKeyword::CurrentColor)),
        Color::Rgba(RGBA {
            red,
            green,
            blue,
            alpha,
        }) => Some(CssColor::rgba(
            red.unwrap_or(0),
            green.unwrap_or(0),
            blue.unwrap_or(0),
            alpha.unwrap_or(1.0),
        )),
        _ => None,
    }
}

// ─── Functional notation ────────────────────────────────────────────────────

enum Component {
    Number(f32),
    /// Percentage as a fraction (`50%` is `0.5`).
    Percentage(f32),
    Dimension(f32, String),
}

struct Channels {
    first: Component,
    second: Component,
    third: Component,
    alpha: Option<Component>,
}

fn parse_component<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Component> {
    let token = input.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(Component::Number(value)),
        Token::Percentage { unit_value, .. } => Ok(Component::Percentage(unit_value)),
        Token::Dimension {
            value, ref unit, ..
        } => Ok(Component::Dimension(value, unit.to_ascii_lowercase())),
        other => Err(input.new_custom_error(ColorParseError::Syntax(format!(
            "{} in color function",
            unexpected(&other)
        )))),
    }
}

/// Reads three channels and an optional alpha.
///
/// The legacy syntax separates everything with commas; the modern syntax
/// uses whitespace and introduces alpha with `/`. The separator after the
/// first channel decides which one applies.
fn parse_channels<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, Channels> {
    let first = parse_component(input)?;
    let legacy = input.try_parse(|i| i.expect_comma()).is_ok();
    let second = parse_component(input)?;
    if legacy {
        input.expect_comma()?;
    }
    let third = parse_component(input)?;

    let has_alpha = if legacy {
        input.try_parse(|i| i.expect_comma()).is_ok()
    } else {
        input.try_parse(|i| i.expect_delim('/')).is_ok()
    };
    let alpha = if has_alpha {
        Some(parse_component(input)?)
    } else {
        None
    };

    Ok(Channels {
        first,
        second,
        third,
        alpha,
    })
}

fn parse_rgb<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, CssColor> {
    let channels = parse_channels(input)?;
    let resolve = || -> Result<CssColor, ColorParseError> {
        Ok(CssColor::rgba(
            rgb_channel(&channels.first)?,
            rgb_channel(&channels.second)?,
            rgb_channel(&channels.third)?,
            alpha_channel(channels.alpha.as_ref())?,
        ))
    };
    resolve().map_err(|e| input.new_custom_error(e))
}

fn parse_hsl<'i, 't>(input: &mut Parser<'i, 't>) -> ParseResult<'i, CssColor> {
    let channels = parse_channels(input)?;
    let resolve = || -> Result<CssColor, ColorParseError> {
        Ok(CssColor::hsla(
            hue(&channels.first)?,
            fraction(&channels.second)?,
            fraction(&channels.third)?,
            alpha_channel(channels.alpha.as_ref())?,
        ))
    };
    resolve().map_err(|e| input.new_custom_error(e))
}

fn rgb_channel(component: &Component) -> Result<u8, ColorParseError> {
    match component {
        Component::Number(v) => Ok(v.clamp(0.0, 255.0).round() as u8),
        Component::Percentage(p) => Ok((p.clamp(0.0, 1.0) * 255.0).round() as u8),
        Component::Dimension(_, unit) => Err(ColorParseError::Syntax(format!(
            "unexpected unit '{}' in rgb channel",
            unit
        ))),
    }
}

fn alpha_channel(component: Option<&Component>) -> Result<f32, ColorParseError> {
    match component {
        None => Ok(1.0),
        Some(Component::Number(v)) | Some(Component::Percentage(v)) => Ok(v.clamp(0.0, 1.0)),
        Some(Component::Dimension(_, unit)) => Err(ColorParseError::Syntax(format!(
            "unexpected unit '{}' in alpha",
            unit
        ))),
    }
}

/// Hue in degrees.
fn hue(component: &Component) -> Result<f32, ColorParseError> {
    match component {
        Component::Number(v) => Ok(*v),
        Component::Dimension(v, unit) => match unit.as_str() {
            "deg" => Ok(*v),
            "rad" => Ok(v.to_degrees()),
            "grad" => Ok(v * 0.9),
            "turn" => Ok(v * 360.0),
            _ => Err(ColorParseError::InvalidAngleUnit(unit.clone())),
        },
        Component::Percentage(_) => Err(ColorParseError::Syntax(
            "hue cannot be a percentage".to_string(),
        )),
    }
}

/// Saturation or lightness as a fraction. Bare numbers are read as percentages.
fn fraction(component: &Component) -> Result<f32, ColorParseError> {
    match component {
        Component::Percentage(p) => Ok(*p),
        Component::Number(v) => Ok(v / 100.0),
        Component::Dimension(_, unit) => Err(ColorParseError::Syntax(format!(
            "unexpected unit '{}' in hsl component",
            unit
        ))),
    }
}
