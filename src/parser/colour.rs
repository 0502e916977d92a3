//! Colour token normalization.
//!
//! Collapses the colour syntaxes found in SVG markup to a single
//! [`CanonicalColour`]:
//!
//! - `#RGB` / `#RRGGBB` hex (shorthand is expanded)
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)`, with plain or percentage channels
//! - the `white` keyword and every other spelling of pure white
//!
//! Anything else is passed through lowercased.

use std::str::FromStr;

use palette::Srgb;

use crate::types::CanonicalColour;

/// Normalize a raw colour token.
///
/// Never fails: tokens that cannot be interpreted come back as
/// [`CanonicalColour::Verbatim`].
pub fn normalize_colour(token: &str) -> CanonicalColour {
    let token = token.trim().to_lowercase();

    if is_white(&token) {
        return CanonicalColour::White;
    }

    if token.starts_with('#') {
        return normalize_hex(&token);
    }

    if let Some(colour) = parse_rgb_function(&token) {
        return colour;
    }

    CanonicalColour::Verbatim(token)
}

/// Check whether a token is one of the recognised spellings of pure white.
///
/// Matches `#fff`, `#ffffff`, `white`, `rgb(255,255,255)`,
/// `rgb(100%,100%,100%)` and the `rgba` forms of those with an alpha of
/// `1`, `1.`, `1.0`, `1.00`... Whitespace around the parentheses and commas
/// is ignored, and so is case.
pub fn is_white(token: &str) -> bool {
    let token = token.trim().to_lowercase();

    if matches!(token.as_str(), "#fff" | "#ffffff" | "white") {
        return true;
    }

    let Some(call) = FunctionCall::parse(&token) else {
        return false;
    };

    match (call.name, call.args.as_slice()) {
        ("rgb", [r, g, b]) => full_channels([r, g, b]),
        ("rgba", [r, g, b, a]) => full_channels([r, g, b]) && is_opaque_alpha(a),
        _ => false,
    }
}

/// All three channels at full intensity, written the same way.
fn full_channels(channels: [&str; 3]) -> bool {
    channels.iter().all(|c| *c == "255") || channels.iter().all(|c| *c == "100%")
}

/// `1` optionally followed by a decimal point and zeros.
fn is_opaque_alpha(alpha: &str) -> bool {
    match alpha.strip_prefix('1') {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix('.')
            .is_some_and(|zeros| zeros.chars().all(|c| c == '0')),
        None => false,
    }
}

/// Normalize a lowercased token starting with `#`.
fn normalize_hex(token: &str) -> CanonicalColour {
    // #abc -> #aabbcc
    let expanded = if token.chars().count() == 4 {
        let mut long = String::from("#");
        for c in token.chars().skip(1) {
            long.push(c);
            long.push(c);
        }
        long
    } else {
        token.to_string()
    };

    let is_six_digit =
        expanded.len() == 7 && expanded.bytes().skip(1).all(|b| b.is_ascii_hexdigit());

    if is_six_digit {
        if let Ok(rgb) = Srgb::<u8>::from_str(&expanded) {
            return CanonicalColour::rgb(rgb.red, rgb.green, rgb.blue);
        }
    }

    CanonicalColour::Verbatim(expanded.to_uppercase())
}

/// Parse `rgb(...)` or `rgba(...)` into an RGB colour.
///
/// Only the first three components are used. Spellings of white that
/// [`is_white`] rejects stay `#FFFFFF`. Returns None for other
/// functions, fewer than three components, or non-numeric components.
fn parse_rgb_function(token: &str) -> Option<CanonicalColour> {
    let call = FunctionCall::parse(token)?;

    if !matches!(call.name, "rgb" | "rgba") {
        return None;
    }

    match call.args.as_slice() {
        [r, g, b, ..] => Some(CanonicalColour::rgb(
            parse_channel(r)?,
            parse_channel(g)?,
            parse_channel(b)?,
        )),
        _ => None,
    }
}

/// Parse one channel: `n` or `n%`, truncated and clamped to 0-255.
fn parse_channel(component: &str) -> Option<u8> {
    let value = match component.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok()? * 2.55,
        None => component.parse::<f64>().ok()?,
    };

    if !value.is_finite() {
        return None;
    }

    Some(value.trunc().clamp(0.0, 255.0) as u8)
}

/// A functional notation token such as `rgb(1, 2, 3)`.
struct FunctionCall<'a> {
    name: &'a str,
    args: Vec<&'a str>,
}

impl<'a> FunctionCall<'a> {
    /// Split `name(a, b, c)` into its name and trimmed arguments.
    ///
    /// Anything after the closing parenthesis is ignored.
    fn parse(token: &'a str) -> Option<Self> {
        let (name, rest) = token.split_once('(')?;
        let (inner, _) = rest.split_once(')')?;

        let name = name.trim();
        if name.is_empty() || inner.trim().is_empty() {
            return None;
        }

        Some(Self {
            name,
            args: inner.split(',').map(str::trim).collect(),
        })
    }
}
