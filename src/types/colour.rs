//! Canonical colour type.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use palette::Srgb;
use serde::{Serialize, Serializer};

/// A colour after normalization.
///
/// Equivalent spellings of a colour collapse to one value, and two
/// `CanonicalColour`s compare equal exactly when their display strings do.
/// `White` and `Rgb(255, 255, 255)` are distinct: only the recognised white
/// forms and opaque raster pixels become `white`.
#[derive(Debug, Clone)]
pub enum CanonicalColour {
    /// Pure white, displayed as the literal `white`.
    White,
    /// An RGB colour, displayed as `#RRGGBB`.
    Rgb(Srgb<u8>),
    /// A token the normalizer does not understand, passed through.
    Verbatim(String),
}

impl CanonicalColour {
    /// Build a canonical colour from RGB components.
    ///
    /// Pure white always becomes [`CanonicalColour::White`].
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        if (r, g, b) == (255, 255, 255) {
            Self::White
        } else {
            Self::Rgb(Srgb::new(r, g, b))
        }
    }

    /// Build an RGB colour as written, without collapsing pure white.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Srgb::new(r, g, b))
    }

    /// Wrap an unrecognized token.
    pub fn verbatim(token: impl Into<String>) -> Self {
        Self::Verbatim(token.into())
    }

    pub fn is_white(&self) -> bool {
        matches!(self, Self::White)
    }

    /// The RGB value, if this colour has one.
    pub fn to_srgb(&self) -> Option<Srgb<u8>> {
        match self {
            Self::White => Some(Srgb::new(255, 255, 255)),
            Self::Rgb(c) => Some(*c),
            Self::Verbatim(_) => None,
        }
    }

    /// Ordering key: white first, then RGB values, then verbatim tokens.
    fn key(&self) -> (u8, [u8; 3], &str) {
        match self {
            Self::White => (0, [255, 255, 255], ""),
            Self::Rgb(c) => (1, [c.red, c.green, c.blue], ""),
            Self::Verbatim(s) => (2, [0, 0, 0], s.as_str()),
        }
    }
}

impl PartialEq for CanonicalColour {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CanonicalColour {}

impl Hash for CanonicalColour {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for CanonicalColour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CanonicalColour {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for CanonicalColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Rgb(c) => write!(f, "#{:02X}{:02X}{:02X}", c.red, c.green, c.blue),
            Self::Verbatim(s) => write!(f, "{}", s),
        }
    }
}

/// Parsing never fails: anything unrecognized becomes `Verbatim`.
impl FromStr for CanonicalColour {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(crate::parser::normalize_colour(s))
    }
}

impl Serialize for CanonicalColour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
