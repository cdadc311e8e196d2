//! 8-bit RGB color type
//!
//! [`Color`] is the value every other part of the crate exchanges: the
//! sampler produces one, palette entries carry one, and the matcher
//! measures distances between them.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::error::ParseColorError;

/// A color with three 8-bit sRGB channels and no alpha.
///
/// The canonical text form is `#RRGGBB`. Parsing is case-insensitive and
/// strict: the leading `#` is required and exactly six hex digits must
/// follow. Formatting always produces uppercase digits.
///
/// # Example
///
/// ```
/// use shade_match::Color;
///
/// let copper: Color = "#c9694a".parse().unwrap();
/// assert_eq!(copper, Color::new(0xC9, 0x69, 0x4A));
/// assert_eq!(copper.to_string(), "#C9694A");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Color {
    /// Pure black, `#000000`.
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Pure white, `#FFFFFF`.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as `#RRGGBB` with uppercase hex digits.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns true if `s` is a canonical `#RRGGBB` string.
    ///
    /// Equivalent to matching `^#[0-9A-Fa-f]{6}$`.
    pub fn is_canonical_hex(s: &str) -> bool {
        s.parse::<Color>().is_ok()
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }
        let mut nibbles = [0u8; 6];
        for (slot, c) in nibbles.iter_mut().zip(digits.chars()) {
            *slot = c.to_digit(16).ok_or(ParseColorError::InvalidHex(c))? as u8;
        }

        Ok(Self::new(
            (nibbles[0] << 4) | nibbles[1],
            (nibbles[2] << 4) | nibbles[3],
            (nibbles[4] << 4) | nibbles[5],
        ))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self::from_bytes(pixel.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercase_and_lowercase() {
        let upper: Color = "#C9694A".parse().unwrap();
        let lower: Color = "#c9694a".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, Color::new(201, 105, 74));
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(Color::new(0xA9, 0x40, 0x2C).to_string(), "#A9402C");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::WHITE.to_hex(), "#FFFFFF");
    }

    #[test]
    fn test_missing_hash_rejected() {
        assert_eq!(
            "C9694A".parse::<Color>(),
            Err(ParseColorError::MissingHash)
        );
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!("#C9694".parse::<Color>(), Err(ParseColorError::InvalidLength(5)));
        assert_eq!(
            "#C9694AA".parse::<Color>(),
            Err(ParseColorError::InvalidLength(7))
        );
        assert_eq!("#".parse::<Color>(), Err(ParseColorError::InvalidLength(0)));
        // Shorthand is not canonical
        assert_eq!("#F00".parse::<Color>(), Err(ParseColorError::InvalidLength(3)));
    }

    #[test]
    fn test_non_hex_rejected() {
        assert_eq!("#zzzzzz".parse::<Color>(), Err(ParseColorError::InvalidHex('z')));
        assert_eq!("#GG0000".parse::<Color>(), Err(ParseColorError::InvalidHex('G')));
        assert_eq!("#+F0000".parse::<Color>(), Err(ParseColorError::InvalidHex('+')));
    }

    #[test]
    fn test_surrounding_whitespace_rejected() {
        assert!(" #C9694A".parse::<Color>().is_err());
        assert!("#C9694A ".parse::<Color>().is_err());
    }

    #[test]
    fn test_is_canonical_hex() {
        assert!(Color::is_canonical_hex("#EDA57C"));
        assert!(Color::is_canonical_hex("#eda57c"));
        assert!(!Color::is_canonical_hex("EDA57C"));
        assert!(!Color::is_canonical_hex("#EDA57"));
        assert!(!Color::is_canonical_hex(""));
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::new(0xF8, 0xBF, 0x9A)).unwrap();
        assert_eq!(json, "\"#F8BF9A\"");

        let back: Color = serde_json::from_str("\"#f8bf9a\"").unwrap();
        assert_eq!(back, Color::new(0xF8, 0xBF, 0x9A));

        assert!(serde_json::from_str::<Color>("\"not a color\"").is_err());
    }

    #[test]
    fn test_from_image_pixel() {
        let pixel = image::Rgb([1u8, 2, 3]);
        assert_eq!(Color::from(pixel), Color::new(1, 2, 3));
    }
}
