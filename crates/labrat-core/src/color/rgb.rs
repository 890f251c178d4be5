//! 8-bit sRGB colors and their packed 24-bit / hex forms

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Number of hex digits in a `#rrggbb` color
const HEX_DIGITS: usize = 6;

/// Gamma-encoded sRGB color, one byte per channel
///
/// Channels are always in [0, 255]; conversions that can overshoot clamp
/// before constructing an `Rgb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack `0xRRGGBB`. Bits above the low 24 are ignored.
    #[inline]
    pub const fn from_packed(n: u32) -> Self {
        Self {
            r: ((n >> 16) & 0xFF) as u8,
            g: ((n >> 8) & 0xFF) as u8,
            b: (n & 0xFF) as u8,
        }
    }

    /// Pack as `R * 65536 + G * 256 + B`
    #[inline]
    pub const fn to_packed(&self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive)
    pub fn from_hex(text: &str) -> Result<Self, ParseError> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.is_empty() {
            return Err(ParseError::Empty);
        }
        if digits.len() != HEX_DIGITS {
            return Err(ParseError::InvalidLength {
                expected: HEX_DIGITS,
                actual: digits.len(),
            });
        }
        // from_str_radix alone would let a leading '+' through
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidHex(digits.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_packed)
            .map_err(|_| ParseError::InvalidHex(digits.to_string()))
    }

    /// Render as `#rrggbb` in lowercase
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.to_packed())
    }

    /// Channels normalized to [0, 1]
    #[inline]
    pub fn to_unit(&self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Scale [0, 1] channels to bytes, rounding and clamping each one.
    /// A NaN channel becomes 0.
    #[inline]
    pub fn from_unit(unit: [f64; 3]) -> Self {
        Self {
            r: unit_to_u8(unit[0]),
            g: unit_to_u8(unit[1]),
            b: unit_to_u8(unit[2]),
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[inline]
fn unit_to_u8(c: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_packed())
    }
}

impl FromStr for Rgb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<Rgb> for u32 {
    fn from(rgb: Rgb) -> Self {
        rgb.to_packed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_layout() {
        let rgb = Rgb::from_packed(0x12_34_56);
        assert_eq!(rgb, Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(rgb.to_packed(), 0x123456);
        assert_eq!(Rgb::new(1, 2, 3).to_packed(), 65536 + 2 * 256 + 3);
    }

    #[test]
    fn test_packed_ignores_high_bits() {
        assert_eq!(Rgb::from_packed(0xFF_00_00_00), Rgb::BLACK);
        assert_eq!(Rgb::from_packed(0x01_FF_FF_FF), Rgb::WHITE);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff8000".parse::<Rgb>(), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("FF8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("#000000"), Ok(Rgb::BLACK));
    }

    #[test]
    fn test_parse_hex_rejects() {
        assert_eq!(Rgb::from_hex("#"), Err(ParseError::Empty));
        assert_eq!(Rgb::from_hex(""), Err(ParseError::Empty));
        assert_eq!(
            Rgb::from_hex("#fff"),
            Err(ParseError::InvalidLength {
                expected: 6,
                actual: 3
            })
        );
        assert_eq!(
            Rgb::from_hex("#fffffff"),
            Err(ParseError::InvalidLength {
                expected: 6,
                actual: 7
            })
        );
        assert!(matches!(
            Rgb::from_hex("#gg0000"),
            Err(ParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Rgb::from_hex("+12345"),
            Err(ParseError::InvalidHex(_))
        ));
        // multi-byte characters count as bytes, never as digits
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#ff8000");
        assert_eq!(Rgb::BLACK.to_string(), "#000000");
        assert_eq!(Rgb::new(0, 0, 1).to_hex(), "#000001");
    }

    #[test]
    fn test_unit_clamps() {
        assert_eq!(Rgb::from_unit([1.5, -0.2, 0.5]), Rgb::new(255, 0, 128));
        assert_eq!(Rgb::from_unit([f64::NAN, f64::INFINITY, f64::NEG_INFINITY]), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Rgb::new(255, 128, 0)).unwrap();
        assert_eq!(json, r#"{"r":255,"g":128,"b":0}"#);
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(255, 128, 0));
        assert!(serde_json::from_str::<Rgb>(r#"{"r":256,"g":0,"b":0}"#).is_err());
    }

    #[test]
    fn test_unit_roundtrip() {
        for v in 0..=255u8 {
            let rgb = Rgb::new(v, 255 - v, v / 2);
            assert_eq!(Rgb::from_unit(rgb.to_unit()), rgb);
        }
    }
}
