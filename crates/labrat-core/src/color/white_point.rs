//! Reference whites
//!
//! Specified as CIE XYZ on the 0-100 scale (Y = 100), the same scale the
//! codec uses for [`Xyz`].

use crate::color::Xyz;

/// A named reference white
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub name: &'static str,
    pub xyz: Xyz,
}

impl WhitePoint {
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }
}

/// CIE Standard Illuminant D65 (noon daylight, ~6504K)
///
/// The white of sRGB and the reference white of every codec conversion.
pub const D65: WhitePoint = WhitePoint::new("D65", 95.047, 100.0, 108.883);

/// CIE Standard Illuminant D50 (horizon light, ~5003K)
pub const D50: WhitePoint = WhitePoint::new("D50", 96.422, 100.0, 82.521);
