//! CIE XYZ Color Space
//!
//! The linear intermediate between sRGB and L*a*b*. Values use the 0-100
//! scale, so sRGB white lands on Y = 100.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::math::{SRGB_TO_XYZ, XYZ_TO_SRGB, srgb_gamma_decode, srgb_gamma_encode};

/// CIE 1931 XYZ tristimulus values (0-100 scale)
///
/// Unbounded: out-of-gamut colors may produce negative or >100 components
/// and they are passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    /// Luminance
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert from 8-bit sRGB
    ///
    /// Normalizes to [0,1], removes the sRGB transfer function, then applies
    /// the sRGB/D65 primaries matrix and scales to 0-100.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let linear = [
            srgb_gamma_decode(r),
            srgb_gamma_decode(g),
            srgb_gamma_decode(b),
        ];
        Self::from_array(SRGB_TO_XYZ * linear) * 100.0
    }

    /// Convert to 8-bit sRGB
    ///
    /// Out-of-gamut results are clamped per channel into [0, 255].
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = XYZ_TO_SRGB * (*self * 0.01).to_array();
        Rgb::from_unit([
            srgb_gamma_encode(r),
            srgb_gamma_encode(g),
            srgb_gamma_encode(b),
        ])
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Xyz> for Rgb {
    fn from(xyz: Xyz) -> Self {
        xyz.to_rgb()
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl Mul<f64> for Xyz {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::D65;

    #[test]
    fn test_black() {
        assert_eq!(Xyz::from_rgb(Rgb::BLACK), Xyz::new(0.0, 0.0, 0.0));
        assert_eq!(Xyz::new(0.0, 0.0, 0.0).to_rgb(), Rgb::BLACK);
    }

    #[test]
    fn test_white_is_d65() {
        let white = Xyz::from_rgb(Rgb::WHITE);
        assert!(white.approx_eq(&D65.xyz, 1e-4), "{:?}", white);
        assert_eq!(white.to_rgb(), Rgb::WHITE);
    }

    #[test]
    fn test_red_primary() {
        let red = Xyz::from_rgb(Rgb::new(255, 0, 0));
        assert!(red.approx_eq(&Xyz::new(41.24564, 21.26729, 1.93339), 1e-9));
    }

    #[test]
    fn test_primaries_roundtrip() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(128, 128, 128),
            Rgb::new(1, 2, 3),
        ] {
            assert_eq!(Xyz::from_rgb(rgb).to_rgb(), rgb);
        }
    }

    #[test]
    fn test_out_of_gamut_clamps() {
        assert_eq!(Xyz::new(200.0, 200.0, 200.0).to_rgb(), Rgb::WHITE);
        assert_eq!(Xyz::new(-10.0, -10.0, -10.0).to_rgb(), Rgb::BLACK);
    }

    #[test]
    fn test_scale() {
        let a = Xyz::new(1.0, 2.0, 3.0);
        assert!((a * 2.0).approx_eq(&Xyz::new(2.0, 4.0, 6.0), 1e-10));
    }
}
