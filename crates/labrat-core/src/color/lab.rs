//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually uniform color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! Nothing here is clamped. Out-of-gamut inputs give coordinates outside
//! the conventional ranges and they are returned as computed.

use serde::{Deserialize, Serialize};

use crate::color::{D65, Polar, WhitePoint, Xyz};

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (UI range -100 to 100)
    pub a: f64,
    /// Blue-yellow axis (UI range -100 to 100)
    pub b: f64,
}

impl Lab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert from XYZ relative to D65
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self::from_xyz_with_white(xyz, &D65)
    }

    /// Convert from XYZ relative to a specific white point
    pub fn from_xyz_with_white(xyz: Xyz, white: &WhitePoint) -> Self {
        let fx = lab_f(xyz.x / white.xyz.x);
        let fy = lab_f(xyz.y / white.xyz.y);
        let fz = lab_f(xyz.z / white.xyz.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert to XYZ relative to D65
    pub fn to_xyz(&self) -> Xyz {
        self.to_xyz_with_white(&D65)
    }

    /// Convert to XYZ relative to a specific white point
    pub fn to_xyz_with_white(&self, white: &WhitePoint) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            lab_f_inv(fx) * white.xyz.x,
            lab_f_inv(fy) * white.xyz.y,
            lab_f_inv(fz) * white.xyz.z,
        )
    }

    /// Hue/saturation view of the a*/b* plane
    #[inline]
    pub fn to_polar(&self) -> Polar {
        Polar::from_ab(self.a, self.b)
    }

    /// Build from a lightness and a hue/saturation pair
    #[inline]
    pub fn from_polar(l: f64, polar: Polar) -> Self {
        let (a, b) = polar.to_ab();
        Self { l, a, b }
    }

    /// Chroma, the unscaled length of (a*, b*)
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

const DELTA: f64 = 6.0 / 29.0;

/// Forward nonlinearity: f(t) for XYZ → Lab
#[inline]
fn lab_f(t: f64) -> f64 {
    const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Inverse nonlinearity: f⁻¹(s) for Lab → XYZ
#[inline]
fn lab_f_inv(s: f64) -> f64 {
    if s > DELTA {
        s * s * s
    } else {
        3.0 * DELTA * DELTA * (s - 4.0 / 29.0)
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        Self::from_xyz(xyz)
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        lab.to_xyz()
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::D50;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_white_is_100() {
        let lab = Lab::from_xyz(D65.xyz);
        assert!((lab.l - 100.0).abs() < EPSILON);
        assert!(lab.a.abs() < EPSILON);
        assert!(lab.b.abs() < EPSILON);
    }

    #[test]
    fn test_black_is_0() {
        let lab = Lab::from_xyz(Xyz::new(0.0, 0.0, 0.0));
        assert!(lab.approx_eq(&Lab::new(0.0, 0.0, 0.0), EPSILON));
    }

    #[test]
    fn test_lightness_ignores_chroma_at_extremes() {
        // L*=0 and L*=100 pin Y regardless of a*/b*
        for (a, b) in [(0.0, 0.0), (80.0, -40.0), (-100.0, 100.0)] {
            assert!(Lab::new(0.0, a, b).to_xyz().y.abs() < EPSILON);
            assert!((Lab::new(100.0, a, b).to_xyz().y - 100.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_roundtrip() {
        let original = Lab::new(50.0, 25.0, -30.0);
        let roundtrip = Lab::from_xyz(original.to_xyz());
        assert!(
            original.approx_eq(&roundtrip, 1e-9),
            "Roundtrip failed: {:?} vs {:?}",
            original,
            roundtrip
        );
    }

    #[test]
    fn test_roundtrip_linear_segment() {
        // Dark colors exercise the linear branch of f and f⁻¹
        let original = Lab::new(5.0, -3.0, 4.0);
        let roundtrip = Lab::from_xyz(original.to_xyz());
        assert!(original.approx_eq(&roundtrip, 1e-9));
    }

    #[test]
    fn test_other_white() {
        let lab = Lab::from_xyz_with_white(D50.xyz, &D50);
        assert!(lab.approx_eq(&Lab::new(100.0, 0.0, 0.0), EPSILON));

        let xyz = Lab::new(100.0, 0.0, 0.0).to_xyz_with_white(&D50);
        assert!(xyz.approx_eq(&D50.xyz, EPSILON));
    }

    #[test]
    fn test_nonlinearity_continuity() {
        let t = DELTA * DELTA * DELTA;
        assert!((lab_f(t) - lab_f(t * (1.0 + 1e-12))).abs() < 1e-9);
        assert!((lab_f_inv(DELTA) - lab_f_inv(DELTA * (1.0 + 1e-12))).abs() < 1e-9);
    }

    #[test]
    fn test_polar_view() {
        let lab = Lab::new(50.0, 0.0, -50.0);
        let polar = lab.to_polar();
        assert!((polar.hue - 270.0).abs() < EPSILON);

        let back = Lab::from_polar(50.0, polar);
        assert!(back.approx_eq(&lab, 1e-9));
    }

    #[test]
    fn test_chroma() {
        assert!((Lab::new(50.0, 3.0, 4.0).chroma() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_nan_propagates() {
        let lab = Lab::from_xyz(Xyz::new(f64::NAN, 50.0, 50.0));
        assert!(lab.a.is_nan());
        assert!(!lab.l.is_nan());
    }
}
