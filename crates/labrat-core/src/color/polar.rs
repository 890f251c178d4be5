//! Hue/saturation view over the a*/b* plane
//!
//! A dial-style control: hue is the angle of (a*, b*) in degrees and
//! saturation its length divided by [`SATURATION_SCALE`], which puts
//! typical UI chroma on a 0-100 scale.

use serde::{Deserialize, Serialize};

/// Divisor between chroma and saturation, an approximation of √2
pub const SATURATION_SCALE: f64 = 1.41;

/// Hue (degrees, [0, 360)) and saturation (≥ 0) of an a*/b* pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Polar {
    pub hue: f64,
    pub saturation: f64,
}

impl Polar {
    #[inline]
    pub const fn new(hue: f64, saturation: f64) -> Self {
        Self { hue, saturation }
    }

    /// Derive from a*/b*
    ///
    /// (0, 0) has no defined angle and reports hue 0.
    pub fn from_ab(a: f64, b: f64) -> Self {
        Self {
            hue: normalize_degrees(b.atan2(a).to_degrees()),
            saturation: a.hypot(b) / SATURATION_SCALE,
        }
    }

    /// Back to (a*, b*)
    ///
    /// Any hue is accepted; angles outside [0, 360) wrap naturally.
    pub fn to_ab(&self) -> (f64, f64) {
        let radius = self.saturation * SATURATION_SCALE;
        let (sin, cos) = self.hue.to_radians().sin_cos();
        (cos * radius, sin * radius)
    }
}

/// Wrap an angle into [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
