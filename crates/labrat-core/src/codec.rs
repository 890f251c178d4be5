//! Flat conversion functions
//!
//! One pure function per pairwise conversion, for callers that want to
//! compose the chain themselves:
//!
//! ```text
//! u32 ⇄ Rgb ⇄ Xyz ⇄ Lab
//!                    └─ (a*, b*) ⇄ Polar
//! ```
//!
//! None of these fail. RGB outputs are clamped into [0, 255]; XYZ, Lab and
//! polar outputs are returned unclamped.

use crate::color::{Lab, Polar, Rgb, Xyz};

/// Unpack `0xRRGGBB`. Bits above the low 24 are ignored.
#[inline]
pub fn rgb_from_int(n: u32) -> Rgb {
    Rgb::from_packed(n)
}

/// Pack as `R * 65536 + G * 256 + B`
#[inline]
pub fn int_from_rgb(rgb: Rgb) -> u32 {
    rgb.to_packed()
}

/// sRGB → XYZ (0-100 scale, D65)
#[inline]
pub fn xyz_from_rgb(rgb: Rgb) -> Xyz {
    Xyz::from_rgb(rgb)
}

/// XYZ → sRGB, rounded and clamped per channel
#[inline]
pub fn rgb_from_xyz(xyz: Xyz) -> Rgb {
    xyz.to_rgb()
}

/// XYZ → L*a*b* relative to D65
#[inline]
pub fn lab_from_xyz(xyz: Xyz) -> Lab {
    Lab::from_xyz(xyz)
}

/// L*a*b* → XYZ relative to D65
#[inline]
pub fn xyz_from_lab(lab: Lab) -> Xyz {
    lab.to_xyz()
}

/// (a*, b*) → hue in [0, 360) and saturation
#[inline]
pub fn polar_from_ab(a: f64, b: f64) -> Polar {
    Polar::from_ab(a, b)
}

/// Hue (degrees) and saturation → (a*, b*)
#[inline]
pub fn ab_from_polar(hue_degrees: f64, saturation: f64) -> (f64, f64) {
    Polar::new(hue_degrees, saturation).to_ab()
}

/// Packed color → L*a*b*, the display direction
pub fn lab_from_int(n: u32) -> Lab {
    lab_from_xyz(xyz_from_rgb(rgb_from_int(n)))
}

/// L*a*b* → packed color, the preview direction
pub fn int_from_lab(lab: Lab) -> u32 {
    int_from_rgb(rgb_from_xyz(xyz_from_lab(lab)))
}
