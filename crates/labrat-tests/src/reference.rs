//! Reference conversions through the `palette` crate
//!
//! palette derives its sRGB matrix from the primaries instead of using the
//! seven-decimal IEC constants, so agreement is expected to ~1e-6, not bit
//! for bit.

use labrat_core::{Lab, Rgb};
use palette::convert::FromColorUnclamped;
use palette::white_point::D65;
use palette::{FromColor, Srgb};

type RefLab = palette::Lab<D65, f64>;
type RefLch = palette::Lch<D65, f64>;

fn to_ref(lab: Lab) -> RefLab {
    RefLab::new(lab.l, lab.a, lab.b)
}

/// 8-bit sRGB → L*a*b* (D65)
pub fn lab_from_rgb(rgb: Rgb) -> Lab {
    let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f64>();
    let lab = RefLab::from_color(srgb);
    Lab::new(lab.l, lab.a, lab.b)
}

/// L*a*b* → unclamped, unrounded sRGB channels in [0, 1] for in-gamut input
pub fn unit_rgb_from_lab(lab: Lab) -> [f64; 3] {
    let srgb = Srgb::<f64>::from_color_unclamped(to_ref(lab));
    [srgb.red, srgb.green, srgb.blue]
}

/// LCh hue in [0, 360)
pub fn hue_degrees(lab: Lab) -> f64 {
    RefLch::from_color(to_ref(lab)).hue.into_positive_degrees()
}

/// LCh chroma, the unscaled radius of (a*, b*)
pub fn chroma(lab: Lab) -> f64 {
    RefLch::from_color(to_ref(lab)).chroma
}
