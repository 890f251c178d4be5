//! sRGB transfer function
//!
//! IEC 61966-2-1 piecewise curve: a linear toe near black and a 2.4 power
//! segment above it.

/// Encoded value at which the decode curve switches from linear to power
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Linear value at which the encode curve switches from linear to power
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

const LINEAR_SLOPE: f64 = 12.92;
const POWER_OFFSET: f64 = 0.055;
const POWER_SCALE: f64 = 1.055;
const POWER_EXP: f64 = 2.4;

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded value in [0,1] to linear light.
/// Inputs outside [0,1] are not clamped.
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= SRGB_DECODE_THRESHOLD {
        encoded / LINEAR_SLOPE
    } else {
        ((encoded + POWER_OFFSET) / POWER_SCALE).powf(POWER_EXP)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light to an sRGB-encoded value. Negative linear values
/// (out of gamut) stay on the linear toe and come out negative.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= SRGB_ENCODE_THRESHOLD {
        linear * LINEAR_SLOPE
    } else {
        POWER_SCALE * linear.powf(1.0 / POWER_EXP) - POWER_OFFSET
    }
}
