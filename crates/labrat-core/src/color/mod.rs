//! Color value types
//!
//! This module provides:
//! - 8-bit sRGB with packed 24-bit and hex forms
//! - CIE XYZ on the 0-100 scale
//! - CIELAB (L*a*b*)
//! - the hue/saturation view of the a*/b* plane
//! - reference white points

pub mod lab;
pub mod polar;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use lab::Lab;
pub use polar::{Polar, SATURATION_SCALE, normalize_degrees};
pub use rgb::Rgb;
pub use white_point::{D50, D65, WhitePoint};
pub use xyz::Xyz;
