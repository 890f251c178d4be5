//! # labrat - single-color sRGB / XYZ / CIELAB conversions
//!
//! Pure, allocation-free conversions between:
//!
//! - packed `0xRRGGBB` integers and 8-bit sRGB
//! - sRGB and CIE XYZ (D65, 0-100 scale)
//! - XYZ and CIE L*a*b*
//! - the a*/b* plane and a hue/saturation dial
//!
//! plus [`Editor`], a headless model of a color picker that keeps hex,
//! L*a*b* and hue/saturation fields in sync.
//!
//! ## Quick Start
//!
//! ```
//! use labrat_core::codec;
//! use labrat_core::Lab;
//!
//! let lab = codec::lab_from_int(0xFF0000);
//! assert!((lab.l - 53.24).abs() < 0.01);
//!
//! let gray = codec::int_from_lab(Lab::new(50.0, 0.0, 0.0));
//! assert_eq!(gray, 0x777777);
//! ```
//!
//! Every conversion is total: RGB results are clamped into [0, 255], while
//! XYZ and Lab results are never clamped.

pub mod codec;
pub mod color;
pub mod editor;
pub mod error;
pub mod math;

pub use color::{
    D50, D65, Lab, Polar, Rgb, SATURATION_SCALE, WhitePoint, Xyz, normalize_degrees,
};
pub use editor::{Control, Editor, Field, round_display};
pub use error::{Error, ParseError, Result};

/// Version of labrat
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
