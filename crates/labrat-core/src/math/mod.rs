//! Numeric building blocks for the codec
//!
//! - 3x3 matrix operations for linear sRGB↔XYZ
//! - the sRGB transfer function

pub mod gamma;
pub mod matrix;

pub use gamma::{SRGB_DECODE_THRESHOLD, SRGB_ENCODE_THRESHOLD, srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::{Matrix3x3, SRGB_TO_XYZ, XYZ_TO_SRGB};
