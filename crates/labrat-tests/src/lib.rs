//! # labrat-tests
//!
//! Parity and property testing for labrat-core.
//!
//! This crate provides:
//! - reference conversions through the `palette` crate
//! - ΔE2000 accuracy statistics
//! - deterministic test color patterns
//!
//! The integration tests under `tests/` cover:
//!
//! 1. **Parity**: L*a*b* and hue against palette
//! 2. **Exhaustive round trips**: all 2^24 packed colors
//! 3. **Codec properties**: fixed points, clamping, polar wrap-around
//! 4. **Editor binding**: field synchronization scenarios

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, compare_labs, delta_e_2000};
pub use patterns::{TestPattern, generate_pattern, random_labs};
