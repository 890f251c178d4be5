//! Round trips over every 24-bit color
//!
//! 2^24 inputs, split across threads with rayon.

use labrat_core::{Rgb, codec};
use rayon::prelude::*;

const ALL_COLORS: std::ops::RangeInclusive<u32> = 0..=0xFF_FF_FF;

#[test]
fn test_pack_unpack_every_color() {
    let mismatches = ALL_COLORS
        .into_par_iter()
        .filter(|&n| codec::int_from_rgb(codec::rgb_from_int(n)) != n)
        .count();
    assert_eq!(mismatches, 0);
}

#[test]
fn test_xyz_roundtrip_every_color() {
    let worst = ALL_COLORS
        .into_par_iter()
        .map(|n| {
            let rgb = codec::rgb_from_int(n);
            let back = codec::rgb_from_xyz(codec::xyz_from_rgb(rgb));
            channel_error(rgb, back)
        })
        .max()
        .unwrap_or(0);
    assert!(worst <= 1, "worst RGB → XYZ → RGB channel error {worst}");
}

#[test]
fn test_lab_roundtrip_sampled() {
    // every 7th color keeps the full chain under a few seconds
    let failures: Vec<u32> = (0..=0xFF_FF_FFu32 / 7)
        .into_par_iter()
        .map(|i| i * 7)
        .filter(|&n| {
            let back = codec::int_from_lab(codec::lab_from_int(n));
            channel_error(codec::rgb_from_int(n), codec::rgb_from_int(back)) > 1
        })
        .collect();
    assert!(failures.is_empty(), "first failures: {:x?}", &failures[..failures.len().min(8)]);
}

fn channel_error(a: Rgb, b: Rgb) -> u8 {
    a.to_array()
        .iter()
        .zip(b.to_array())
        .map(|(&x, y)| x.abs_diff(y))
        .max()
        .unwrap_or(0)
}
