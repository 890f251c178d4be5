//! Test color generation
//!
//! Deterministic sets of single colors covering the interesting parts of
//! the sRGB cube and of the UI's L*a*b* box.

use labrat_core::{Lab, Rgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// All 256 grays
    Grayscale,
    /// Uniformly random colors with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// Saturated colors near the gamut boundary
    GamutBoundary,
    /// Channels in the linear toe of the transfer function (0..=10)
    NearBlack,
}

/// Generate `count` colors of a pattern
///
/// Fixed palettes repeat cyclically to fill `count`.
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<Rgb> {
    match pattern {
        TestPattern::ColorCube => cycle(
            &[
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ],
            count,
        ),
        TestPattern::HueRamp => (0..count)
            .map(|i| {
                let hue = (i as f32 / count as f32) * 360.0;
                hsl_to_rgb(hue, 1.0, 0.5)
            })
            .collect(),
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = (i % 256) as u8;
                Rgb::new(v, v, v)
            })
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Rgb::from_packed(rng.gen_range(0..=0xFF_FF_FF)))
                .collect()
        }
        TestPattern::SkinTones => cycle(
            &[
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ],
            count,
        ),
        TestPattern::GamutBoundary => cycle(
            &[
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 128, 0],
                [128, 0, 255],
            ],
            count,
        ),
        TestPattern::NearBlack => (0..count)
            .map(|i| {
                let i = i as u8;
                Rgb::new(i % 11, (i / 11) % 11, (i / 121) % 11)
            })
            .collect(),
    }
}

/// Random L*a*b* inside the UI box: L* in [0,100], a*/b* in [-100,100]
pub fn random_labs(seed: u64, count: usize) -> Vec<Lab> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Lab::new(
                rng.gen_range(0.0..=100.0),
                rng.gen_range(-100.0..=100.0),
                rng.gen_range(-100.0..=100.0),
            )
        })
        .collect()
}

fn cycle(colors: &[[u8; 3]], count: usize) -> Vec<Rgb> {
    colors.iter().cycle().take(count).map(|&c| Rgb::from(c)).collect()
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
