//! Accuracy measurement using perceptual color difference
//!
//! CIEDE2000 (ΔE2000) is the metric: 1.0 is roughly the smallest
//! difference a trained observer can see.

use labrat_core::Lab;
use palette::color_difference::Ciede2000;
use palette::white_point::D65;

/// Statistics from a ΔE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    pub mean: f64,
    pub max: f64,
    /// 95th percentile
    pub p95: f64,
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a set of ΔE samples. Empty input gives all zeros.
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        samples.sort_by(f64::total_cmp);

        let count = samples.len();
        let mean = if count == 0 {
            0.0
        } else {
            samples.iter().sum::<f64>() / count as f64
        };
        let max = samples.last().copied().unwrap_or(0.0);
        let p95 = samples
            .get((count as f64 * 0.95) as usize)
            .copied()
            .unwrap_or(max);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Numerically the same color everywhere (ΔE < 0.01)
    pub fn is_exact(&self) -> bool {
        self.max < 0.01
    }

    /// Imperceptible everywhere (ΔE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }
}

/// ΔE2000 between two Lab colors
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    let a = palette::Lab::<D65, f64>::new(lab1.l, lab1.a, lab1.b);
    let b = palette::Lab::<D65, f64>::new(lab2.l, lab2.a, lab2.b);
    a.difference(b)
}

/// Pairwise ΔE2000 between two equally long Lab lists
pub fn compare_labs(reference: &[Lab], result: &[Lab]) -> DeltaEStats {
    assert_eq!(reference.len(), result.len());
    DeltaEStats::from_samples(
        reference
            .iter()
            .zip(result)
            .map(|(r, o)| delta_e_2000(*r, *o))
            .collect(),
    )
}
