//! Per-dimension numeric range of a dataset.

use crate::common_types::DataPoint;
use ordered_float::OrderedFloat;
use rand::Rng;

/// Inclusive `(min, max)` range for every feature dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBounds {
    ranges: Vec<(f64, f64)>,
}

impl FeatureBounds {
    /// Builds bounds from explicit ranges.
    ///
    /// # Panics
    /// Panics if any range has `min > max` or a non-finite end.
    pub fn new(ranges: Vec<(f64, f64)>) -> Self {
        for (i, &(lo, hi)) in ranges.iter().enumerate() {
            if !(lo <= hi) || !lo.is_finite() || !hi.is_finite() {
                panic!("Invalid range for dimension {}: [{}, {}]", i, lo, hi);
            }
        }
        FeatureBounds { ranges }
    }

    pub fn dim(&self) -> usize {
        self.ranges.len()
    }

    pub fn ranges(&self) -> &[(f64, f64)] {
        &self.ranges
    }

    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.ranges.len()
            && point
                .iter()
                .zip(self.ranges.iter())
                .all(|(&v, &(lo, hi))| lo <= v && v <= hi)
    }

    /// Draws a point uniformly within the bounds, one dimension at a time.
    /// A degenerate range (`min == max`) yields that single value.
    pub fn sample_uniform<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        self.ranges
            .iter()
            .map(|&(lo, hi)| {
                if lo == hi {
                    return lo;
                }
                // Interpolate instead of using `hi - lo`, which overflows for
                // ranges wider than f64::MAX.
                let t: f64 = rng.gen_range(0.0..=1.0);
                (lo * (1.0 - t) + hi * t).clamp(lo, hi)
            })
            .collect()
    }
}

/// Computes per-dimension min/max over all points, ignoring NaN and infinite
/// values.
///
/// Returns `None` when `data` is empty, when the points disagree on their
/// dimension, or when a dimension holds no finite value.
pub fn feature_bounds<L>(data: &[DataPoint<f64, L>]) -> Option<FeatureBounds> {
    let dim = data.first()?.features.len();
    if data.iter().any(|dp| dp.features.len() != dim) {
        return None;
    }

    let mut ranges = Vec::with_capacity(dim);
    for d in 0..dim {
        let values = data
            .iter()
            .map(|dp| dp.features[d])
            .filter(|v| v.is_finite())
            .map(OrderedFloat);
        let (lo, hi) = values.fold(None, |acc: Option<(OrderedFloat<f64>, OrderedFloat<f64>)>, v| {
            Some(match acc {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            })
        })?;
        ranges.push((lo.0, hi.0));
    }
    Some(FeatureBounds { ranges })
}
