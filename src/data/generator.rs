//! Reproducible synthetic dataset: standard-normal points labelled by which
//! side of the line `x0 + x1 = 0` they fall on.

use crate::common_types::{DataPoint, Label, Sample};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Feature dimension of the generated points.
pub const GENERATED_DIM: usize = 2;

/// Labelling rule for generated points: `One` iff `x[0] + x[1] > 0`.
///
/// A sum of exactly zero is labelled `Zero`.
///
/// # Panics
/// Panics if `features` has fewer than two entries.
pub fn label_rule(features: &[f64]) -> Label {
    assert!(
        features.len() >= GENERATED_DIM,
        "label_rule needs at least {} features, got {}",
        GENERATED_DIM,
        features.len()
    );
    Label::from(features[0] + features[1] > 0.0)
}

/// Draws one standard-normal feature vector from `rng`.
fn draw_point<R: Rng>(rng: &mut R) -> Vec<f64> {
    (0..GENERATED_DIM)
        .map(|_| rng.sample::<f64, _>(StandardNormal))
        .collect()
}

/// Generates `n_samples` labelled points from an already seeded generator.
pub fn generate_data_with_rng<R: Rng>(n_samples: usize, rng: &mut R) -> Vec<Sample<f64>> {
    (0..n_samples)
        .map(|_| {
            let features = draw_point(rng);
            let label = label_rule(&features);
            DataPoint::new(features, label)
        })
        .collect()
}

/// Generates `n_samples` labelled points. The same seed always yields the same
/// sequence.
pub fn generate_data(n_samples: usize, seed: u64) -> Vec<Sample<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let samples = generate_data_with_rng(n_samples, &mut rng);
    let positives = samples.iter().filter(|s| s.label == Label::One).count();
    debug!(
        "generated {} samples with seed {} ({} labelled 1)",
        n_samples, seed, positives
    );
    samples
}
