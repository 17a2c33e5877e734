//! Core perceptron classifier: weight vector with folded-in bias, step
//! activation and the online update rule.

use crate::common_types::{Label, Sample};
use log::{debug, info};
use num_traits::Float;
use std::fmt::Debug;

/// Step activation: `One` for a non-negative activation, `Zero` otherwise.
///
/// An activation of exactly zero maps to `One`.
pub fn step<F: Float>(activation: F) -> Label {
    Label::from(activation >= F::zero())
}

/// Dot product of the weights with the augmented vector `[1, x[0], ..., x[D-1]]`.
fn augmented_dot<F: Float>(weights: &[F], features: &[F]) -> F {
    // weights[0] is the bias, multiplied by the constant 1
    weights[1..]
        .iter()
        .zip(features.iter())
        .fold(weights[0], |acc, (&w, &x)| acc + w * x)
}

/// Per-epoch record of a training run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrainingHistory {
    /// Number of samples that triggered a weight update, one entry per epoch.
    pub mistakes_per_epoch: Vec<usize>,
}

impl TrainingHistory {
    pub fn epochs(&self) -> usize {
        self.mistakes_per_epoch.len()
    }

    /// Mistakes made during the last executed epoch, `None` if no epoch ran.
    pub fn final_mistakes(&self) -> Option<usize> {
        self.mistakes_per_epoch.last().copied()
    }

    /// First epoch (0-based) in which no sample was misclassified.
    pub fn first_clean_epoch(&self) -> Option<usize> {
        self.mistakes_per_epoch.iter().position(|&m| m == 0)
    }
}

/// Binary linear classifier trained with the perceptron rule.
///
/// The weight vector has `input_size + 1` entries: index 0 is the bias and
/// indices `1..=input_size` pair with the feature dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron<F>
where
    F: Float + Debug,
{
    input_size: usize,
    learning_rate: F,
    weights: Vec<F>,
}

impl<F> Perceptron<F>
where
    F: Float + Debug,
{
    /// Creates a perceptron with all-zero weights.
    ///
    /// # Panics
    /// Panics if `input_size` is 0 or `learning_rate` is not strictly positive.
    pub fn new(input_size: usize, learning_rate: F) -> Self {
        if input_size == 0 {
            panic!("input_size must be greater than 0.");
        }
        if !(learning_rate > F::zero()) {
            panic!("Learning rate must be strictly positive.");
        }

        Perceptron {
            input_size,
            learning_rate,
            weights: vec![F::zero(); input_size + 1],
        }
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    /// Full weight vector, bias first.
    pub fn weights(&self) -> &[F] {
        &self.weights
    }

    pub fn bias(&self) -> F {
        self.weights[0]
    }

    fn check_dim(&self, features: &[F]) {
        if features.len() != self.input_size {
            panic!(
                "Feature vector has dimension {} but the perceptron expects {}.",
                features.len(),
                self.input_size
            );
        }
    }

    /// Raw activation `w · x̂` for a feature vector.
    ///
    /// # Panics
    /// Panics if `features.len() != input_size`.
    pub fn decision_value(&self, features: &[F]) -> F {
        self.check_dim(features);
        augmented_dot(&self.weights, features)
    }

    /// Predicts the label of a single feature vector. Does not touch the weights.
    ///
    /// # Panics
    /// Panics if `features.len() != input_size`.
    pub fn predict(&self, features: &[F]) -> Label {
        step(self.decision_value(features))
    }

    /// Predicts labels for a batch of feature vectors, in order.
    pub fn predict_batch(&self, data: &[Vec<F>]) -> Vec<Label> {
        data.iter().map(|x| self.predict(x)).collect()
    }

    /// Fraction of samples whose predicted label matches the stored label.
    /// Returns 0.0 for an empty slice.
    pub fn accuracy(&self, samples: &[Sample<F>]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let correct = samples
            .iter()
            .filter(|s| self.predict(&s.features) == s.label)
            .count();
        correct as f64 / samples.len() as f64
    }

    /// Runs exactly `epochs` passes of the online perceptron rule over `samples`,
    /// in the given order.
    ///
    /// Each update is visible to the next sample of the same pass. There is no
    /// early stopping, even once every sample is classified correctly.
    ///
    /// # Panics
    /// Panics if any sample's dimension differs from `input_size`.
    pub fn train(&mut self, samples: &[Sample<F>], epochs: usize) -> TrainingHistory {
        let mut history = TrainingHistory {
            mistakes_per_epoch: Vec::with_capacity(epochs),
        };

        for epoch in 0..epochs {
            let mut mistakes = 0;
            for sample in samples {
                let prediction = self.predict(&sample.features);
                let error = sample.label.as_i8() - prediction.as_i8();
                if error == 0 {
                    continue;
                }
                mistakes += 1;

                let scale = if error > 0 { self.learning_rate } else { -self.learning_rate };
                self.weights[0] = self.weights[0] + scale;
                for (w, &x) in self.weights[1..].iter_mut().zip(sample.features.iter()) {
                    *w = *w + scale * x;
                }
            }
            debug!("epoch {}/{}: {} mistakes", epoch + 1, epochs, mistakes);
            history.mistakes_per_epoch.push(mistakes);
        }

        info!(
            "trained perceptron for {} epochs on {} samples, final weights {:?}",
            epochs,
            samples.len(),
            self.weights
        );
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_types::DataPoint;

    fn quadrant_samples() -> Vec<Sample<f64>> {
        vec![
            DataPoint::new(vec![1.0, 1.0], Label::One),
            DataPoint::new(vec![-1.0, -1.0], Label::Zero),
            DataPoint::new(vec![1.0, -1.0], Label::Zero),
            DataPoint::new(vec![-1.0, 1.0], Label::Zero),
        ]
    }

    #[test]
    fn test_new_zero_weights_with_bias_slot() {
        let p = Perceptron::<f64>::new(2, 0.1);
        assert_eq!(p.weights(), &[0.0, 0.0, 0.0]);
        assert_eq!(p.input_size(), 2);
        assert_eq!(p.learning_rate(), 0.1);
        assert_eq!(p.bias(), 0.0);
    }

    #[test]
    #[should_panic(expected = "Learning rate must be strictly positive.")]
    fn test_new_invalid_learning_rate_zero() {
        Perceptron::<f64>::new(2, 0.0);
    }

    #[test]
    #[should_panic(expected = "Learning rate must be strictly positive.")]
    fn test_new_invalid_learning_rate_nan() {
        Perceptron::<f64>::new(2, f64::NAN);
    }

    #[test]
    #[should_panic(expected = "input_size must be greater than 0.")]
    fn test_new_invalid_input_size() {
        Perceptron::<f64>::new(0, 0.1);
    }

    #[test]
    fn test_step_boundary_is_one() {
        assert_eq!(step(0.0_f64), Label::One);
        assert_eq!(step(-0.0_f64), Label::One);
        assert_eq!(step(1e-12_f64), Label::One);
        assert_eq!(step(-1e-12_f64), Label::Zero);
    }

    #[test]
    fn test_untrained_predicts_one_everywhere() {
        let p = Perceptron::<f64>::new(2, 0.1);
        for x in [[0.0, 0.0], [-5.0, -5.0], [3.0, -7.5], [1e6, -1e6]] {
            assert_eq!(p.predict(&x), Label::One);
        }
    }

    #[test]
    fn test_predict_on_exact_zero_activation() {
        let mut p = Perceptron::<f64>::new(2, 1.0);
        // Misclassify (1, 1) labelled Zero once: w = [-1, -1, -1]
        p.train(&[DataPoint::new(vec![1.0, 1.0], Label::Zero)], 1);
        assert_eq!(p.weights(), &[-1.0, -1.0, -1.0]);
        // -1 + 1 + 0 = 0
        assert_eq!(p.decision_value(&[-1.0, 0.0]), 0.0);
        assert_eq!(p.predict(&[-1.0, 0.0]), Label::One);
    }

    #[test]
    fn test_quadrant_dataset_converges_within_ten_epochs() {
        let samples = quadrant_samples();
        let mut p = Perceptron::<f64>::new(2, 1.0);
        let history = p.train(&samples, 10);

        assert_eq!(history.epochs(), 10);
        assert_eq!(history.final_mistakes(), Some(0));
        for s in &samples {
            assert_eq!(p.predict(&s.features), s.label);
        }
        assert_eq!(p.accuracy(&samples), 1.0);
    }

    #[test]
    fn test_online_update_trace() {
        // First epoch by hand with eta = 1:
        // (1,1)/1:   a=0 -> 1, ok
        // (-1,-1)/0: a=0 -> 1, err -1 -> w = [-1, 1, 1]
        // (1,-1)/0:  a=-1 -> 0, ok
        // (-1,1)/0:  a=-1 -> 0, ok
        let mut p = Perceptron::<f64>::new(2, 1.0);
        let history = p.train(&quadrant_samples(), 1);
        assert_eq!(p.weights(), &[-1.0, 1.0, 1.0]);
        assert_eq!(history.mistakes_per_epoch, vec![1]);
    }

    #[test]
    fn test_runs_all_epochs_without_early_stop() {
        let mut p = Perceptron::<f64>::new(2, 1.0);
        let history = p.train(&quadrant_samples(), 25);
        assert_eq!(history.epochs(), 25);
        assert!(history.first_clean_epoch().is_some());
    }

    #[test]
    fn test_zero_epochs_leaves_weights_untouched() {
        let mut p = Perceptron::<f64>::new(2, 0.5);
        let history = p.train(&quadrant_samples(), 0);
        assert_eq!(history.epochs(), 0);
        assert_eq!(history.final_mistakes(), None);
        assert_eq!(p.weights(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_weight_shape_is_preserved() {
        let mut p = Perceptron::<f64>::new(3, 0.1);
        let samples = vec![
            DataPoint::new(vec![1.0, 2.0, 3.0], Label::Zero),
            DataPoint::new(vec![-1.0, 0.5, 0.0], Label::One),
        ];
        for _ in 0..3 {
            p.train(&samples, 4);
            assert_eq!(p.weights().len(), 4);
        }
    }

    #[test]
    fn test_learning_rate_scales_updates() {
        let sample = [DataPoint::new(vec![2.0, -4.0], Label::Zero)];
        let mut p = Perceptron::<f64>::new(2, 0.25);
        p.train(&sample, 1);
        assert_eq!(p.weights(), &[-0.25, -0.5, 1.0]);
    }

    #[test]
    fn test_positive_error_moves_weights_toward_sample() {
        let samples = [
            DataPoint::new(vec![1.0, 1.0], Label::Zero),
            DataPoint::new(vec![3.0, 2.0], Label::One),
        ];
        let mut p = Perceptron::<f32>::new(2, 0.5_f32);
        let history = p.train(&samples, 1);
        // (1,1)/0: a=0 -> 1, error -1 -> w = [-0.5, -0.5, -0.5]
        // (3,2)/1: a=-3 -> 0, error +1 -> w = [0.0, 1.0, 0.5]
        assert_eq!(history.mistakes_per_epoch, vec![2]);
        assert_eq!(p.weights(), &[0.0_f32, 1.0, 0.5]);
    }

    #[test]
    fn test_generic_over_f32() {
        let samples: Vec<Sample<f32>> = vec![
            DataPoint::new(vec![1.0, 1.0], Label::One),
            DataPoint::new(vec![-1.0, -1.0], Label::Zero),
        ];
        let mut p = Perceptron::<f32>::new(2, 0.5_f32);
        p.train(&samples, 5);
        assert_eq!(p.predict_batch(&[vec![2.0, 2.0], vec![-2.0, -2.0]]), vec![Label::One, Label::Zero]);
    }

    #[test]
    #[should_panic(expected = "Feature vector has dimension 3 but the perceptron expects 2.")]
    fn test_predict_dimension_mismatch_panics() {
        let p = Perceptron::<f64>::new(2, 0.1);
        p.predict(&[1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "Feature vector has dimension 1 but the perceptron expects 2.")]
    fn test_train_dimension_mismatch_panics() {
        let mut p = Perceptron::<f64>::new(2, 0.1);
        p.train(&[DataPoint::new(vec![1.0], Label::One)], 1);
    }

    #[test]
    fn test_accuracy_empty_is_zero() {
        let p = Perceptron::<f64>::new(2, 0.1);
        assert_eq!(p.accuracy(&[]), 0.0);
    }
}
