//! Training and query configuration with the reference defaults.

use crate::data::GENERATED_DIM;
use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fallback points synthesised when the query text is empty.
pub const FALLBACK_POINTS_FOR_EMPTY_INPUT: usize = 3;
/// Number of fallback points synthesised when text was given but none of it parsed.
pub const FALLBACK_POINTS_FOR_UNPARSEABLE_INPUT: usize = 1;

/// How many points the query adapter synthesises when no valid point remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FallbackPolicy {
    pub empty_input: usize,
    pub unparseable_input: usize,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy {
            empty_input: FALLBACK_POINTS_FOR_EMPTY_INPUT,
            unparseable_input: FALLBACK_POINTS_FOR_UNPARSEABLE_INPUT,
        }
    }
}

/// Everything needed to build, train and query a perceptron end to end.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainingConfig {
    pub input_size: usize,
    pub learning_rate: f64,
    pub epochs: usize,
    pub n_samples: usize,
    /// Seed of the training data generator.
    pub seed: u64,
    /// Seed of the fallback point sampler.
    pub fallback_seed: u64,
    pub fallback: FallbackPolicy,
}

impl TrainingConfig {
    pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
    pub const DEFAULT_EPOCHS: usize = 20;
    pub const DEFAULT_N_SAMPLES: usize = 200;
    pub const DEFAULT_SEED: u64 = 42;

    /// Checks the values a `Perceptron` constructor would otherwise panic on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_size == 0 {
            return Err(ConfigError::ZeroInputSize);
        }
        if !(self.learning_rate > 0.0) {
            return Err(ConfigError::NonPositiveLearningRate(self.learning_rate));
        }
        if self.epochs == 0 {
            return Err(ConfigError::ZeroEpochs);
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            input_size: GENERATED_DIM,
            learning_rate: Self::DEFAULT_LEARNING_RATE,
            epochs: Self::DEFAULT_EPOCHS,
            n_samples: Self::DEFAULT_N_SAMPLES,
            seed: Self::DEFAULT_SEED,
            fallback_seed: Self::DEFAULT_SEED,
            fallback: FallbackPolicy::default(),
        }
    }
}
