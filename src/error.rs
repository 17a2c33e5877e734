//! Recoverable error types of the crate.
//!
//! Contract violations (wrong feature dimension, invalid constructor arguments)
//! are not represented here: they panic at the call site.

use std::num::ParseFloatError;
use thiserror::Error;

/// A query point descriptor that could not be turned into a feature vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("point '{token}' has {found} comma-separated values, expected {expected}")]
    WrongArity {
        token: String,
        expected: usize,
        found: usize,
    },
    #[error("point '{token}' contains an invalid number: {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

impl QueryError {
    /// The raw text of the rejected point.
    pub fn token(&self) -> &str {
        match self {
            QueryError::WrongArity { token, .. } | QueryError::InvalidNumber { token, .. } => token,
        }
    }
}

/// Invalid training configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("learning rate must be strictly positive, got {0}")]
    NonPositiveLearningRate(f64),
    #[error("epochs must be greater than 0")]
    ZeroEpochs,
    #[error("input size must be greater than 0")]
    ZeroInputSize,
}
