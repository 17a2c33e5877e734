//! Binary linear classifier trained with the perceptron rule.

pub mod perceptron;

pub use perceptron::{step, Perceptron, TrainingHistory};
