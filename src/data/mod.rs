//! Sample source: seeded synthetic data and dataset ranges.

pub mod bounds;
pub mod generator;

pub use bounds::{feature_bounds, FeatureBounds};
pub use generator::{generate_data, generate_data_with_rng, label_rule, GENERATED_DIM};
