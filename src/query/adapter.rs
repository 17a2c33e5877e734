//! Classifies user-supplied points with a trained perceptron, falling back to
//! random points inside the training range when none are usable.

use crate::common_types::{Label, Sample};
use crate::config::FallbackPolicy;
use crate::data::{feature_bounds, FeatureBounds};
use crate::error::QueryError;
use crate::perceptron::Perceptron;
use crate::query::parser::parse_points;
use log::{info, warn};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a classified point came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointOrigin {
    User,
    Fallback,
}

/// A query point together with its predicted label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassifiedPoint {
    pub features: Vec<f64>,
    pub label: Label,
    pub origin: PointOrigin,
}

/// Everything a single query produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOutcome {
    pub classified: Vec<ClassifiedPoint>,
    pub rejected: Vec<QueryError>,
}

impl QueryOutcome {
    pub fn used_fallback(&self) -> bool {
        self.classified.iter().any(|p| p.origin == PointOrigin::Fallback)
    }
}

/// Read-only view over a trained model for answering point queries.
#[derive(Debug)]
pub struct QueryAdapter<'a> {
    model: &'a Perceptron<f64>,
    bounds: Option<FeatureBounds>,
    policy: FallbackPolicy,
}

impl<'a> QueryAdapter<'a> {
    /// Builds an adapter whose fallback range is taken from `training_data`.
    pub fn new(model: &'a Perceptron<f64>, training_data: &[Sample<f64>]) -> Self {
        Self::with_bounds(model, feature_bounds(training_data))
    }

    /// Builds an adapter with an explicit fallback range (`None` disables fallback).
    ///
    /// # Panics
    /// Panics if the bounds' dimension differs from the model's input size.
    pub fn with_bounds(model: &'a Perceptron<f64>, bounds: Option<FeatureBounds>) -> Self {
        if let Some(b) = &bounds {
            if b.dim() != model.input_size() {
                panic!(
                    "Fallback bounds have dimension {} but the perceptron expects {}.",
                    b.dim(),
                    model.input_size()
                );
            }
        }
        QueryAdapter {
            model,
            bounds,
            policy: FallbackPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn bounds(&self) -> Option<&FeatureBounds> {
        self.bounds.as_ref()
    }

    fn classify_one(&self, features: Vec<f64>, origin: PointOrigin) -> ClassifiedPoint {
        let label = self.model.predict(&features);
        ClassifiedPoint { features, label, origin }
    }

    /// Synthesises `count` points uniformly inside the training range.
    fn fallback_points<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Vec<f64>> {
        match &self.bounds {
            Some(bounds) => (0..count).map(|_| bounds.sample_uniform(rng)).collect(),
            None => {
                warn!("no training range available, cannot create fallback points");
                Vec::new()
            }
        }
    }

    /// Parses `input`, drops malformed points, and classifies the rest.
    ///
    /// When nothing valid remains, classifies `policy.empty_input` random points
    /// for blank input, or `policy.unparseable_input` when text was given but
    /// none of it parsed. `rng` is only used for those fallback points.
    pub fn classify<R: Rng>(&self, input: &str, rng: &mut R) -> QueryOutcome {
        let parsed = parse_points(input, self.model.input_size());
        for err in &parsed.rejected {
            warn!("discarding point: {}", err);
        }

        let classified = if parsed.points.is_empty() {
            let count = if input.trim().is_empty() {
                self.policy.empty_input
            } else {
                self.policy.unparseable_input
            };
            info!("no valid points given, classifying {} random point(s)", count);
            self.fallback_points(count, rng)
                .into_iter()
                .map(|p| self.classify_one(p, PointOrigin::Fallback))
                .collect()
        } else {
            parsed
                .points
                .into_iter()
                .map(|p| self.classify_one(p, PointOrigin::User))
                .collect()
        };

        QueryOutcome {
            classified,
            rejected: parsed.rejected,
        }
    }
}
