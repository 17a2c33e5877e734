//! This module contains the data structures shared by the sample source, the
//! perceptron and the query adapter.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a single data point, with features and a label.
///
/// - `F`: The type of the features (e.g., `f64`, `f32`).
/// - `L`: The type of the label (usually [`Label`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataPoint<F, L> {
    pub features: Vec<F>,
    pub label: L,
}

impl<F, L> DataPoint<F, L> {
    pub fn new(features: Vec<F>, label: L) -> Self {
        DataPoint { features, label }
    }

    /// Number of feature dimensions of this point.
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

/// A labeled training sample for the binary classifier.
pub type Sample<F> = DataPoint<F, Label>;

/// Binary class label. `Zero` is rendered blue, `One` red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label {
    Zero,
    One,
}

impl Label {
    /// Integer value of the label, used by the perceptron error term.
    pub fn as_i8(self) -> i8 {
        match self {
            Label::Zero => 0,
            Label::One => 1,
        }
    }

    /// Colour name used when presenting the class to a user.
    pub fn color_name(self) -> &'static str {
        match self {
            Label::Zero => "blue",
            Label::One => "red",
        }
    }
}

impl From<bool> for Label {
    fn from(value: bool) -> Self {
        if value { Label::One } else { Label::Zero }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.as_i8() as u8
    }
}

impl TryFrom<i64> for Label {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Zero),
            1 => Ok(Label::One),
            other => Err(other),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}
