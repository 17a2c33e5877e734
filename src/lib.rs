// Declare the crate modules
pub mod common_types;
pub mod config;
pub mod data;
pub mod error;
pub mod perceptron;
pub mod query;

pub use common_types::{DataPoint, Label, Sample};
pub use config::{FallbackPolicy, TrainingConfig};
pub use data::{feature_bounds, generate_data, label_rule, FeatureBounds};
pub use error::{ConfigError, QueryError};
pub use perceptron::{step, Perceptron, TrainingHistory};
pub use query::{ClassifiedPoint, PointOrigin, QueryAdapter, QueryOutcome};

#[cfg(feature = "python")]
mod python {
    use crate::common_types::{DataPoint, Label};
    use crate::data::{feature_bounds, generate_data};
    use crate::perceptron::Perceptron;
    use crate::query::QueryAdapter;
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn value_error(msg: String) -> PyErr {
        PyErr::new::<PyValueError, _>(msg)
    }

    /// Python-facing wrapper around `Perceptron<f64>`.
    #[pyclass(name = "Perceptron")]
    pub struct PyPerceptron {
        inner: Perceptron<f64>,
    }

    impl PyPerceptron {
        fn check_dim(&self, features: &[f64]) -> PyResult<()> {
            if features.len() != self.inner.input_size() {
                return Err(value_error(format!(
                    "Expected {} features, got {}.",
                    self.inner.input_size(),
                    features.len()
                )));
            }
            Ok(())
        }
    }

    #[pymethods]
    impl PyPerceptron {
        #[new]
        #[pyo3(signature = (input_size, learning_rate = 0.1))]
        fn new(input_size: usize, learning_rate: f64) -> PyResult<Self> {
            // Validate here so Python sees a ValueError instead of a panic
            if input_size == 0 {
                return Err(value_error("input_size must be greater than 0.".to_string()));
            }
            if !(learning_rate > 0.0) {
                return Err(value_error("Learning rate must be strictly positive.".to_string()));
            }
            Ok(PyPerceptron {
                inner: Perceptron::new(input_size, learning_rate),
            })
        }

        /// Trains on parallel lists of feature vectors and 0/1 labels.
        /// Returns the number of mistakes made in each epoch.
        #[pyo3(signature = (features, labels, epochs = 20))]
        fn train(&mut self, features: Vec<Vec<f64>>, labels: Vec<i64>, epochs: usize) -> PyResult<Vec<usize>> {
            if features.len() != labels.len() {
                return Err(value_error(format!(
                    "Got {} feature vectors but {} labels.",
                    features.len(),
                    labels.len()
                )));
            }
            let mut samples = Vec::with_capacity(features.len());
            for (x, y) in features.into_iter().zip(labels) {
                self.check_dim(&x)?;
                let label = Label::try_from(y)
                    .map_err(|v| value_error(format!("Labels must be 0 or 1, got {}.", v)))?;
                samples.push(DataPoint::new(x, label));
            }
            Ok(self.inner.train(&samples, epochs).mistakes_per_epoch)
        }

        fn predict(&self, features: Vec<f64>) -> PyResult<u8> {
            self.check_dim(&features)?;
            Ok(self.inner.predict(&features).into())
        }

        fn decision_value(&self, features: Vec<f64>) -> PyResult<f64> {
            self.check_dim(&features)?;
            Ok(self.inner.decision_value(&features))
        }

        #[getter]
        fn weights(&self) -> Vec<f64> {
            self.inner.weights().to_vec()
        }

        #[getter]
        fn learning_rate(&self) -> f64 {
            self.inner.learning_rate()
        }
    }

    /// Generates `(features, labels)` for `n_samples` seeded points.
    #[pyfunction]
    #[pyo3(name = "generate_data", signature = (n_samples = 200, seed = 42))]
    fn generate_data_py(n_samples: usize, seed: u64) -> (Vec<Vec<f64>>, Vec<u8>) {
        generate_data(n_samples, seed)
            .into_iter()
            .map(|s| (s.features, u8::from(s.label)))
            .unzip()
    }

    /// Classifies the points in `text`, falling back to random points inside the
    /// range of `training_features`. Returns `(point, label)` pairs; malformed
    /// entries are skipped.
    #[pyfunction]
    #[pyo3(name = "classify_points", signature = (model, text, training_features, seed = 42))]
    fn classify_points_py(
        model: PyRef<'_, PyPerceptron>,
        text: &str,
        training_features: Vec<Vec<f64>>,
        seed: u64,
    ) -> PyResult<Vec<(Vec<f64>, u8)>> {
        let points: Vec<DataPoint<f64, ()>> = training_features
            .into_iter()
            .map(|f| DataPoint::new(f, ()))
            .collect();
        let bounds = feature_bounds(&points);
        if let Some(b) = &bounds {
            if b.dim() != model.inner.input_size() {
                return Err(value_error(format!(
                    "Training features have {} dimensions, the model expects {}.",
                    b.dim(),
                    model.inner.input_size()
                )));
            }
        }
        let adapter = QueryAdapter::with_bounds(&model.inner, bounds);
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = adapter.classify(text, &mut rng);
        Ok(outcome
            .classified
            .into_iter()
            .map(|p| (p.features, u8::from(p.label)))
            .collect())
    }

    /// The Python extension module. Its name must match `lib.name` in `Cargo.toml`.
    #[pymodule]
    fn perceptron_classifier(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(generate_data_py, m)?)?;
        m.add_function(wrap_pyfunction!(classify_points_py, m)?)?;
        m.add_class::<PyPerceptron>()?;
        Ok(())
    }
}
