use perceptron_classifier::{
    generate_data, DataPoint, FeatureBounds, Label, Perceptron, PointOrigin, QueryAdapter,
    TrainingConfig,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::thread;

fn train_default(seed: u64) -> (Perceptron<f64>, Vec<DataPoint<f64, Label>>) {
    let cfg = TrainingConfig { seed, ..TrainingConfig::default() };
    let samples = generate_data(cfg.n_samples, cfg.seed);
    let mut model = Perceptron::new(cfg.input_size, cfg.learning_rate);
    let history = model.train(&samples, cfg.epochs);
    assert_eq!(history.epochs(), cfg.epochs);
    (model, samples)
}

#[test]
fn default_pipeline_learns_the_separating_line() {
    let (model, samples) = train_default(TrainingConfig::DEFAULT_SEED);
    assert_eq!(model.weights().len(), 3);
    assert!(
        model.accuracy(&samples) >= 0.95,
        "training accuracy too low: {}",
        model.accuracy(&samples)
    );
    // Points far from the line x0 + x1 = 0 must be on the right side.
    assert_eq!(model.predict(&[3.0, 3.0]), Label::One);
    assert_eq!(model.predict(&[-3.0, -3.0]), Label::Zero);
}

#[test]
fn identical_runs_give_identical_weights() {
    let (a, _) = train_default(7);
    let (b, _) = train_default(7);
    assert_eq!(a.weights(), b.weights());
}

#[test]
fn models_on_separate_threads_stay_isolated() {
    let seeds = [1_u64, 2, 3, 4];
    let handles: Vec<_> = seeds
        .iter()
        .map(|&seed| thread::spawn(move || train_default(seed).0.weights().to_vec()))
        .collect();
    for (handle, &seed) in handles.into_iter().zip(seeds.iter()) {
        let threaded = handle.join().expect("training thread panicked");
        let sequential = train_default(seed).0;
        assert_eq!(threaded, sequential.weights());
    }
}

#[test]
fn fallback_points_respect_training_range() {
    let (model, _) = train_default(TrainingConfig::DEFAULT_SEED);
    let bounds = FeatureBounds::new(vec![(-2.0, 2.0), (-2.0, 2.0)]);
    let adapter = QueryAdapter::with_bounds(&model, Some(bounds.clone()));
    let mut rng = StdRng::seed_from_u64(TrainingConfig::DEFAULT_SEED);

    let empty = adapter.classify("", &mut rng);
    assert_eq!(empty.classified.len(), 3);
    let unparseable = adapter.classify("bad_point", &mut rng);
    assert_eq!(unparseable.classified.len(), 1);
    assert_eq!(unparseable.rejected.len(), 1);

    for p in empty.classified.iter().chain(unparseable.classified.iter()) {
        assert_eq!(p.origin, PointOrigin::Fallback);
        assert!(bounds.contains(&p.features));
        assert_eq!(p.label, model.predict(&p.features));
    }
}

#[test]
fn mixed_query_keeps_only_valid_points() {
    let (model, samples) = train_default(TrainingConfig::DEFAULT_SEED);
    let adapter = QueryAdapter::new(&model, &samples);
    let mut rng = StdRng::seed_from_u64(0);

    let outcome = adapter.classify("1.0,2.0 bad_point 0.5,-1.2", &mut rng);
    assert!(!outcome.used_fallback());
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].token(), "bad_point");
    let points: Vec<&[f64]> = outcome.classified.iter().map(|p| p.features.as_slice()).collect();
    assert_eq!(points, vec![&[1.0, 2.0][..], &[0.5, -1.2][..]]);
}
