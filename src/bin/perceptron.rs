use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use perceptron_classifier::{
    generate_data, Perceptron, PointOrigin, QueryAdapter, TrainingConfig,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

/// Train a perceptron on seeded synthetic points and classify query points.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Learning rate of the perceptron update
    #[arg(long, default_value_t = TrainingConfig::DEFAULT_LEARNING_RATE)]
    learning_rate: f64,
    /// Number of full passes over the training data
    #[arg(long, default_value_t = TrainingConfig::DEFAULT_EPOCHS)]
    epochs: usize,
    /// Number of generated training samples
    #[arg(long, default_value_t = TrainingConfig::DEFAULT_N_SAMPLES)]
    samples: usize,
    /// Seed of the training data generator
    #[arg(long, default_value_t = TrainingConfig::DEFAULT_SEED)]
    seed: u64,
    /// Seed used for random fallback points
    #[arg(long, default_value_t = TrainingConfig::DEFAULT_SEED)]
    fallback_seed: u64,
    /// Points to classify, e.g. "1.0,2.0 0.5,-1.2". Read from stdin when omitted.
    #[arg(long)]
    points: Option<String>,
}

impl Cli {
    fn config(&self) -> TrainingConfig {
        TrainingConfig {
            learning_rate: self.learning_rate,
            epochs: self.epochs,
            n_samples: self.samples,
            seed: self.seed,
            fallback_seed: self.fallback_seed,
            ..TrainingConfig::default()
        }
    }
}

fn read_points_from_stdin() -> Result<String> {
    println!("Enter several points separated by spaces, each as x,y (for example: 1.0,2.0 0.5,-1.2)");
    println!("Or leave the line empty to get random points.");
    print!("Points: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read points from stdin")?;
    Ok(line)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate().context("invalid training configuration")?;

    let samples = generate_data(config.n_samples, config.seed);
    let mut model = Perceptron::new(config.input_size, config.learning_rate);
    let history = model.train(&samples, config.epochs);
    info!("mistakes per epoch: {:?}", history.mistakes_per_epoch);

    println!(
        "Training accuracy: {:.1}% ({} samples, {} epochs)",
        model.accuracy(&samples) * 100.0,
        samples.len(),
        config.epochs
    );

    let input = match cli.points {
        Some(points) => points,
        None => read_points_from_stdin()?,
    };

    let adapter = QueryAdapter::new(&model, &samples).with_policy(config.fallback);
    let mut rng = StdRng::seed_from_u64(config.fallback_seed);
    let outcome = adapter.classify(&input, &mut rng);

    for err in &outcome.rejected {
        eprintln!("Skipped point: {}", err);
    }
    if outcome.used_fallback() {
        println!("Created {} random point(s) inside the training range.", outcome.classified.len());
    }

    for (i, point) in outcome.classified.iter().enumerate() {
        let coords: Vec<String> = point.features.iter().map(|v| format!("{:.4}", v)).collect();
        let origin = match point.origin {
            PointOrigin::User => "",
            PointOrigin::Fallback => " [random]",
        };
        println!(
            "Point {}: ({}), class: {} ({}){}",
            i + 1,
            coords.join(", "),
            point.label,
            point.label.color_name(),
            origin
        );
    }

    Ok(())
}
