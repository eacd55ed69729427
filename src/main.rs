use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use bayleaf_io::CsvReader;
use bayleaf_nb::{Holdout, NaiveBayes, accuracy, cross_validate};

#[derive(Parser)]
#[command(name = "bayleaf")]
#[command(about = "Categorical Naive Bayes classification over CSV datasets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// RNG seed for reproducible dataset shuffling
    #[arg(long, default_value_t = 42, global = true)]
    seed: u64,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Fit on a random fraction of the data and score the held-out rest
    Holdout {
        /// Path to the input CSV file (attribute columns, class label last)
        #[arg(long)]
        data: PathBuf,

        /// Fraction of records used for training, in [0.0, 1.0]
        #[arg(long)]
        ratio: f64,
    },

    /// Run k-fold cross-validation over the whole dataset
    Crossval {
        /// Path to the input CSV file (attribute columns, class label last)
        #[arg(long)]
        data: PathBuf,

        /// Number of folds (at least 2, at most the record count)
        #[arg(long)]
        folds: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Holdout { data, ratio } => {
            let dataset = CsvReader::new(&data)
                .read()
                .context("failed to read input CSV")?;
            info!(n_records = dataset.len(), "dataset loaded");

            let mut split = Holdout::new(ratio)
                .context("invalid train ratio")?
                .with_seed(cli.seed)
                .split(&dataset);

            let model = NaiveBayes::fit(&split.train).context("training failed")?;
            let acc = accuracy(&model, &mut split.test).context("evaluation failed")?;

            println!(
                "records: {} ({} train / {} test)",
                dataset.len(),
                split.train.len(),
                split.test.len()
            );
            println!("classes: {}", model.classes().join(", "));
            println!("accuracy: {acc:.2}%");
        }

        Command::Crossval { data, folds } => {
            let dataset = CsvReader::new(&data)
                .read()
                .context("failed to read input CSV")?;
            info!(n_records = dataset.len(), "dataset loaded");

            let result =
                cross_validate(&dataset, folds, cli.seed).context("cross-validation failed")?;

            println!("records: {}", dataset.len());
            for (fold, acc) in result.fold_accuracies.iter().enumerate() {
                println!("fold {fold}: {acc:.2}%");
            }
            println!("average accuracy: {:.2}%", result.mean_accuracy);
        }
    }

    Ok(())
}
