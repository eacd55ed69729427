//! Categorical Naive Bayes classification.
//!
//! Pure in-memory library — zero I/O. Provides the record/dataset model,
//! seeded holdout and k-fold dataset partitioning, frequency-count
//! training with Laplace-smoothed log-domain probability tables, and
//! accuracy evaluation.

mod classifier;
mod dataset;
mod error;
mod eval;
mod partition;
mod predict;
mod record;

pub use classifier::NaiveBayes;
pub use dataset::Dataset;
pub use error::NbError;
pub use eval::{CrossValidationResult, accuracy, cross_validate};
pub use partition::{CrossValidation, Holdout, TrainTestSplit};
pub use predict::ClassScores;
pub use record::Record;
