//! Seeded dataset partitioning: holdout split and k-fold cross-validation.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, warn};

use crate::dataset::Dataset;
use crate::error::NbError;

/// One train/test partition of a dataset.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    /// Records to fit on.
    pub train: Dataset,
    /// Records held out for evaluation.
    pub test: Dataset,
}

/// Holdout split configuration.
///
/// Construct via [`Holdout::new`], then chain `with_seed` if desired.
#[derive(Debug, Clone)]
pub struct Holdout {
    train_ratio: f64,
    seed: u64,
}

impl Holdout {
    /// Create a holdout config with the given training fraction.
    ///
    /// # Errors
    ///
    /// Returns [`NbError::InvalidRatio`] if `train_ratio` is NaN or outside
    /// [0.0, 1.0].
    pub fn new(train_ratio: f64) -> Result<Self, NbError> {
        if !(0.0..=1.0).contains(&train_ratio) {
            return Err(NbError::InvalidRatio { ratio: train_ratio });
        }
        Ok(Self {
            train_ratio,
            seed: 42,
        })
    }

    /// Set the random seed for shuffling.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Split `data` into one train/test pair.
    ///
    /// The training set receives exactly `floor(len * train_ratio)` records;
    /// the rest form the testing set. Records land in shuffle order, every
    /// record in exactly one side, and the same seed always reproduces the
    /// same split. The input dataset is not modified.
    #[instrument(skip_all, fields(n_records = data.len(), train_ratio = self.train_ratio))]
    pub fn split(&self, data: &Dataset) -> TrainTestSplit {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut indices: Vec<usize> = (0..data.len()).collect();
        indices.shuffle(&mut rng);

        let train_size = (data.len() as f64 * self.train_ratio).floor() as usize;

        let mut train = Dataset::new(data.n_attributes());
        let mut test = Dataset::new(data.n_attributes());
        for (draw, &idx) in indices.iter().enumerate() {
            let record = data.records()[idx].clone();
            if draw < train_size {
                train.push(record);
            } else {
                test.push(record);
            }
        }

        debug!(
            train_size = train.len(),
            test_size = test.len(),
            "holdout split"
        );
        TrainTestSplit { train, test }
    }
}

/// K-fold cross-validation split configuration.
///
/// Construct via [`CrossValidation::new`], then chain `with_seed` if desired.
#[derive(Debug, Clone)]
pub struct CrossValidation {
    n_folds: usize,
    seed: u64,
}

impl CrossValidation {
    /// Create a cross-validation config with the given number of folds.
    ///
    /// # Errors
    ///
    /// Returns [`NbError::InvalidFoldCount`] if `n_folds` < 2.
    pub fn new(n_folds: usize) -> Result<Self, NbError> {
        if n_folds < 2 {
            return Err(NbError::InvalidFoldCount { n_folds });
        }
        Ok(Self { n_folds, seed: 42 })
    }

    /// Set the random seed for shuffling.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Return the number of folds.
    #[must_use]
    pub fn n_folds(&self) -> usize {
        self.n_folds
    }

    /// Split `data` into `n_folds` train/test pairs.
    ///
    /// Each fold holds exactly `floor(len / n_folds)` records drawn from a
    /// seeded shuffle. When `len` is not divisible by `n_folds`, the
    /// trailing remainder records are excluded from every fold (logged as a
    /// warning). Pair `i` tests on fold `i` and trains on the remaining
    /// folds concatenated in fold order, so every retained record appears
    /// in exactly one testing set and `n_folds - 1` training sets.
    ///
    /// # Errors
    ///
    /// Returns [`NbError::TooFewRecords`] if `data` has fewer records than
    /// folds.
    #[instrument(skip_all, fields(n_records = data.len(), n_folds = self.n_folds))]
    pub fn split(&self, data: &Dataset) -> Result<Vec<TrainTestSplit>, NbError> {
        if data.len() < self.n_folds {
            return Err(NbError::TooFewRecords {
                n_records: data.len(),
                n_folds: self.n_folds,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut indices: Vec<usize> = (0..data.len()).collect();
        indices.shuffle(&mut rng);

        let fold_size = data.len() / self.n_folds;
        let retained = fold_size * self.n_folds;
        if retained < data.len() {
            warn!(
                dropped = data.len() - retained,
                fold_size, "uneven split, trailing shuffled records left out of every fold"
            );
        }

        let folds: Vec<&[usize]> = indices[..retained].chunks(fold_size).collect();

        let mut splits = Vec::with_capacity(self.n_folds);
        for test_fold in 0..self.n_folds {
            let mut train = Dataset::new(data.n_attributes());
            let mut test = Dataset::new(data.n_attributes());
            for (fold, chunk) in folds.iter().enumerate() {
                for &idx in *chunk {
                    let record = data.records()[idx].clone();
                    if fold == test_fold {
                        test.push(record);
                    } else {
                        train.push(record);
                    }
                }
            }
            debug!(
                fold = test_fold,
                train_size = train.len(),
                test_size = test.len(),
                "fold assembled"
            );
            splits.push(TrainTestSplit { train, test });
        }

        Ok(splits)
    }
}
