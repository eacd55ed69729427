//! Accuracy evaluation: holdout scoring and end-to-end cross-validation.

use tracing::{info, instrument};

use crate::classifier::NaiveBayes;
use crate::dataset::Dataset;
use crate::error::NbError;
use crate::partition::CrossValidation;

/// Results of k-fold cross-validation.
#[derive(Debug)]
pub struct CrossValidationResult {
    /// Accuracy for each fold, in percent.
    pub fold_accuracies: Vec<f64>,
    /// Mean accuracy across folds, in percent.
    pub mean_accuracy: f64,
    /// Standard deviation of fold accuracies.
    pub std_accuracy: f64,
    /// Number of folds.
    pub n_folds: usize,
}

/// Score a trained model against a labeled testing dataset.
///
/// Predicts every record in order (stamping its predicted label) and
/// returns the percentage whose prediction matches the actual label,
/// always in [0.0, 100.0].
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`NbError::EmptyTestingSet`] | `testing` has zero records |
/// | [`NbError::MissingLabel`] | A testing record has no actual label |
/// | [`NbError::NotTrained`] | `model` has no probability tables |
/// | [`NbError::PredictionWidthMismatch`] | Testing width differs from the trained width |
pub fn accuracy(model: &NaiveBayes, testing: &mut Dataset) -> Result<f64, NbError> {
    if testing.is_empty() {
        return Err(NbError::EmptyTestingSet);
    }
    for (index, record) in testing.records().iter().enumerate() {
        if record.label().is_none() {
            return Err(NbError::MissingLabel { index });
        }
    }

    let total = testing.len();
    let mut correct = 0usize;
    for record in testing.records_mut() {
        let predicted = model.predict(record)?;
        if record.label() == Some(predicted) {
            correct += 1;
        }
    }

    Ok(100.0 * correct as f64 / total as f64)
}

/// Run k-fold cross-validation over a labeled dataset.
///
/// Splits with the given fold count and seed, fits a fresh classifier on
/// each fold's training side, and measures accuracy on its held-out fold.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`NbError::InvalidFoldCount`] | `n_folds` < 2 |
/// | [`NbError::TooFewRecords`] | Fewer records than folds |
/// | [`NbError::MissingLabel`] | A record has no actual label |
#[instrument(skip_all, fields(n_records = data.len(), n_folds = n_folds))]
pub fn cross_validate(
    data: &Dataset,
    n_folds: usize,
    seed: u64,
) -> Result<CrossValidationResult, NbError> {
    let splits = CrossValidation::new(n_folds)?.with_seed(seed).split(data)?;

    let mut fold_accuracies = Vec::with_capacity(n_folds);
    for (fold, mut split) in splits.into_iter().enumerate() {
        let model = NaiveBayes::fit(&split.train)?;
        let fold_accuracy = accuracy(&model, &mut split.test)?;
        info!(fold, accuracy = fold_accuracy, "fold completed");
        fold_accuracies.push(fold_accuracy);
    }

    let mean_accuracy = fold_accuracies.iter().sum::<f64>() / n_folds as f64;
    let std_accuracy = {
        let variance = fold_accuracies
            .iter()
            .map(|&a| (a - mean_accuracy).powi(2))
            .sum::<f64>()
            / n_folds as f64;
        variance.sqrt()
    };

    info!(mean_accuracy, std_accuracy, "cross-validation complete");

    Ok(CrossValidationResult {
        fold_accuracies,
        mean_accuracy,
        std_accuracy,
        n_folds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn rec(values: &[&str], label: &str) -> Record {
        Record::labeled(values.iter().map(|s| s.to_string()).collect(), label)
    }

    /// Two classes kept apart by attribute 0; attribute 1 carries noise.
    fn make_separable_data(n_per_class: usize) -> Dataset {
        let mut ds = Dataset::new(2);
        for i in 0..n_per_class {
            let noise = format!("s{}", i % 3);
            ds.push(rec(&["red", noise.as_str()], "warm"));
            ds.push(rec(&["blue", noise.as_str()], "cold"));
        }
        ds
    }

    #[test]
    fn perfect_model_scores_one_hundred() {
        let data = make_separable_data(10);
        let model = NaiveBayes::fit(&data).unwrap();
        let mut testing = data.clone();
        let acc = accuracy(&model, &mut testing).unwrap();
        assert_eq!(acc, 100.0);
    }

    #[test]
    fn single_class_testing_set_scores_one_hundred() {
        let data = Dataset::from_records(vec![
            rec(&["a", "b"], "only"),
            rec(&["c", "d"], "only"),
        ])
        .unwrap();
        let model = NaiveBayes::fit(&data).unwrap();
        let mut testing = data.clone();
        assert_eq!(accuracy(&model, &mut testing).unwrap(), 100.0);
    }

    #[test]
    fn flipped_labels_score_zero() {
        let training = make_separable_data(5);
        let model = NaiveBayes::fit(&training).unwrap();
        let mut flipped = Dataset::new(2);
        for record in training.records() {
            let wrong = if record.label() == Some("warm") {
                "cold"
            } else {
                "warm"
            };
            flipped.push(rec(
                &[record.values()[0].as_str(), record.values()[1].as_str()],
                wrong,
            ));
        }
        assert_eq!(accuracy(&model, &mut flipped).unwrap(), 0.0);
    }

    #[test]
    fn accuracy_stamps_predicted_labels() {
        let data = make_separable_data(3);
        let model = NaiveBayes::fit(&data).unwrap();
        let mut testing = data.clone();
        accuracy(&model, &mut testing).unwrap();
        assert!(testing.records().iter().all(|r| r.predicted().is_some()));
    }

    #[test]
    fn empty_testing_set_rejected() {
        let data = make_separable_data(3);
        let model = NaiveBayes::fit(&data).unwrap();
        let mut empty = Dataset::new(2);
        let result = accuracy(&model, &mut empty);
        assert!(matches!(result, Err(NbError::EmptyTestingSet)));
    }

    #[test]
    fn unlabeled_testing_record_rejected() {
        let data = make_separable_data(3);
        let model = NaiveBayes::fit(&data).unwrap();
        let mut testing = Dataset::new(2);
        testing.push(rec(&["red", "s0"], "warm"));
        testing.push(Record::unlabeled(vec!["blue".to_string(), "s1".to_string()]));
        let result = accuracy(&model, &mut testing);
        assert!(matches!(result, Err(NbError::MissingLabel { index: 1 })));
    }

    #[test]
    fn cross_validate_separable_data() {
        let data = make_separable_data(10);
        let result = cross_validate(&data, 5, 42).unwrap();
        assert_eq!(result.fold_accuracies.len(), 5);
        assert_eq!(result.n_folds, 5);
        assert!(result.fold_accuracies.iter().all(|&a| (0.0..=100.0).contains(&a)));
        assert_eq!(result.mean_accuracy, 100.0);
        assert_eq!(result.std_accuracy, 0.0);
    }

    #[test]
    fn cross_validate_single_class_is_always_right() {
        let mut data = Dataset::new(1);
        for i in 0..12 {
            data.push(rec(&[&format!("v{i}")], "only"));
        }
        let result = cross_validate(&data, 4, 7).unwrap();
        assert!(result.fold_accuracies.iter().all(|&a| a == 100.0));
        assert_eq!(result.mean_accuracy, 100.0);
    }

    #[test]
    fn cross_validate_deterministic_for_seed() {
        let data = make_separable_data(8);
        let a = cross_validate(&data, 4, 11).unwrap();
        let b = cross_validate(&data, 4, 11).unwrap();
        assert_eq!(a.fold_accuracies, b.fold_accuracies);
        assert_eq!(a.mean_accuracy, b.mean_accuracy);
    }

    #[test]
    fn cross_validate_rejects_bad_fold_counts() {
        let data = make_separable_data(3);
        assert!(matches!(
            cross_validate(&data, 1, 42),
            Err(NbError::InvalidFoldCount { n_folds: 1 })
        ));
        assert!(matches!(
            cross_validate(&data, 7, 42),
            Err(NbError::TooFewRecords {
                n_records: 6,
                n_folds: 7
            })
        ));
    }
}
