//! Accuracy regression tests for bayleaf-nb.
//!
//! These tests verify that algorithmic changes do not degrade Naive Bayes
//! classification accuracy on deterministic datasets.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bayleaf_nb::{Dataset, Holdout, NaiveBayes, Record, accuracy, cross_validate};

// ---------------------------------------------------------------------------
// Helpers: deterministic synthetic datasets
// ---------------------------------------------------------------------------

fn informative(rng: &mut ChaCha8Rng, prefix: &str, class: usize, n_classes: usize) -> String {
    let chosen = if rng.r#gen::<f64>() < 0.95 {
        class
    } else {
        rng.gen_range(0..n_classes)
    };
    format!("{prefix}{chosen}")
}

/// Generate a 240-record, 4-attribute, 3-class categorical dataset.
///
/// Attributes 0-1 are informative (match the class 95% of the time, so the
/// Bayes-optimal rate is well above 0.9). Attributes 2-3 are pure noise
/// over four values. Records are assigned round-robin across classes.
fn make_classification() -> Dataset {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let n_records = 240;
    let n_classes = 3;
    let labels = ["low", "mid", "high"];

    let mut ds = Dataset::new(4);
    for i in 0..n_records {
        let class = i % n_classes;
        let values = vec![
            informative(&mut rng, "a", class, n_classes),
            informative(&mut rng, "b", class, n_classes),
            format!("n{}", rng.gen_range(0..4)),
            format!("m{}", rng.gen_range(0..4)),
        ];
        ds.push(Record::labeled(values, labels[class]));
    }
    ds
}

/// The classic 14-day weather dataset (outlook, temperature, humidity, wind).
fn make_weather() -> Dataset {
    let rows: [(&str, &str, &str, &str, &str); 14] = [
        ("sunny", "hot", "high", "weak", "no"),
        ("sunny", "hot", "high", "strong", "no"),
        ("overcast", "hot", "high", "weak", "yes"),
        ("rain", "mild", "high", "weak", "yes"),
        ("rain", "cool", "normal", "weak", "yes"),
        ("rain", "cool", "normal", "strong", "no"),
        ("overcast", "cool", "normal", "strong", "yes"),
        ("sunny", "mild", "high", "weak", "no"),
        ("sunny", "cool", "normal", "weak", "yes"),
        ("rain", "mild", "normal", "weak", "yes"),
        ("sunny", "mild", "normal", "strong", "yes"),
        ("overcast", "mild", "high", "strong", "yes"),
        ("overcast", "hot", "normal", "weak", "yes"),
        ("rain", "mild", "high", "strong", "no"),
    ];
    let mut ds = Dataset::new(4);
    for (outlook, temperature, humidity, wind, play) in rows {
        ds.push(Record::labeled(
            vec![
                outlook.to_string(),
                temperature.to_string(),
                humidity.to_string(),
                wind.to_string(),
            ],
            play,
        ));
    }
    ds
}

// ---------------------------------------------------------------------------
// a) cv_accuracy_above_threshold
// ---------------------------------------------------------------------------

/// 5-fold cross-validation mean accuracy must exceed 85% on the synthetic
/// dataset.
#[test]
fn cv_accuracy_above_threshold() {
    let data = make_classification();
    let result = cross_validate(&data, 5, 42).unwrap();

    assert!(
        result.mean_accuracy > 85.0,
        "cv mean_accuracy {} <= 85.0",
        result.mean_accuracy
    );
    assert!(
        result
            .fold_accuracies
            .iter()
            .all(|&a| (0.0..=100.0).contains(&a)),
        "fold accuracies out of range: {:?}",
        result.fold_accuracies
    );
}

// ---------------------------------------------------------------------------
// b) holdout_accuracy_above_threshold
// ---------------------------------------------------------------------------

/// A 70/30 holdout split must score above 85% on the held-out side.
#[test]
fn holdout_accuracy_above_threshold() {
    let data = make_classification();
    let mut split = Holdout::new(0.7).unwrap().with_seed(42).split(&data);
    assert_eq!(split.train.len(), 168);
    assert_eq!(split.test.len(), 72);

    let model = NaiveBayes::fit(&split.train).unwrap();
    let acc = accuracy(&model, &mut split.test).unwrap();

    assert!(acc > 85.0, "holdout accuracy {acc} <= 85.0");
}

// ---------------------------------------------------------------------------
// c) weather_known_predictions
// ---------------------------------------------------------------------------

/// Hand-checked posteriors on the weather dataset.
///
/// With Laplace smoothing, (sunny, cool, high, strong) favors "no"
/// (0.0182 vs 0.0071 before normalization) and (overcast, mild, normal,
/// weak) favors "yes" (0.0452 vs 0.0021).
#[test]
fn weather_known_predictions() {
    let data = make_weather();
    let model = NaiveBayes::fit(&data).unwrap();

    let mut hard_day = Record::unlabeled(vec![
        "sunny".to_string(),
        "cool".to_string(),
        "high".to_string(),
        "strong".to_string(),
    ]);
    assert_eq!(model.predict(&mut hard_day).unwrap(), "no");

    let mut nice_day = Record::unlabeled(vec![
        "overcast".to_string(),
        "mild".to_string(),
        "normal".to_string(),
        "weak".to_string(),
    ]);
    assert_eq!(model.predict(&mut nice_day).unwrap(), "yes");
}

// ---------------------------------------------------------------------------
// d) deterministic_predictions
// ---------------------------------------------------------------------------

/// Training is count-based, so two fits on the same data must agree on
/// every prediction.
#[test]
fn deterministic_predictions() {
    let data = make_classification();
    let model1 = NaiveBayes::fit(&data).unwrap();
    let model2 = NaiveBayes::fit(&data).unwrap();

    let mut queries1 = data.clone();
    let mut queries2 = data.clone();
    let preds1 = model1.predict_dataset(&mut queries1).unwrap();
    let preds2 = model2.predict_dataset(&mut queries2).unwrap();

    assert_eq!(
        preds1, preds2,
        "predictions differ across runs on identical data"
    );
}

// ---------------------------------------------------------------------------
// e) training_data_accuracy_above_threshold
// ---------------------------------------------------------------------------

/// Accuracy measured on the training data itself must exceed 85%.
#[test]
fn training_data_accuracy_above_threshold() {
    let data = make_classification();
    let model = NaiveBayes::fit(&data).unwrap();
    let mut testing = data.clone();
    let acc = accuracy(&model, &mut testing).unwrap();

    assert!(acc > 85.0, "training accuracy {acc} <= 85.0");
}
