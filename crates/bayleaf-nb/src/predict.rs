//! Prediction methods for the trained classifier.

use crate::classifier::NaiveBayes;
use crate::dataset::Dataset;
use crate::error::NbError;
use crate::record::Record;

/// Log-domain posterior scores from scoring one record.
///
/// Scores are indexed by class id (first-seen class order), so the same
/// trained model always reports them in the same order.
#[derive(Debug, Clone)]
pub struct ClassScores {
    scores: Vec<f64>,
}

impl ClassScores {
    /// Create new class scores.
    pub(crate) fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Return the winning class id.
    ///
    /// Scans in class-id order keeping only strictly greater scores, so a
    /// tie is won by the earliest-registered class.
    #[must_use]
    pub fn best(&self) -> usize {
        let mut best = 0;
        for (id, &score) in self.scores.iter().enumerate().skip(1) {
            if score > self.scores[best] {
                best = id;
            }
        }
        best
    }

    /// Return the log-domain scores as a slice, indexed by class id.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }
}

impl NaiveBayes {
    /// Score one record against every known class.
    ///
    /// Each class starts from its log prior and adds the log-likelihood of
    /// each (position, value) pair the record carries. A value never seen
    /// at that position during training contributes nothing.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`NbError::NotTrained`] | No probability tables (`train` not run) |
    /// | [`NbError::PredictionWidthMismatch`] | Record width differs from the trained width |
    pub fn scores(&self, record: &Record) -> Result<ClassScores, NbError> {
        let tables = self.tables.as_ref().ok_or(NbError::NotTrained)?;
        if record.n_attributes() != self.n_attributes {
            return Err(NbError::PredictionWidthMismatch {
                expected: self.n_attributes,
                got: record.n_attributes(),
            });
        }

        let mut scores = tables.log_priors.clone();
        for (position, value) in record.values().iter().enumerate() {
            if let Some(row) = tables.log_likelihoods[position].get(value) {
                for (class_id, score) in scores.iter_mut().enumerate() {
                    *score += row[class_id];
                }
            }
        }

        Ok(ClassScores::new(scores))
    }

    /// Predict the class of one record, stamping its predicted label.
    ///
    /// Returns the winning class label. Re-predicting a record overwrites
    /// the stamp.
    ///
    /// # Errors
    ///
    /// Same conditions as [`scores`](NaiveBayes::scores).
    pub fn predict(&self, record: &mut Record) -> Result<&str, NbError> {
        let class_id = self.scores(record)?.best();
        let label = self.classes[class_id].as_str();
        record.set_predicted(label.to_string());
        Ok(label)
    }

    /// Predict every record of `data` in order, stamping each one.
    ///
    /// Returns the predicted labels in dataset order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`scores`](NaiveBayes::scores); the first failing
    /// record aborts the pass.
    pub fn predict_dataset(&self, data: &mut Dataset) -> Result<Vec<String>, NbError> {
        let mut predictions = Vec::with_capacity(data.len());
        for record in data.records_mut() {
            predictions.push(self.predict(record)?.to_string());
        }
        Ok(predictions)
    }
}
