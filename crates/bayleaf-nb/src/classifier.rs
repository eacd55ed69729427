//! Frequency accumulation and probability table construction.

use std::collections::HashMap;

use tracing::{debug, info, instrument};

use crate::dataset::Dataset;
use crate::error::NbError;

/// Log-domain probability tables derived from the accumulated counts.
#[derive(Debug, Clone)]
pub(crate) struct Tables {
    /// ln P(class), indexed by class id.
    pub(crate) log_priors: Vec<f64>,
    /// Per attribute position: value to ln P(value | class) by class id.
    pub(crate) log_likelihoods: Vec<HashMap<String, Vec<f64>>>,
}

/// A categorical Naive Bayes classifier.
///
/// Lifecycle: construct with [`NaiveBayes::new`], absorb labeled data with
/// [`build`](NaiveBayes::build), derive probability tables with
/// [`train`](NaiveBayes::train), then predict. [`fit`](NaiveBayes::fit)
/// runs all three in one call.
///
/// `build` may be called repeatedly to absorb more data; each call
/// invalidates the tables, and `train` must run again before the next
/// prediction. Class ids follow first-seen order across all absorbed data,
/// which fixes the scoring order and the tie-break winner.
#[derive(Debug, Clone)]
pub struct NaiveBayes {
    /// Total training records absorbed.
    pub(crate) observations: usize,
    /// Attribute count established by the first absorbed dataset.
    pub(crate) n_attributes: usize,
    /// Class labels in first-seen order. The index is the class id.
    pub(crate) classes: Vec<String>,
    /// Label to class id.
    pub(crate) class_index: HashMap<String, usize>,
    /// Records per class, indexed by class id.
    pub(crate) class_counts: Vec<usize>,
    /// Per attribute position: value to total occurrences. The key set is
    /// the position's distinct-value domain.
    pub(crate) value_counts: Vec<HashMap<String, usize>>,
    /// Per attribute position: value to per-class-id occurrence counts.
    pub(crate) joint_counts: Vec<HashMap<String, Vec<usize>>>,
    /// `None` until `train`, and again after any later `build`.
    pub(crate) tables: Option<Tables>,
}

impl NaiveBayes {
    /// Create a classifier with no absorbed data.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observations: 0,
            n_attributes: 0,
            classes: Vec::new(),
            class_index: HashMap::new(),
            class_counts: Vec::new(),
            value_counts: Vec::new(),
            joint_counts: Vec::new(),
            tables: None,
        }
    }

    /// Absorb the frequency counts of a labeled dataset.
    ///
    /// The first call fixes the attribute count; later calls must match it.
    /// Any previously computed probability tables are invalidated.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`NbError::EmptyDataset`] | `data` has zero records |
    /// | [`NbError::MissingLabel`] | A record has no actual class label |
    /// | [`NbError::DatasetWidthMismatch`] | `data` disagrees with earlier absorbed data |
    #[instrument(skip_all, fields(n_records = data.len()))]
    pub fn build(&mut self, data: &Dataset) -> Result<(), NbError> {
        if data.is_empty() {
            return Err(NbError::EmptyDataset);
        }
        if self.observations == 0 {
            self.n_attributes = data.n_attributes();
            self.value_counts = vec![HashMap::new(); self.n_attributes];
            self.joint_counts = vec![HashMap::new(); self.n_attributes];
        } else if data.n_attributes() != self.n_attributes {
            return Err(NbError::DatasetWidthMismatch {
                expected: self.n_attributes,
                got: data.n_attributes(),
            });
        }

        // Validate before mutating so a failed build leaves the counts intact.
        for (index, record) in data.records().iter().enumerate() {
            if record.label().is_none() {
                return Err(NbError::MissingLabel { index });
            }
        }

        for (index, record) in data.records().iter().enumerate() {
            let label = record.label().ok_or(NbError::MissingLabel { index })?;
            let class_id = match self.class_index.get(label) {
                Some(&id) => id,
                None => {
                    let id = self.classes.len();
                    self.classes.push(label.to_string());
                    self.class_index.insert(label.to_string(), id);
                    self.class_counts.push(0);
                    id
                }
            };
            self.class_counts[class_id] += 1;
            self.observations += 1;

            for (position, value) in record.values().iter().enumerate() {
                *self.value_counts[position]
                    .entry(value.clone())
                    .or_insert(0) += 1;
                let joint = self.joint_counts[position]
                    .entry(value.clone())
                    .or_default();
                if joint.len() <= class_id {
                    joint.resize(class_id + 1, 0);
                }
                joint[class_id] += 1;
            }
        }

        // Counts changed, so any earlier tables are stale.
        self.tables = None;

        debug!(
            observations = self.observations,
            n_classes = self.classes.len(),
            "absorbed training counts"
        );
        Ok(())
    }

    /// Compute the log-domain probability tables from the absorbed counts.
    ///
    /// Priors are `ln(class_count / observations)`. Conditional likelihoods
    /// are Laplace smoothed: `ln((joint + 1) / (class_count + domain_size))`
    /// with `domain_size` the number of distinct values at the attribute's
    /// position. Every stored probability is finite: a registered class has
    /// at least one record, and the smoothing numerator is at least one.
    ///
    /// Recomputes the full tables on every call; calling it twice without
    /// an intervening `build` yields identical tables.
    ///
    /// # Errors
    ///
    /// Returns [`NbError::NoObservations`] if no data has been absorbed.
    pub fn train(&mut self) -> Result<(), NbError> {
        if self.observations == 0 {
            return Err(NbError::NoObservations);
        }

        let total = self.observations as f64;
        let log_priors: Vec<f64> = self
            .class_counts
            .iter()
            .map(|&count| (count as f64 / total).ln())
            .collect();

        let mut log_likelihoods = Vec::with_capacity(self.n_attributes);
        for position in 0..self.n_attributes {
            let domain_size = self.value_counts[position].len() as f64;
            let mut table = HashMap::with_capacity(self.joint_counts[position].len());
            for (value, joint) in &self.joint_counts[position] {
                let row: Vec<f64> = (0..self.classes.len())
                    .map(|class_id| {
                        let joint_count = joint.get(class_id).copied().unwrap_or(0) as f64;
                        let class_count = self.class_counts[class_id] as f64;
                        ((joint_count + 1.0) / (class_count + domain_size)).ln()
                    })
                    .collect();
                table.insert(value.clone(), row);
            }
            log_likelihoods.push(table);
        }

        self.tables = Some(Tables {
            log_priors,
            log_likelihoods,
        });

        info!(
            observations = self.observations,
            n_classes = self.classes.len(),
            "probability tables computed"
        );
        Ok(())
    }

    /// Build and train on `data` in one call.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`build`](NaiveBayes::build); `train`
    /// cannot fail once a non-empty dataset has been absorbed.
    pub fn fit(data: &Dataset) -> Result<Self, NbError> {
        let mut model = Self::new();
        model.build(data)?;
        model.train()?;
        Ok(model)
    }

    // --- Accessors ---

    /// Return the total number of training records absorbed.
    #[must_use]
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Return the attribute count this classifier was built on.
    #[must_use]
    pub fn n_attributes(&self) -> usize {
        self.n_attributes
    }

    /// Return the class labels in first-seen order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Return `true` once probability tables are available for prediction.
    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.tables.is_some()
    }

    /// Return the number of training records carrying `label`, if seen.
    #[must_use]
    pub fn class_count(&self, label: &str) -> Option<usize> {
        self.class_index.get(label).map(|&id| self.class_counts[id])
    }

    /// Return the number of distinct values seen at `position`.
    #[must_use]
    pub fn domain_size(&self, position: usize) -> Option<usize> {
        self.value_counts.get(position).map(HashMap::len)
    }

    /// Return `ln P(label)`, if trained and `label` is a known class.
    #[must_use]
    pub fn log_prior(&self, label: &str) -> Option<f64> {
        let tables = self.tables.as_ref()?;
        let &id = self.class_index.get(label)?;
        Some(tables.log_priors[id])
    }

    /// Return `ln P(value at position | label)`, if trained and the value
    /// was seen at that position during training.
    #[must_use]
    pub fn log_likelihood(&self, position: usize, value: &str, label: &str) -> Option<f64> {
        let tables = self.tables.as_ref()?;
        let &id = self.class_index.get(label)?;
        let row = tables.log_likelihoods.get(position)?.get(value)?;
        Some(row[id])
    }
}

impl Default for NaiveBayes {
    fn default() -> Self {
        Self::new()
    }
}
