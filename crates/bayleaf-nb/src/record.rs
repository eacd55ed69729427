//! Record type: one labeled or unlabeled categorical observation.

/// A single observation: an ordered list of categorical attribute values,
/// an optional actual class label, and an optional predicted class label.
///
/// Attribute values and the actual label are fixed at construction. The
/// predicted label is written by the classifier when the record is scored
/// and overwritten on re-prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
    label: Option<String>,
    predicted: Option<String>,
}

impl Record {
    /// Create a labeled record (training or testing data).
    pub fn labeled<S: Into<String>>(values: Vec<String>, label: S) -> Self {
        Self {
            values,
            label: Some(label.into()),
            predicted: None,
        }
    }

    /// Create an unlabeled record (prediction input).
    pub fn unlabeled(values: Vec<String>) -> Self {
        Self {
            values,
            label: None,
            predicted: None,
        }
    }

    /// Return the attribute values in order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Return the number of attribute values.
    #[must_use]
    pub fn n_attributes(&self) -> usize {
        self.values.len()
    }

    /// Return the actual class label, if the record has one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Return the predicted class label, if the record has been scored.
    #[must_use]
    pub fn predicted(&self) -> Option<&str> {
        self.predicted.as_deref()
    }

    /// Record the classifier's verdict. Only the classifier writes this.
    pub(crate) fn set_predicted(&mut self, class: String) {
        self.predicted = Some(class);
    }
}
