/// Errors from Naive Bayes operations.
#[derive(Debug, thiserror::Error)]
pub enum NbError {
    /// Returned when train_ratio is outside [0.0, 1.0].
    #[error("train_ratio must be in [0.0, 1.0], got {ratio}")]
    InvalidRatio {
        /// The invalid train_ratio value provided.
        ratio: f64,
    },

    /// Returned when n_folds is less than 2.
    #[error("n_folds must be at least 2, got {n_folds}")]
    InvalidFoldCount {
        /// The invalid n_folds value provided.
        n_folds: usize,
    },

    /// Returned when a dataset has fewer records than the requested fold count.
    #[error("dataset has {n_records} records, need at least {n_folds} for {n_folds}-fold CV")]
    TooFewRecords {
        /// The number of records in the dataset.
        n_records: usize,
        /// The requested number of folds.
        n_folds: usize,
    },

    /// Returned when a record index is out of range.
    #[error("record index {index} out of range for dataset of {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of records in the dataset.
        len: usize,
    },

    /// Returned when a dataset has zero records.
    #[error("dataset has zero records")]
    EmptyDataset,

    /// Returned when a record has a different number of attributes than its dataset.
    #[error("record {record_index} has {got} attributes, expected {expected}")]
    AttributeCountMismatch {
        /// The expected number of attributes.
        expected: usize,
        /// The actual number of attributes in the record.
        got: usize,
        /// The zero-based index of the offending record.
        record_index: usize,
    },

    /// Returned when a training dataset disagrees with data already absorbed.
    #[error("training dataset has {got} attribute columns, expected {expected}")]
    DatasetWidthMismatch {
        /// The attribute count established by earlier training data.
        expected: usize,
        /// The attribute count of the offending dataset.
        got: usize,
    },

    /// Returned when a record lacks its actual class label.
    #[error("record {index} has no class label")]
    MissingLabel {
        /// The zero-based index of the unlabeled record.
        index: usize,
    },

    /// Returned when `train` is called before any counts have been absorbed.
    #[error("no observations absorbed, call build before train")]
    NoObservations,

    /// Returned when prediction is attempted before `train`.
    #[error("probability tables not computed, call train first")]
    NotTrained,

    /// Returned when a prediction input has a different number of attributes than expected.
    #[error("prediction input has {got} attributes, expected {expected}")]
    PredictionWidthMismatch {
        /// The expected number of attributes.
        expected: usize,
        /// The actual number of attributes in the prediction input.
        got: usize,
    },

    /// Returned when accuracy is computed over an empty testing set.
    #[error("testing dataset has zero records")]
    EmptyTestingSet,
}
