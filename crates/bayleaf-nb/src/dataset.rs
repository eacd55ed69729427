//! Ordered record collection with a shared attribute schema.

use crate::error::NbError;
use crate::record::Record;

/// An ordered collection of [`Record`]s sharing one attribute count.
///
/// Insertion order is preserved and meaningful: it determines first-seen
/// class registration during training and is the order partitioners and
/// evaluators walk. Duplicate records are allowed.
///
/// Schema conformance is validated when a dataset is assembled (via
/// [`Dataset::from_records`] or the CSV reader), not re-checked on every
/// operation; [`Dataset::push`] carries a debug assertion only.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    n_attributes: usize,
}

impl Dataset {
    /// Create an empty dataset with a fixed attribute count.
    #[must_use]
    pub fn new(n_attributes: usize) -> Self {
        Self {
            records: Vec::new(),
            n_attributes,
        }
    }

    /// Build a dataset from records, deriving the attribute count from the
    /// first record and validating the rest against it.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`NbError::EmptyDataset`] | `records` is empty (no schema to derive) |
    /// | [`NbError::AttributeCountMismatch`] | A record disagrees with the first record's width |
    pub fn from_records(records: Vec<Record>) -> Result<Self, NbError> {
        let Some(first) = records.first() else {
            return Err(NbError::EmptyDataset);
        };
        let n_attributes = first.n_attributes();
        for (record_index, record) in records.iter().enumerate() {
            if record.n_attributes() != n_attributes {
                return Err(NbError::AttributeCountMismatch {
                    expected: n_attributes,
                    got: record.n_attributes(),
                    record_index,
                });
            }
        }
        Ok(Self {
            records,
            n_attributes,
        })
    }

    /// Return the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return `true` if the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return the shared attribute count.
    #[must_use]
    pub fn n_attributes(&self) -> usize {
        self.n_attributes
    }

    /// Append a record, preserving insertion order.
    pub fn push(&mut self, record: Record) {
        debug_assert_eq!(
            record.n_attributes(),
            self.n_attributes,
            "record width must match dataset schema"
        );
        self.records.push(record);
    }

    /// Remove and return the record at `index`, shifting later records left.
    ///
    /// # Errors
    ///
    /// Returns [`NbError::IndexOutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<Record, NbError> {
        if index >= self.records.len() {
            return Err(NbError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Append clones of every record of `other`, in order. `other` is
    /// left unmodified.
    pub fn extend_from(&mut self, other: &Dataset) {
        debug_assert_eq!(
            other.n_attributes, self.n_attributes,
            "datasets must share one schema"
        );
        self.records.extend(other.records.iter().cloned());
    }

    /// Return the records in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Return the records mutably (prediction stamps the predicted label).
    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }
}
