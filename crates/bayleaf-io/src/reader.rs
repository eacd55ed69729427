//! CSV reader producing labeled categorical datasets.

use std::path::{Path, PathBuf};

use bayleaf_nb::{Dataset, Record};
use tracing::{debug, info, instrument};

use crate::IoError;

/// Reads labeled categorical records from a CSV file.
///
/// Expected CSV format:
/// - No header row
/// - Every column but the last is a categorical attribute value; the last
///   column is the class label
/// - The first row fixes the column count, all rows must match it
/// - Fields are taken verbatim (`" sunny"` and `"sunny"` are distinct
///   values); quoted fields may embed commas
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::EmptyDataset`] | Zero rows |
/// | [`IoError::TooFewColumns`] | First row lacks an attribute plus label |
/// | [`IoError::InconsistentRowLength`] | Row differs from the first row's column count |
pub struct CsvReader {
    path: PathBuf,
}

impl CsvReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read and validate the CSV file, returning a labeled [`Dataset`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Dataset, IoError> {
        // 1. Open file (FileNotFound on failure)
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // 2. Build CSV reader without headers.
        // flexible(true) allows rows with varying column counts so that our own
        // InconsistentRowLength check fires instead of a low-level CsvParse error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        // 3. Iterate rows with validation. The first row fixes the schema.
        let mut expected_cols: Option<usize> = None;
        let mut records: Vec<Record> = Vec::new();

        for (row_index, result) in rdr.records().enumerate() {
            let row = result.map_err(|e| IoError::CsvParse {
                path: self.path.clone(),
                offset: e.position().map_or(0, |p| p.byte()),
                source: e,
            })?;

            match expected_cols {
                Some(expected) => {
                    if row.len() != expected {
                        return Err(IoError::InconsistentRowLength {
                            path: self.path.clone(),
                            row_index,
                            expected,
                            got: row.len(),
                        });
                    }
                }
                None => {
                    if row.len() < 2 {
                        return Err(IoError::TooFewColumns {
                            path: self.path.clone(),
                            row_index,
                            got: row.len(),
                        });
                    }
                    debug!(n_columns = row.len(), "first row fixed the schema");
                    expected_cols = Some(row.len());
                }
            }

            // Columns 0..n-1 are attribute values, column n-1 is the label.
            let n = row.len();
            let values: Vec<String> = row.iter().take(n - 1).map(|v| v.to_string()).collect();
            let label = row.get(n - 1).unwrap_or("").to_string();
            records.push(Record::labeled(values, label));
        }

        // 4. Check for empty dataset
        let Some(expected) = expected_cols else {
            return Err(IoError::EmptyDataset {
                path: self.path.clone(),
            });
        };

        let mut dataset = Dataset::new(expected - 1);
        for record in records {
            dataset.push(record);
        }

        info!(
            n_records = dataset.len(),
            n_attributes = dataset.n_attributes(),
            "dataset loaded"
        );

        Ok(dataset)
    }
}
