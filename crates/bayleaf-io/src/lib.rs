//! CSV ingestion for bayleaf categorical datasets.

mod error;
mod reader;

pub use error::IoError;
pub use reader::CsvReader;
