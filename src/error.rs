// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the log reader and its extraction wrappers.
///
/// A malformed data row is not an error by default: extraction stops at that row and
/// reports an [`ExtractionOutcome::Partial`](crate::data_input::log_data::ExtractionOutcome)
/// instead. `PartialExtraction` only appears when a caller asks for a strict result.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("{}: not an existing regular file", .path.display())]
    NotAFile { path: PathBuf },

    #[error("{}: file is empty", .path.display())]
    EmptyFile { path: PathBuf },

    #[error("{}: not a CSV file", .path.display())]
    NotCsv { path: PathBuf },

    #[error("{}: field '{field}' not found in header", .path.display())]
    MissingField { field: String, path: PathBuf },

    #[error("could not parse '{value}' as a number: {source}")]
    ParseFloat {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("row has {actual} values, expected at least {expected}")]
    ShortRow { expected: usize, actual: usize },

    #[error("timestamp {value} cannot be truncated to an integer second")]
    NonFiniteTimestamp { value: f64 },

    #[error("{}: extraction stopped at line {line} after {rows} rows", .path.display())]
    PartialExtraction {
        path: PathBuf,
        line: u64,
        rows: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, LogError>;

// src/error.rs
