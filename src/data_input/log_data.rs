// src/data_input/log_data.rs

use std::path::PathBuf;

use crate::error::{LogError, Result};
use crate::types::RowProjection;

/// How row processing ended for one extraction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Every data row was projected.
    Complete,
    /// Row processing stopped at `line` (1-based, header is line 1). Rows before it are kept,
    /// rows from it onwards are not.
    Partial { line: u64, reason: String },
}

/// Rows projected from a log file, in file order, plus how the read ended.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub path: PathBuf,
    pub rows: Vec<RowProjection>,
    pub outcome: ExtractionOutcome,
}

impl Extraction {
    pub fn is_complete(&self) -> bool {
        self.outcome == ExtractionOutcome::Complete
    }

    pub fn rows(&self) -> &[RowProjection] {
        &self.rows
    }

    /// Returns the rows regardless of outcome. Partial reads count as success.
    pub fn into_rows(self) -> Vec<RowProjection> {
        self.rows
    }

    /// Returns the rows only if every data row was read; a partial read becomes an error.
    pub fn into_complete(self) -> Result<Vec<RowProjection>> {
        match self.outcome {
            ExtractionOutcome::Complete => Ok(self.rows),
            ExtractionOutcome::Partial { line, .. } => Err(LogError::PartialExtraction {
                path: self.path,
                line,
                rows: self.rows.len(),
            }),
        }
    }
}

/// True when none of the values in the row is the empty string.
pub fn not_empty<S: AsRef<str>>(row: &[S]) -> bool {
    row.iter().all(|value| !value.as_ref().is_empty())
}


// src/data_input/log_data.rs
