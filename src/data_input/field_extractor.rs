// src/data_input/field_extractor.rs

use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_input::log_data::{Extraction, ExtractionOutcome};
use crate::error::{LogError, Result};
use crate::types::RowProjection;

/// Splits one line on every comma. Quotes are ordinary characters and an empty line is a
/// single empty column.
fn split_line(line: &str) -> StringRecord {
    line.split(',').collect()
}

/// Maps header names to column positions. A repeated name keeps its last position.
fn build_column_indices(headers: &StringRecord) -> HashMap<&str, usize> {
    let mut column_indices: HashMap<&str, usize> = HashMap::new();
    for (i, header) in headers.iter().enumerate() {
        column_indices.insert(header, i);
    }
    column_indices
}

fn project_record(record: &StringRecord, field_idx: &[usize]) -> Option<RowProjection> {
    field_idx
        .iter()
        .map(|&i| record.get(i).map(str::to_string))
        .collect()
}

/// Extracts the named columns from every data row of a CSV log.
///
/// The first line is the header. Every later line, blank ones included, is split on every
/// comma, so a quoted field containing a comma is split like any other. Values are
/// returned untrimmed, in the order of `fields`, one projection per row in file order.
///
/// Header lookup is exact and case-sensitive. Any field missing from the header fails the
/// whole call with [`LogError::MissingField`]. A row that cannot be projected (too few
/// columns, a blank line, undecodable bytes) ends row processing: the rows read so far are
/// returned with an [`ExtractionOutcome::Partial`] outcome and the file path is logged at
/// warn level.
pub fn extract_fields<S: AsRef<str>>(path: &Path, fields: &[S]) -> Result<Extraction> {
    let mut lines = BufReader::new(File::open(path)?).lines();
    let headers_record = match lines.next() {
        Some(header_line) => split_line(&header_line?),
        None => split_line(""),
    };
    let column_indices = build_column_indices(&headers_record);
    log::debug!("{}: {} header columns", path.display(), headers_record.len());

    let field_idx = fields
        .iter()
        .map(|field| {
            let field = field.as_ref();
            column_indices
                .get(field)
                .copied()
                .ok_or_else(|| LogError::MissingField {
                    field: field.to_string(),
                    path: path.to_path_buf(),
                })
        })
        .collect::<Result<Vec<usize>>>()?;

    let mut extracted_data: Vec<RowProjection> = Vec::new();
    let mut outcome = ExtractionOutcome::Complete;

    // Header is line 1.
    for (line_number, result) in (2u64..).zip(lines) {
        match result {
            Ok(line) => {
                let record = split_line(&line);
                match project_record(&record, &field_idx) {
                    Some(row) => extracted_data.push(row),
                    None => {
                        outcome = ExtractionOutcome::Partial {
                            line: line_number,
                            reason: format!(
                                "row has {} columns, header has {}",
                                record.len(),
                                headers_record.len()
                            ),
                        };
                        break;
                    }
                }
            }
            Err(e) => {
                outcome = ExtractionOutcome::Partial {
                    line: line_number,
                    reason: e.to_string(),
                };
                break;
            }
        }
    }

    if let ExtractionOutcome::Partial { line, reason } = &outcome {
        log::warn!(
            "{}: stopped reading rows at line {} ({}); keeping {} rows",
            path.display(),
            line,
            reason,
            extracted_data.len()
        );
    } else {
        log::debug!("{}: extracted {} rows", path.display(), extracted_data.len());
    }

    Ok(Extraction {
        path: path.to_path_buf(),
        rows: extracted_data,
        outcome,
    })
}


// src/data_input/field_extractor.rs
