// src/data_analysis/typed_fields.rs

use ndarray::Array2;

use crate::data_input::log_data::not_empty;
use crate::error::{LogError, Result};
use crate::types::{RowProjection, SampleArray, StringArray};

/// Parses one raw value. Surrounding whitespace (including a stray `\r`) is ignored.
pub fn parse_value(value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|source| LogError::ParseFloat {
        value: value.to_string(),
        source,
    })
}

/// Returns the first `width` values of a row, or `ShortRow` if it has fewer.
pub fn leading_fields(row: &[String], width: usize) -> Result<&[String]> {
    row.get(..width).ok_or(LogError::ShortRow {
        expected: width,
        actual: row.len(),
    })
}

/// Truncates an offset time toward zero to a whole-second key.
pub fn truncate_to_second(time_s: f64) -> Result<i64> {
    if !time_s.is_finite() || time_s.abs() >= i64::MAX as f64 {
        return Err(LogError::NonFiniteTimestamp { value: time_s });
    }
    Ok(time_s.trunc() as i64)
}

/// Drops rows with any blank value and casts the rest to `f64`.
pub fn cast_complete_rows(rows: &[RowProjection]) -> Result<Vec<Vec<f64>>> {
    rows.iter()
        .filter(|row| not_empty(row.as_slice()))
        .map(|row| row.iter().map(|v| parse_value(v)).collect())
        .collect()
}

/// Drops rows with any blank value, casts the rest, and packs them into a
/// `rows x n_fields` array. No surviving rows gives shape `(0, n_fields)`.
pub fn to_sample_array(rows: &[RowProjection], n_fields: usize) -> Result<SampleArray> {
    let samples = cast_complete_rows(rows)?;
    let n_rows = samples.len();
    let flat: Vec<f64> = samples.into_iter().flatten().collect();
    Ok(Array2::from_shape_vec((n_rows, n_fields), flat)?)
}

/// Packs raw rows into a string array without filtering or casting.
pub fn to_string_array(rows: Vec<RowProjection>, n_fields: usize) -> Result<StringArray> {
    let n_rows = rows.len();
    let flat: Vec<String> = rows.into_iter().flatten().collect();
    Ok(Array2::from_shape_vec((n_rows, n_fields), flat)?)
}


// src/data_analysis/typed_fields.rs
