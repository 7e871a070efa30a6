// src/data_analysis/vel_power.rs

use crate::data_analysis::typed_fields::{leading_fields, parse_value, truncate_to_second};
use crate::data_input::log_data::not_empty;
use crate::error::Result;
use crate::types::{PowerSeries, RowProjection, VelocitySeries};

/// Builds a whole-second velocity series from `[offsetTime, velN, velE, velD]` rows.
///
/// A row is skipped only when one of the three velocities is blank. Later rows overwrite
/// earlier ones that truncate to the same second.
pub fn velocity_series(rows: &[RowProjection]) -> Result<VelocitySeries> {
    let mut series = VelocitySeries::new();
    for row in rows {
        let row = leading_fields(row, 4)?;
        if !not_empty(&row[1..4]) {
            continue;
        }
        let key = truncate_to_second(parse_value(&row[0])?)?;
        let velocity = [
            parse_value(&row[1])?,
            parse_value(&row[2])?,
            parse_value(&row[3])?,
        ];
        series.insert(key, velocity);
    }
    Ok(series)
}

/// Builds a whole-second power series (current x pack voltage) from
/// `[offsetTime, current, voltage]` rows. Same skip and overwrite rules as velocity.
pub fn power_series(rows: &[RowProjection]) -> Result<PowerSeries> {
    let mut series = PowerSeries::new();
    for row in rows {
        let row = leading_fields(row, 3)?;
        if !not_empty(&row[1..3]) {
            continue;
        }
        let key = truncate_to_second(parse_value(&row[0])?)?;
        series.insert(key, parse_value(&row[1])? * parse_value(&row[2])?);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogError;

    fn owned(rows: &[&[&str]]) -> Vec<RowProjection> {
        rows.iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect()
    }

    #[test]
    fn velocity_keys_truncate_and_last_row_wins() {
        let rows = owned(&[
            &["5.1", "1", "2", "3"],
            &["5.9", "4", "5", "6"],
            &["6.0", "", "1", "1"],
            &["7.2", "0.5", "0", "-0.5"],
        ]);
        let series = velocity_series(&rows).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[&5], [4.0, 5.0, 6.0]);
        assert_eq!(series[&7], [0.5, 0.0, -0.5]);
        assert!(!series.contains_key(&6));
    }

    #[test]
    fn power_is_current_times_voltage() {
        let rows = owned(&[&["5", "2", "10"], &["6", "", "10"], &["7.5", "1.5", "15.2"]]);
        let series = power_series(&rows).unwrap();
        assert_eq!(series.len(), 2);
        assert!((series[&5] - 20.0).abs() < 1e-9);
        assert!((series[&7] - 22.8).abs() < 1e-9);
    }

    #[test]
    fn short_rows_are_errors_not_panics() {
        assert!(matches!(
            velocity_series(&owned(&[&["1", "2"]])),
            Err(LogError::ShortRow { expected: 4, actual: 2 })
        ));
        assert!(matches!(
            power_series(&owned(&[&["1"]])),
            Err(LogError::ShortRow { expected: 3, actual: 1 })
        ));
    }

    #[test]
    fn blank_timestamp_on_kept_row_is_a_parse_error() {
        let rows = owned(&[&["", "1", "2", "3"]]);
        assert!(matches!(
            velocity_series(&rows),
            Err(LogError::ParseFloat { .. })
        ));
    }
}

// src/data_analysis/vel_power.rs
