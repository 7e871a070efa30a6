// src/data_analysis/flight_transitions.rs

use crate::constants::TAKEOFF_CURRENT_THRESHOLD_A;
use crate::data_analysis::typed_fields::{leading_fields, parse_value, truncate_to_second};
use crate::data_input::log_data::not_empty;
use crate::error::Result;
use crate::types::{CurrentSeries, RowProjection};

/// Takeoff and landing counts from a battery current series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightTransitions {
    pub takeoffs: usize,
    pub landings: usize,
}

/// Builds a whole-second current series from `[offsetTime, current]` rows, dropping rows
/// with any blank value. Later rows overwrite earlier ones in the same second.
pub fn current_series(rows: &[RowProjection]) -> Result<CurrentSeries> {
    let mut series = CurrentSeries::new();
    for row in rows {
        let row = leading_fields(row, 2)?;
        if !not_empty(row) {
            continue;
        }
        let key = truncate_to_second(parse_value(&row[0])?)?;
        series.insert(key, parse_value(&row[1])?);
    }
    Ok(series)
}

/// Counts threshold crossings against a reference current that only moves on takeoff.
///
/// The reference current starts at 0 and is only updated when a takeoff is counted.
/// Once the first takeoff sets it above the threshold, every later sample below the
/// threshold counts as a landing and no further takeoff can register.
/// See [`count_transitions`] for the sample-to-sample scan.
pub fn count_transitions_legacy(series: &CurrentSeries) -> FlightTransitions {
    let mut prev_current = 0.0;
    let mut counts = FlightTransitions::default();
    for &current in series.values() {
        if current < TAKEOFF_CURRENT_THRESHOLD_A && prev_current > TAKEOFF_CURRENT_THRESHOLD_A {
            counts.landings += 1;
        } else if current > TAKEOFF_CURRENT_THRESHOLD_A && prev_current < TAKEOFF_CURRENT_THRESHOLD_A
        {
            counts.takeoffs += 1;
            prev_current = current;
        }
    }
    counts
}

/// Counts threshold crossings between consecutive seconds.
///
/// A sample exactly at the threshold is neither above nor below it, so it never
/// triggers a transition itself but is still the reference for the next sample.
pub fn count_transitions(series: &CurrentSeries) -> FlightTransitions {
    let mut prev_current = 0.0;
    let mut counts = FlightTransitions::default();
    for &current in series.values() {
        if current < TAKEOFF_CURRENT_THRESHOLD_A && prev_current > TAKEOFF_CURRENT_THRESHOLD_A {
            counts.landings += 1;
        } else if current > TAKEOFF_CURRENT_THRESHOLD_A && prev_current < TAKEOFF_CURRENT_THRESHOLD_A
        {
            counts.takeoffs += 1;
        }
        prev_current = current;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(samples: &[(i64, f64)]) -> CurrentSeries {
        samples.iter().copied().collect()
    }

    fn two_flights() -> CurrentSeries {
        series(&[(0, 0.0), (1, 0.0), (2, 3.0), (3, 3.0), (4, 0.0), (5, 0.0), (6, 3.0)])
    }

    #[test]
    fn sample_to_sample_scan_finds_both_takeoffs() {
        let counts = count_transitions(&two_flights());
        assert_eq!(counts, FlightTransitions { takeoffs: 2, landings: 1 });
    }

    #[test]
    fn legacy_scan_misses_second_takeoff() {
        let counts = count_transitions_legacy(&two_flights());
        assert_eq!(counts.takeoffs, 1);
        // Both seconds on the ground after the first flight count as landings.
        assert_eq!(counts.landings, 2);
    }

    #[test]
    fn first_sample_compares_against_zero() {
        let counts = count_transitions_legacy(&series(&[(0, 5.0)]));
        assert_eq!(counts.takeoffs, 1);
        assert_eq!(count_transitions(&series(&[(0, 5.0)])).takeoffs, 1);
    }

    #[test]
    fn threshold_value_is_neither_above_nor_below() {
        let at_threshold = series(&[(0, 2.0), (1, 2.0)]);
        assert_eq!(count_transitions(&at_threshold), FlightTransitions::default());
        assert_eq!(count_transitions_legacy(&at_threshold), FlightTransitions::default());
    }

    #[test]
    fn short_current_row_is_an_error() {
        let rows = vec![vec!["0.5".to_string()]];
        assert!(matches!(
            current_series(&rows),
            Err(crate::error::LogError::ShortRow { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn keys_are_scanned_in_ascending_order() {
        let rows: Vec<RowProjection> = [["2.5", "3.0"], ["0.1", "0.0"], ["1.9", ""], ["1.2", "0.5"]]
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect();
        let series = current_series(&rows).unwrap();
        assert_eq!(series.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(count_transitions_legacy(&series).takeoffs, 1);
    }
}

// src/data_analysis/flight_transitions.rs
