// src/types.rs
// Type aliases for extraction results

use ndarray::Array2;
use std::collections::BTreeMap;

/// One projected row: raw string values in requested-field order.
pub type RowProjection = Vec<String>;

/// Rectangular numeric samples, one row per log row, columns in requested-field order.
pub type SampleArray = Array2<f64>;

/// Rectangular raw-string samples (flight modes).
pub type StringArray = Array2<String>;

// Series keyed by offset time truncated to whole seconds. BTreeMap keeps keys ascending.
pub type VelocitySeries = BTreeMap<i64, [f64; 3]>;
pub type PowerSeries = BTreeMap<i64, f64>;
pub type CurrentSeries = BTreeMap<i64, f64>;

// src/types.rs
