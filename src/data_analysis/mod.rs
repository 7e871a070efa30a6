// src/data_analysis/mod.rs

pub mod flight_transitions;
pub mod typed_fields;
pub mod vel_power;

// src/data_analysis/mod.rs
