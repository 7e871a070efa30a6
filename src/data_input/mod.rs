// src/data_input/mod.rs

pub mod field_extractor;
pub mod log_data;
pub mod log_file;

// src/data_input/mod.rs
