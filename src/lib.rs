// src/lib.rs - Library interface for DJI flight-log CSV extraction

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod dji_log;
pub mod error;
pub mod types;

pub use data_input::log_data::{Extraction, ExtractionOutcome};
pub use data_input::log_file::count_lines;
pub use dji_log::DjiLog;
pub use error::{LogError, Result};

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
