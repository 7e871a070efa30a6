// src/dji_log.rs

use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::data_analysis::flight_transitions::{
    count_transitions, count_transitions_legacy, current_series, FlightTransitions,
};
use crate::data_analysis::typed_fields::{to_sample_array, to_string_array};
use crate::data_analysis::vel_power::{power_series, velocity_series};
use crate::data_input::field_extractor;
use crate::data_input::log_data::Extraction;
use crate::data_input::log_file::validate_log_file;
use crate::error::Result;
use crate::types::{PowerSeries, RowProjection, SampleArray, StringArray, VelocitySeries};

/// A DJI flight log exported to CSV by DatCon.
///
/// Only the path is kept. Every extraction reopens the file, re-reads the header and
/// closes the file before returning, so repeated calls on an unchanged file agree.
#[derive(Debug, Clone)]
pub struct DjiLog {
    path: PathBuf,
}

impl DjiLog {
    /// Opens a log, checking that the path is an existing, non-empty CSV file.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        validate_log_file(path)?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extracts raw string values for `fields` from every row. See
    /// [`field_extractor::extract_fields`] for the splitting and truncation rules.
    pub fn extract_fields<S: AsRef<str>>(&self, fields: &[S]) -> Result<Extraction> {
        field_extractor::extract_fields(&self.path, fields)
    }

    // Rows for a wrapper. A truncated read is still used; the extractor already logged it.
    fn rows(&self, fields: &[&str]) -> Result<Vec<RowProjection>> {
        Ok(self.extract_fields(fields)?.into_rows())
    }

    fn samples(&self, fields: &[&str]) -> Result<SampleArray> {
        to_sample_array(&self.rows(fields)?, fields.len())
    }

    /// Columns: offsetTime (s), longitude, latitude, relative altitude (m), roll, pitch, yaw (deg).
    pub fn extract_6dof(&self) -> Result<SampleArray> {
        self.samples(&POSE_6DOF_FIELDS)
    }

    /// Columns: offsetTime (s), velN, velE, velD (m/s).
    pub fn extract_vel(&self) -> Result<SampleArray> {
        self.samples(&VELOCITY_FIELDS)
    }

    /// Columns: offsetTime (s), throttle, rudder, elevator, aileron (0-255).
    pub fn extract_rc(&self) -> Result<SampleArray> {
        self.samples(&RC_FIELDS)
    }

    /// Columns: offsetTime, mode switch. Raw strings, blank rows included.
    pub fn extract_modes(&self) -> Result<StringArray> {
        to_string_array(self.rows(&MODE_FIELDS)?, MODE_FIELDS.len())
    }

    /// Columns: offsetTime (s), battery current (A).
    pub fn extract_current(&self) -> Result<SampleArray> {
        self.samples(&CURRENT_FIELDS)
    }

    /// Velocity and electrical power keyed by whole second of offset time.
    ///
    /// The two series are read independently and are not aligned: a second may appear in
    /// one map and not the other.
    pub fn extract_vel_power(&self) -> Result<(VelocitySeries, PowerSeries)> {
        let velocities = velocity_series(&self.rows(&VELOCITY_FIELDS)?)?;
        let power = power_series(&self.rows(&POWER_FIELDS)?)?;
        Ok((velocities, power))
    }

    /// Raw `[offsetTime, GPS:dateTimeStamp]` rows, unparsed and unfiltered.
    pub fn extract_times(&self) -> Result<Vec<RowProjection>> {
        self.rows(&GPS_TIME_FIELDS)
    }

    /// Number of takeoffs, counted with the legacy reference-current rule
    /// (see [`count_transitions_legacy`]).
    pub fn get_takeoffs(&self) -> Result<usize> {
        let series = current_series(&self.rows(&CURRENT_FIELDS)?)?;
        Ok(count_transitions_legacy(&series).takeoffs)
    }

    /// Takeoffs and landings from consecutive-second threshold crossings.
    pub fn count_flight_transitions(&self) -> Result<FlightTransitions> {
        let series = current_series(&self.rows(&CURRENT_FIELDS)?)?;
        Ok(count_transitions(&series))
    }
}

// src/dji_log.rs
