// src/constants.rs

// Demonstration log used when no path is given on the command line.
pub const DEFAULT_LOG_PATH: &str = "FLY034.csv";

// Extension (any case) a log file must carry to be read as CSV.
pub const CSV_EXTENSION: &str = "csv";

// Battery current (amps) separating "on the ground" from "flying".
pub const TAKEOFF_CURRENT_THRESHOLD_A: f64 = 2.0;

// --- Header names as written by the DatCon decoder ---
pub const FIELD_OFFSET_TIME: &str = "offsetTime";

pub const FIELD_LONGITUDE: &str = "IMU_ATTI(0):Longitude";
pub const FIELD_LATITUDE: &str = "IMU_ATTI(0):Latitude";
pub const FIELD_RELATIVE_HEIGHT: &str = "General:relativeHeight";
pub const FIELD_ROLL: &str = "IMU_ATTI(0):roll";
pub const FIELD_PITCH: &str = "IMU_ATTI(0):pitch";
pub const FIELD_YAW: &str = "IMU_ATTI(0):yaw";

pub const FIELD_VEL_N: &str = "IMU_ATTI(0):velN";
pub const FIELD_VEL_E: &str = "IMU_ATTI(0):velE";
pub const FIELD_VEL_D: &str = "IMU_ATTI(0):velD";

pub const FIELD_RC_THROTTLE: &str = "RC:Throttle";
pub const FIELD_RC_RUDDER: &str = "RC:Rudder";
pub const FIELD_RC_ELEVATOR: &str = "RC:Elevator";
pub const FIELD_RC_AILERON: &str = "RC:Aileron";
pub const FIELD_RC_MODE_SWITCH: &str = "RC:ModeSwitch";

pub const FIELD_BATT_CURRENT: &str = "BattInfo:Current";
pub const FIELD_BATT_PACK_VOLTAGE: &str = "BattInfo:Pack_ve";

pub const FIELD_GPS_DATETIME: &str = "GPS:dateTimeStamp";

// --- Field sets requested by each extraction ---
pub const POSE_6DOF_FIELDS: [&str; 7] = [
    FIELD_OFFSET_TIME,
    FIELD_LONGITUDE,
    FIELD_LATITUDE,
    FIELD_RELATIVE_HEIGHT,
    FIELD_ROLL,
    FIELD_PITCH,
    FIELD_YAW,
];
pub const VELOCITY_FIELDS: [&str; 4] = [FIELD_OFFSET_TIME, FIELD_VEL_N, FIELD_VEL_E, FIELD_VEL_D];
pub const RC_FIELDS: [&str; 5] = [
    FIELD_OFFSET_TIME,
    FIELD_RC_THROTTLE,
    FIELD_RC_RUDDER,
    FIELD_RC_ELEVATOR,
    FIELD_RC_AILERON,
];
pub const MODE_FIELDS: [&str; 2] = [FIELD_OFFSET_TIME, FIELD_RC_MODE_SWITCH];
pub const CURRENT_FIELDS: [&str; 2] = [FIELD_OFFSET_TIME, FIELD_BATT_CURRENT];
pub const POWER_FIELDS: [&str; 3] = [FIELD_OFFSET_TIME, FIELD_BATT_CURRENT, FIELD_BATT_PACK_VOLTAGE];
pub const GPS_TIME_FIELDS: [&str; 2] = [FIELD_OFFSET_TIME, FIELD_GPS_DATETIME];

// src/constants.rs
