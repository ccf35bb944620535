/// Slots in the calendar-day cycle (leap day excluded)
pub const DAYS_IN_CYCLE: usize = 365;

/// Source values are tenths of a degree Celsius
pub const TENTHS_PER_DEGREE: f64 = 10.0;

/// Default analysis windows
pub const DEFAULT_BASELINE_START: i32 = 2005;
pub const DEFAULT_BASELINE_END: i32 = 2014;
pub const DEFAULT_COMPARISON_YEAR: i32 = 2015;
pub const DEFAULT_LOCATION: &str = "Ann Arbor, Michigan, United States";
pub const DEFAULT_INPUT_FILE: &str = "weather_data.csv";

/// Input column names
pub const COLUMN_DATE: &str = "Date";
pub const COLUMN_VALUE: &str = "Data_Value";

/// Date spellings accepted by the normalizer, tried in order
pub const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y"];

/// Chart layout
pub const CHART_WIDTH: u32 = 1500;
pub const CHART_HEIGHT: u32 = 1050;
pub const Y_AXIS_MIN_C: f64 = -40.0;
pub const Y_AXIS_MAX_C: f64 = 45.0;

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "RECORD_TEMPS";
