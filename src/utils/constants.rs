/// Record layout: state, timestamp, geohash, humidity, snow, cloud, lightning, pressure, temperature
pub const FIELD_COUNT: usize = 9;
pub const FIELD_DELIMITER: char = '\t';

/// Field positions within a record
pub const FIELD_STATE: usize = 0;
pub const FIELD_TIMESTAMP: usize = 1;
pub const FIELD_HUMIDITY: usize = 3;
pub const FIELD_SNOW: usize = 4;
pub const FIELD_CLOUD_COVER: usize = 5;
pub const FIELD_LIGHTNING: usize = 6;
pub const FIELD_SURFACE_TEMP: usize = 8;

/// Unit conversion
pub const MILLIS_PER_SECOND: i64 = 1000;
pub const KELVIN_TO_FAHRENHEIT_SCALE: f64 = 1.8;
pub const KELVIN_TO_FAHRENHEIT_OFFSET: f64 = 459.67;

/// ctime(3) layout, e.g. "Mon Aug  3 11:00:00 2015"
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const DEFAULT_PRECISION: usize = 1;

/// Environment variables with this prefix override file settings
pub const ENV_PREFIX: &str = "TDV_CLIMATE";

/// Progress spinner refresh cadence, in lines
pub const PROGRESS_LINE_STRIDE: u64 = 4096;
