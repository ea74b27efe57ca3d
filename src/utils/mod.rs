pub mod constants;
pub mod progress;
pub mod summation;
pub mod time;

pub use constants::*;
pub use progress::ProgressReporter;
pub use summation::CompensatedSum;
pub use time::format_timestamp;
