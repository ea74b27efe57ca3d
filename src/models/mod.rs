pub mod observation;
pub mod state_stats;

pub use observation::{kelvin_to_fahrenheit, millis_to_seconds, Observation};
pub use state_stats::StateStats;
