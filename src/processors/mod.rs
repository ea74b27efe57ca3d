pub mod aggregator;
pub mod climate_processor;

pub use aggregator::Aggregator;
pub use climate_processor::{ClimateProcessor, IngestReport, UnreadableSource};
