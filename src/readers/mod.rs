pub mod record_parser;
pub mod source_reader;

pub use record_parser::parse_line;
pub use source_reader::{SourceReader, SourceSummary};
