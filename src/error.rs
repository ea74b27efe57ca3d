use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClimateError>;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("The file: \"{}\" could not be read: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record: {reason}")]
    MalformedRecord { reason: String },

    #[error("No input sources given")]
    NoSources,

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),
}

impl ClimateError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ClimateError::MalformedRecord {
            reason: reason.into(),
        }
    }

    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClimateError::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Errors that only cost a line or a source, never the whole run
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ClimateError::SourceUnreadable { .. } | ClimateError::MalformedRecord { .. }
        )
    }
}
