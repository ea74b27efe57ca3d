//! Layered run settings.
//!
//! Built-in defaults, then an optional settings file, then `TDV_CLIMATE_*`
//! environment variables. Command-line flags are applied on top by the caller.

use crate::error::Result;
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, DEFAULT_PRECISION, ENV_PREFIX};
use crate::writers::ReportFormat;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct Settings {
    pub format: ReportFormat,

    #[validate(range(max = 10))]
    pub precision: usize,

    pub utc: bool,

    pub use_mmap: bool,

    #[validate(range(min = 1024))]
    pub buffer_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            precision: DEFAULT_PRECISION,
            utc: false,
            use_mmap: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file, and the environment
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("format", "text")?
            .set_default("precision", DEFAULT_PRECISION as i64)?
            .set_default("utc", false)?
            .set_default("use_mmap", false)?
            .set_default("buffer_size", DEFAULT_BUFFER_SIZE as i64)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn with_format(mut self, format: Option<ReportFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    pub fn with_precision(mut self, precision: Option<usize>) -> Result<Self> {
        if let Some(precision) = precision {
            self.precision = precision;
            self.validate()?;
        }
        Ok(self)
    }
}
