use crate::error::Result;
use crate::models::StateStats;
use crate::utils::constants::DEFAULT_PRECISION;
use crate::utils::time::format_timestamp;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable per-state sections
    #[default]
    Text,
    /// JSON array, one object per state
    Json,
    /// CSV, one row per state
    Csv,
}

/// Flattened view of a [`StateStats`] with the derived averages filled in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSummary {
    pub state: String,
    pub record_count: u64,
    pub average_humidity: Option<f64>,
    pub average_temperature: Option<f64>,
    pub max_temperature: f64,
    pub max_temperature_at: i64,
    pub max_temperature_on: String,
    pub min_temperature: f64,
    pub min_temperature_at: i64,
    pub min_temperature_on: String,
    pub lightning_strikes: u64,
    pub snow_cover_records: u64,
    pub average_cloud_cover: Option<f64>,
}

impl StateSummary {
    pub fn from_stats(stats: &StateStats, utc: bool) -> Self {
        Self {
            state: stats.code().to_string(),
            record_count: stats.record_count,
            average_humidity: stats.average_humidity(),
            average_temperature: stats.average_temperature(),
            max_temperature: stats.max_temperature,
            max_temperature_at: stats.max_temperature_at,
            max_temperature_on: format_timestamp(stats.max_temperature_at, utc),
            min_temperature: stats.min_temperature,
            min_temperature_at: stats.min_temperature_at,
            min_temperature_on: format_timestamp(stats.min_temperature_at, utc),
            lightning_strikes: stats.lightning_count,
            snow_cover_records: stats.snow_count,
            average_cloud_cover: stats.average_cloud_cover(),
        }
    }
}

/// Renders aggregator snapshots. Precision applies to the text format only;
/// JSON and CSV carry full values.
pub struct ReportWriter {
    format: ReportFormat,
    precision: usize,
    utc: bool,
    states: Vec<String>,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self {
            format: ReportFormat::Text,
            precision: DEFAULT_PRECISION,
            utc: false,
            states: Vec::new(),
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    /// Only report these codes; an empty list reports everything
    pub fn with_state_filter(mut self, states: Vec<String>) -> Self {
        self.states = states;
        self
    }

    pub fn write_report<W: Write>(&self, snapshot: &[StateStats], out: &mut W) -> Result<()> {
        let summaries: Vec<StateSummary> = snapshot
            .iter()
            .filter(|stats| self.states.is_empty() || self.states.iter().any(|s| s == stats.code()))
            .map(|stats| StateSummary::from_stats(stats, self.utc))
            .collect();

        match self.format {
            ReportFormat::Text => self.write_text(&summaries, out),
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &summaries)?;
                writeln!(out)?;
                Ok(())
            }
            ReportFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut *out);
                for summary in &summaries {
                    writer.serialize(summary)?;
                }
                writer.flush()?;
                Ok(())
            }
        }
    }

    pub fn render(&self, snapshot: &[StateStats]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_report(snapshot, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn write_text<W: Write>(&self, summaries: &[StateSummary], out: &mut W) -> Result<()> {
        let precision = self.precision;

        write!(out, "States found:")?;
        for summary in summaries {
            write!(out, " {}", summary.state)?;
        }
        writeln!(out)?;

        for s in summaries {
            writeln!(out, "-- State: {} --", s.state)?;
            writeln!(out, "Number of Records: {}", s.record_count)?;
            writeln!(out, "Average Humidity: {}%", fixed(s.average_humidity, precision))?;
            writeln!(out, "Average Temperature: {}F", fixed(s.average_temperature, precision))?;
            writeln!(out, "Max Temperature: {:.*}F", precision, s.max_temperature)?;
            writeln!(out, "Max Temperature on: {}", s.max_temperature_on)?;
            writeln!(out, "Min Temperature: {:.*}F", precision, s.min_temperature)?;
            writeln!(out, "Min Temperature on: {}", s.min_temperature_on)?;
            writeln!(out, "Lightning Strikes: {}", s.lightning_strikes)?;
            writeln!(out, "Records with Snow Cover: {}", s.snow_cover_records)?;
            writeln!(out, "Average Cloud Cover: {}%", fixed(s.average_cloud_cover, precision))?;
        }

        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn fixed(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "n/a".to_string(),
    }
}
