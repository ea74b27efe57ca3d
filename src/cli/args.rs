use crate::writers::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tdv-climate")]
#[command(about = "Per-state climate summaries from NOAA tab-delimited observation files")]
#[command(version)]
pub struct Cli {
    /// Tab-delimited observation files, processed in order
    #[arg(value_name = "TDV_FILE")]
    pub files: Vec<PathBuf>,

    #[arg(short, long, value_enum, help = "Report format [default: text]")]
    pub format: Option<ReportFormat>,

    #[arg(short, long, help = "Decimal places in the text report [default: 1]")]
    pub precision: Option<usize>,

    #[arg(long, help = "Render timestamps in UTC instead of local time")]
    pub utc: bool,

    #[arg(long, help = "Memory-map input files instead of buffered reads")]
    pub mmap: bool,

    #[arg(
        short,
        long = "state",
        value_name = "CODE",
        help = "Only report these state codes (repeatable)"
    )]
    pub states: Vec<String>,

    #[arg(long, help = "Read and check the sources without printing the report")]
    pub validate_only: bool,

    #[arg(short, long, help = "Settings file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(short, long, help = "Suppress progress output and non-error logs")]
    pub quiet: bool,
}

impl Cli {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
