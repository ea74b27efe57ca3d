use crate::error::{ClimateError, Result};
use crate::processors::Aggregator;
use crate::readers::{SourceReader, SourceSummary};
use crate::utils::progress::ProgressReporter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What happened to each source during a run
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub sources: Vec<SourceSummary>,
    pub unreadable: Vec<UnreadableSource>,
}

#[derive(Debug, Clone)]
pub struct UnreadableSource {
    pub path: PathBuf,
    pub reason: String,
}

impl IngestReport {
    pub fn total_observations(&self) -> u64 {
        self.sources.iter().map(|s| s.observations).sum()
    }

    pub fn total_malformed(&self) -> u64 {
        self.sources.iter().map(|s| s.malformed_lines).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.unreadable.is_empty() && self.total_malformed() == 0
    }

    /// Generate a summary report
    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Ingest Report ===\n");
        for source in &self.sources {
            summary.push_str(&format!(
                "{}: {} lines, {} records, {} malformed, {} blank\n",
                source.path.display(),
                source.lines_read,
                source.observations,
                source.malformed_lines,
                source.blank_lines
            ));
        }
        for source in &self.unreadable {
            summary.push_str(&format!(
                "{}: unreadable ({})\n",
                source.path.display(),
                source.reason
            ));
        }
        summary.push_str(&format!(
            "Sources: {} read, {} unreadable\n",
            self.sources.len(),
            self.unreadable.len()
        ));
        summary.push_str(&format!(
            "Records: {} folded, {} malformed lines skipped\n",
            self.total_observations(),
            self.total_malformed()
        ));

        summary
    }
}

/// Drives every source, in order, into a single [`Aggregator`]
pub struct ClimateProcessor {
    reader: SourceReader,
}

impl ClimateProcessor {
    pub fn new() -> Self {
        Self {
            reader: SourceReader::new(),
        }
    }

    pub fn with_reader(mut self, reader: SourceReader) -> Self {
        self.reader = reader;
        self
    }

    /// Process all sources. Unreadable sources are reported and skipped;
    /// only an empty source list is fatal.
    pub fn process_sources<P: AsRef<Path>>(
        &self,
        sources: &[P],
        progress: Option<&ProgressReporter>,
    ) -> Result<(Aggregator, IngestReport)> {
        if sources.is_empty() {
            return Err(ClimateError::NoSources);
        }

        let mut aggregator = Aggregator::new();
        let mut report = IngestReport::default();

        for source in sources {
            let path = source.as_ref();
            info!("Opening file: {}", path.display());

            if let Some(p) = progress {
                p.reset(&format!("Reading {}", path.display()));
            }

            match self
                .reader
                .read_source(path, progress, |observation| aggregator.fold(&observation))
            {
                Ok(summary) => {
                    info!(
                        records = summary.observations,
                        malformed = summary.malformed_lines,
                        "Finished {}",
                        path.display()
                    );
                    report.sources.push(summary);
                }
                Err(e) if e.is_recoverable() => {
                    warn!("{}", e);
                    let reason = match &e {
                        ClimateError::SourceUnreadable { source, .. } => source.to_string(),
                        other => other.to_string(),
                    };
                    report.unreadable.push(UnreadableSource {
                        path: path.to_path_buf(),
                        reason,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        if let Some(p) = progress {
            p.finish_with_message(&format!(
                "Read {} records for {} states",
                aggregator.total_records(),
                aggregator.len()
            ));
        }

        Ok((aggregator, report))
    }
}

impl Default for ClimateProcessor {
    fn default() -> Self {
        Self::new()
    }
}
