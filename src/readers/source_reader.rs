use crate::error::{ClimateError, Result};
use crate::models::Observation;
use crate::readers::record_parser::parse_line;
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, PROGRESS_LINE_STRIDE};
use crate::utils::progress::ProgressReporter;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Per-source line accounting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSummary {
    pub path: PathBuf,
    pub lines_read: u64,
    pub observations: u64,
    pub malformed_lines: u64,
    pub blank_lines: u64,
}

impl SourceSummary {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            ..Self::default()
        }
    }
}

/// Streams the lines of a source and hands each well-formed observation to a sink.
///
/// Lines have no length limit. Malformed lines are counted and skipped; an
/// I/O failure on the source itself surfaces as [`ClimateError::SourceUnreadable`].
pub struct SourceReader {
    use_mmap: bool,
    buffer_size: usize,
}

impl SourceReader {
    pub fn new() -> Self {
        Self {
            use_mmap: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Read one named source. Observations folded before a mid-stream read
    /// failure stay with the sink.
    pub fn read_source<F>(
        &self,
        path: &Path,
        progress: Option<&ProgressReporter>,
        sink: F,
    ) -> Result<SourceSummary>
    where
        F: FnMut(Observation),
    {
        let file = File::open(path).map_err(|e| ClimateError::unreadable(path, e))?;

        let mut summary = SourceSummary::new(path);
        let outcome = if self.use_mmap {
            self.read_mmap(&file, &mut summary, progress, sink)
        } else {
            let reader = BufReader::with_capacity(self.buffer_size, file);
            self.drain(reader, &mut summary, progress, sink)
        };

        outcome.map_err(|e| ClimateError::unreadable(path, e))?;
        Ok(summary)
    }

    /// Read records from any buffered reader, e.g. stdin or an in-memory slice
    pub fn read_from<R, F>(&self, reader: R, sink: F) -> Result<SourceSummary>
    where
        R: BufRead,
        F: FnMut(Observation),
    {
        let mut summary = SourceSummary::default();
        self.drain(reader, &mut summary, None, sink)?;
        Ok(summary)
    }

    fn read_mmap<F>(
        &self,
        file: &File,
        summary: &mut SourceSummary,
        progress: Option<&ProgressReporter>,
        sink: F,
    ) -> std::io::Result<()>
    where
        F: FnMut(Observation),
    {
        // Mapping a zero-length file fails on some platforms
        if file.metadata()?.len() == 0 {
            return Ok(());
        }

        let mmap = unsafe { Mmap::map(file)? };
        self.drain(&mmap[..], summary, progress, sink)
    }

    fn drain<R, F>(
        &self,
        mut reader: R,
        summary: &mut SourceSummary,
        progress: Option<&ProgressReporter>,
        mut sink: F,
    ) -> std::io::Result<()>
    where
        R: BufRead,
        F: FnMut(Observation),
    {
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            summary.lines_read += 1;

            if let Some(p) = progress {
                if summary.lines_read % PROGRESS_LINE_STRIDE == 0 {
                    p.increment(PROGRESS_LINE_STRIDE);
                }
            }

            let line = match std::str::from_utf8(&buffer) {
                Ok(line) => line,
                Err(e) => {
                    summary.malformed_lines += 1;
                    debug!(line = summary.lines_read, "Skipping non UTF-8 line: {}", e);
                    continue;
                }
            };

            // Skip empty lines
            if line.trim().is_empty() {
                summary.blank_lines += 1;
                continue;
            }

            match parse_line(line) {
                Ok(observation) => {
                    summary.observations += 1;
                    sink(observation);
                }
                Err(e) => {
                    summary.malformed_lines += 1;
                    debug!(line = summary.lines_read, "Skipping line: {}", e);
                }
            }
        }

        if let Some(p) = progress {
            p.increment(summary.lines_read % PROGRESS_LINE_STRIDE);
        }

        Ok(())
    }
}

impl Default for SourceReader {
    fn default() -> Self {
        Self::new()
    }
}
