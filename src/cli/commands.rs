use crate::cli::args::Cli;
use crate::error::{ClimateError, Result};
use crate::processors::ClimateProcessor;
use crate::readers::SourceReader;
use crate::settings::Settings;
use crate::utils::progress::ProgressReporter;
use crate::writers::ReportWriter;
use std::io::Write;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    setup_logging(&cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

/// Run the whole pipeline, writing the report to `out`
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if cli.files.is_empty() {
        return Err(ClimateError::NoSources);
    }

    let settings = Settings::load(cli.config.as_deref())?
        .with_format(cli.format)
        .with_precision(cli.precision)?;
    debug!(?settings, "Resolved settings");

    let reader = SourceReader::new()
        .with_mmap(settings.use_mmap || cli.mmap)
        .with_buffer_size(settings.buffer_size);

    let progress = ProgressReporter::new_spinner("Reading sources...", !cli.show_progress());
    let (aggregator, ingest) = ClimateProcessor::new()
        .with_reader(reader)
        .process_sources(cli.files.as_slice(), Some(&progress))?;
    drop(progress);

    if cli.validate_only {
        writeln!(out, "{}", ingest.generate_summary())?;
        if ingest.is_clean() {
            writeln!(out, "All sources read cleanly")?;
        } else {
            writeln!(
                out,
                "Found {} malformed lines and {} unreadable sources",
                ingest.total_malformed(),
                ingest.unreadable.len()
            )?;
        }
        return Ok(());
    }

    if cli.verbose > 0 && !cli.quiet {
        eprintln!("{}", ingest.generate_summary());
    }

    ReportWriter::new()
        .with_format(settings.format)
        .with_precision(settings.precision)
        .with_utc(settings.utc || cli.utc)
        .with_state_filter(cli.states.clone())
        .write_report(aggregator.snapshot(), out)?;

    out.flush()?;
    Ok(())
}

/// Set up structured logging on stderr, leaving stdout for the report
pub fn setup_logging(cli: &Cli) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = cli.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tdv_climate={}", log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}
