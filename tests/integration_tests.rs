use clap::Parser;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tdv_climate::cli::{execute, Cli};
use tdv_climate::processors::ClimateProcessor;
use tdv_climate::readers::SourceReader;
use tdv_climate::writers::{ReportFormat, ReportWriter};
use tdv_climate::ClimateError;
use tempfile::TempDir;

// 2015-02-20 04:00:00, 2015-08-03 11:00:00, 2015-04-06 06:00:00 UTC
const TN_LINES: &str = "\
TN\t1424404800000\tdn4h\t60.0\t1.0\t80.0\t0.0\t101000.0\t249.15
TN\t1438599600000\tdn4h\t40.0\t0.0\t20.0\t1.0\t101000.0\t316.15
TN\t1428300000000\tdn4h
";

const WA_LINES: &str = "\
WA\t1428300000000\tc23n\t70.0\t0.0\t100.0\t0.0\t99000.0\t283.15
TN\t1428300000000\tdn4h\t50.0\t0.0\t50.0\t0.0\t101000.0\t283.15
";

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write source file");
    path
}

fn cli(args: &[&str], files: &[&PathBuf]) -> Cli {
    let mut argv: Vec<String> = vec!["tdv-climate".to_string(), "-q".to_string()];
    argv.extend(args.iter().map(|a| a.to_string()));
    argv.extend(files.iter().map(|f| f.display().to_string()));
    Cli::try_parse_from(argv).expect("CLI arguments should parse")
}

fn run_to_string(cli: &Cli) -> String {
    let mut out = Vec::new();
    execute(cli, &mut out).expect("Pipeline should succeed");
    String::from_utf8(out).unwrap()
}

#[test]
fn test_full_text_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let tn = write_source(&temp_dir, "data_tn.tdv", TN_LINES);
    let wa = write_source(&temp_dir, "data_wa.tdv", WA_LINES);

    let rendered = run_to_string(&cli(&["--utc"], &[&tn, &wa]));

    let expected = "\
States found: TN WA
-- State: TN --
Number of Records: 3
Average Humidity: 50.0%
Average Temperature: 49.4F
Max Temperature: 109.4F
Max Temperature on: Mon Aug  3 11:00:00 2015
Min Temperature: -11.2F
Min Temperature on: Fri Feb 20 04:00:00 2015
Lightning Strikes: 1
Records with Snow Cover: 1
Average Cloud Cover: 50.0%
-- State: WA --
Number of Records: 1
Average Humidity: 70.0%
Average Temperature: 50.0F
Max Temperature: 50.0F
Max Temperature on: Mon Apr  6 06:00:00 2015
Min Temperature: 50.0F
Min Temperature on: Mon Apr  6 06:00:00 2015
Lightning Strikes: 0
Records with Snow Cover: 0
Average Cloud Cover: 100.0%
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_unreadable_source_does_not_stop_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.tdv");
    let wa = write_source(&temp_dir, "data_wa.tdv", WA_LINES);

    let rendered = run_to_string(&cli(&["--utc"], &[&missing, &wa]));

    assert!(rendered.starts_with("States found: WA TN\n"));
    assert!(rendered.contains("-- State: TN --\nNumber of Records: 1\n"));
}

#[test]
fn test_no_sources() {
    let cli = cli(&[], &[]);
    let mut out = Vec::new();

    let err = execute(&cli, &mut out).unwrap_err();
    assert!(matches!(err, ClimateError::NoSources));
    assert!(out.is_empty());
}

#[test]
fn test_validate_only_prints_ingest_summary() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let tn = write_source(&temp_dir, "data_tn.tdv", TN_LINES);

    let rendered = run_to_string(&cli(&["--validate-only"], &[&tn]));

    assert!(rendered.contains("=== Ingest Report ==="));
    assert!(rendered.contains("3 lines, 2 records, 1 malformed, 0 blank"));
    assert!(rendered.contains("Found 1 malformed lines and 0 unreadable sources"));
    assert!(!rendered.contains("States found"));
}

#[test]
fn test_json_output_with_state_filter() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let tn = write_source(&temp_dir, "data_tn.tdv", TN_LINES);
    let wa = write_source(&temp_dir, "data_wa.tdv", WA_LINES);

    let rendered = run_to_string(&cli(&["--format", "json", "--state", "WA", "--mmap"], &[&tn, &wa]));

    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    let states = parsed.as_array().unwrap();
    assert_eq!(states.len(), 1);
    assert_eq!(states[0]["state"], "WA");
    assert_eq!(states[0]["record_count"], 1);
    assert_eq!(states[0]["max_temperature_at"], 1428300000);
}

#[test]
fn test_settings_file_and_cli_precision() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let wa = write_source(&temp_dir, "data_wa.tdv", WA_LINES);
    let settings = write_source(&temp_dir, "settings.toml", "precision = 3\nutc = true\n");
    let settings_arg = settings.display().to_string();

    let from_file = run_to_string(&cli(&["--config", &settings_arg], &[&wa]));
    assert!(from_file.contains("Average Humidity: 70.000%"));
    assert!(from_file.contains("Max Temperature on: Mon Apr  6 06:00:00 2015"));

    let overridden = run_to_string(&cli(&["--config", &settings_arg, "-p", "0"], &[&wa]));
    assert!(overridden.contains("Average Humidity: 70%"));
}

#[test]
fn test_processor_and_writer_as_library() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let tn = write_source(&temp_dir, "data_tn.tdv", TN_LINES);
    let wa = write_source(&temp_dir, "data_wa.tdv", WA_LINES);

    let (aggregator, report) = ClimateProcessor::new()
        .with_reader(SourceReader::new().with_buffer_size(1024))
        .process_sources(&[tn, wa], None)
        .unwrap();

    assert_eq!(aggregator.len(), 2);
    assert_eq!(aggregator.get("TN").unwrap().record_count, 3);
    assert_eq!(report.total_observations(), 4);
    assert_eq!(report.total_malformed(), 1);

    let csv = ReportWriter::new()
        .with_format(ReportFormat::Csv)
        .render(aggregator.snapshot())
        .unwrap();
    assert_eq!(csv.lines().count(), 3);
}
