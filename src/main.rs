use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tdv_climate::cli::{run, Cli};
use tdv_climate::ClimateError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ClimateError::NoSources) => {
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
