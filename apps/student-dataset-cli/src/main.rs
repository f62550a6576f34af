use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use student_dataset_csvs::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, PREVIEW_ROWS};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod error;

use config::PipelineConfig;
use error::CliResult;

#[derive(Parser, Debug)]
#[command(name = "student-dataset")]
#[command(about = "Select the columns of interest from the student performance dataset")]
#[command(version)]
struct Cli {
    /// Semicolon-separated source dataset
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Comma-separated output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Rows shown in the preview
    #[arg(long, default_value_t = PREVIEW_ROWS)]
    preview_rows: usize,
}

fn init_logging() {
    // Logs go to stderr; stdout carries the report
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    let config = PipelineConfig::new(cli.input, cli.output, cli.preview_rows)?;
    commands::select_columns::execute(&config)
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_without_arguments() {
        let cli = Cli::try_parse_from(["student-dataset"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("student-mat.csv"));
        assert_eq!(cli.output, PathBuf::from("student-mat-selected.csv"));
        assert_eq!(cli.preview_rows, 5);
    }

    #[test]
    fn test_paths_from_arguments() {
        let cli = Cli::try_parse_from([
            "student-dataset",
            "-i",
            "data/in.csv",
            "--output",
            "out/selected.csv",
            "--preview-rows",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("data/in.csv"));
        assert_eq!(cli.output, PathBuf::from("out/selected.csv"));
        assert_eq!(cli.preview_rows, 3);
    }
}
