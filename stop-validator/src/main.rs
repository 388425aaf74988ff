use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stop_validator::input::{InputError, read_batch, read_batch_file};
use stop_validator::pipeline::{Check, run_checks};

/// Validate a JSON batch of bus stop records.
#[derive(Debug, Parser)]
#[command(name = "stop-validator", version)]
struct Cli {
    /// Checks to run
    #[arg(value_enum, default_values_t = [Check::OnDemand])]
    checks: Vec<Check>,

    /// Read the batch from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let records = match &cli.input {
        Some(path) => read_batch_file(path)?,
        None => read_batch(io::stdin().lock())?,
    };

    let report = run_checks(&records, &cli.checks);

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{report}")?;
    }
    Ok(())
}
