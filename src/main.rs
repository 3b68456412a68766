use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use sortcheck::config::DEFAULT_BUFFER_CAPACITY;
use sortcheck::{report, Outcome, ScanConfig, ScanError, Scanner};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sortcheck",
    about = "Check that a file of little-endian i32 values is in non-decreasing order"
)]
struct Cli {
    /// File of packed little-endian 32-bit signed integers.
    path: PathBuf,
    /// Read buffer size in bytes (multiple of 4).
    #[arg(long, default_value_t = DEFAULT_BUFFER_CAPACITY)]
    buffer_size: usize,
    /// Log scan progress to stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(outcome) => {
            println!("{}", report::render(&outcome));
            ExitCode::from(report::exit_code(&outcome))
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<ScanError>()
                .map(report::error_exit_code)
                .unwrap_or(report::SCAN_ERROR_EXIT_CODE);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome> {
    let config = ScanConfig::default().with_buffer_capacity(cli.buffer_size)?;
    let scanner = Scanner::new(config)?;
    let outcome = scanner
        .scan_file(&cli.path)
        .with_context(|| format!("failed to check {}", cli.path.display()))?;
    Ok(outcome)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
