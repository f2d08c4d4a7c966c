mod cli;

use std::io::Write;
use std::process::ExitCode;

use agecalc::{CalendarDate, DateComponents, Format, Outcome, render};
use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Exit status when the date components were rejected.
const EXIT_INVALID: u8 = 1;
/// Exit status for runtime failures; matches clap's usage error status.
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let reference = cli
        .today
        .map(CalendarDate::from)
        .unwrap_or_else(CalendarDate::today);
    info!(%reference, "computing age");

    let components = DateComponents::parse(&cli.day, &cli.month, &cli.year);
    let outcome = Outcome::evaluate(components, reference);

    let mut rendered =
        render(&outcome, cli.format, cli.text_style()).context("Failed to render outcome")?;
    if cli.format == Format::Json {
        rendered.push('\n');
    }

    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("Failed to write to stdout")?;

    if outcome.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INVALID))
    }
}
