use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use covxml::lines::LineResolver;
use covxml::{cobertura, gocov, report};

/// covxml: convert a gocov JSON report on stdin into Cobertura XML on stdout.
///
/// Statement offsets are resolved to line numbers by reading the source
/// files named in the report, relative to the current directory.
#[derive(Parser)]
#[command(name = "covxml", version, about)]
struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("Failed to read gocov JSON from stdin")?;
    let gocov = gocov::parse(input.as_slice()).context("Failed to decode gocov JSON from stdin")?;

    let mut resolver = LineResolver::new();
    let coverage =
        report::convert(&gocov, &mut resolver).context("Failed to build coverage report")?;

    // Serialize fully before touching stdout so a failure leaves no partial output.
    let mut buf = Vec::new();
    cobertura::write(&coverage, &mut buf).context("Failed to encode Cobertura XML")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&buf)
        .and_then(|()| stdout.flush())
        .context("Failed to write Cobertura XML to stdout")?;
    Ok(())
}
