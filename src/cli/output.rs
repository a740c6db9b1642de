//! Handles all user-facing output for the CLI.
//!
//! The verdict report goes to stdout. Harness faults and tracing events go to
//! stderr, so stdout carries nothing but `PASS`/`FAIL` lines.

use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

use crate::config::HarnessConfig;
use crate::errors::HarnessError;
use crate::harness::reporting::write_verdict;
use crate::harness::Verdict;

/// Installs the stderr tracing subscriber. `RUST_LOG` takes precedence over `--verbose`.
pub fn init_logging(config: &HarnessConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Prints the verdict report to stdout.
pub fn print_verdict(verdict: &Verdict, config: &HarnessConfig) -> Result<(), HarnessError> {
    let mut stdout = StandardStream::stdout(config.color_choice());
    write_verdict(&mut stdout, verdict)?;
    Ok(())
}

/// Renders a harness fault through miette on stderr.
pub fn print_error(error: HarnessError) {
    eprintln!("{:?}", miette::Report::new(error));
}
