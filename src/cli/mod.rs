//! The clox-test Command-Line Interface.
//!
//! Parses the arguments, judges the one script it was given, and maps the
//! outcome onto the process exit status:
//!
//! - `0`: every expectation satisfied
//! - `1`: at least one mismatch, or a harness fault
//! - `2`: usage error (reported by clap)

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::args::HarnessArgs;
use crate::config::HarnessConfig;
use crate::errors::HarnessError;
use crate::harness::{self, InterpreterProcess, Verdict};

pub mod args;
pub mod output;

const EXIT_FAILED: u8 = 1;

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = HarnessArgs::parse();
    let config = args.config();
    output::init_logging(&config);

    match check_script(&args.file, &config) {
        Ok(verdict) if verdict.failed() => ExitCode::from(EXIT_FAILED),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(e);
            ExitCode::from(EXIT_FAILED)
        }
    }
}

fn check_script(script: &Path, config: &HarnessConfig) -> Result<Verdict, HarnessError> {
    let executor = InterpreterProcess::new(&config.interpreter);
    let verdict = harness::run_script(&executor, script)?;
    output::print_verdict(&verdict, config)?;
    Ok(verdict)
}
