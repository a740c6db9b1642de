//! Defines the command-line arguments for the clox test harness.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure. A missing script
//! argument is a clap usage error, which exits with status 2.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{HarnessConfig, DEFAULT_INTERPRETER};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "clox-test",
    version,
    about = "Runs a clox script and checks its behavior against the annotations it carries."
)]
pub struct HarnessArgs {
    /// The path to the clox test script.
    #[arg(required = true)]
    pub file: PathBuf,

    /// The interpreter binary to run the script with.
    #[arg(long, env = "CLOX_INTERPRETER", default_value = DEFAULT_INTERPRETER)]
    pub interpreter: PathBuf,

    /// When to colorize the PASS/FAIL tags.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Log extracted expectations and stream sizes to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl HarnessArgs {
    pub fn config(&self) -> HarnessConfig {
        let defaults = HarnessConfig::default();
        HarnessConfig {
            interpreter: self.interpreter.clone(),
            use_colors: match self.color {
                ColorMode::Auto => defaults.use_colors,
                ColorMode::Always => true,
                ColorMode::Never => false,
            },
            verbose: self.verbose,
        }
    }
}
