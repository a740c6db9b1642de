//! Runtime configuration for a harness invocation.

use std::path::PathBuf;

use termcolor::ColorChoice;

/// Interpreter used when neither `--interpreter` nor `CLOX_INTERPRETER` is given.
pub const DEFAULT_INTERPRETER: &str = "bin/clox";

pub struct HarnessConfig {
    pub interpreter: PathBuf,
    pub use_colors: bool,
    pub verbose: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            use_colors: atty::is(atty::Stream::Stdout),
            verbose: false,
        }
    }
}

impl HarnessConfig {
    /// The termcolor choice for the report stream.
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }

    /// Filter directive for the tracing subscriber when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.interpreter, PathBuf::from("bin/clox"));
        assert!(!config.verbose);
        assert_eq!(config.default_log_filter(), "warn");
    }

    #[test]
    fn color_choice_follows_flag() {
        let mut config = HarnessConfig::default();
        config.use_colors = false;
        assert_eq!(config.color_choice(), ColorChoice::Never);
        config.use_colors = true;
        assert_eq!(config.color_choice(), ColorChoice::Always);
    }
}
