//! Harness faults.
//!
//! These are failures of the harness itself, distinct from expectation
//! mismatches, which are findings in a [`crate::harness::verdict::Verdict`].

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum HarnessError {
    #[error("could not read test script {}", path.display())]
    #[diagnostic(code(clox_harness::read_script))]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not launch interpreter {}", interpreter.display())]
    #[diagnostic(
        code(clox_harness::spawn),
        help("point --interpreter (or CLOX_INTERPRETER) at a built clox binary")
    )]
    Spawn {
        interpreter: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write the report")]
    #[diagnostic(code(clox_harness::report))]
    Report(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = HarnessError::ReadScript {
            path: PathBuf::from("tests/missing.lox"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "could not read test script tests/missing.lox");

        let err = HarnessError::Spawn {
            interpreter: PathBuf::from("bin/clox"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "could not launch interpreter bin/clox");
        assert!(err.help().is_some());
    }
}
