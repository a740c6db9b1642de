//! # clox Conformance Harness
//!
//! One invocation judges one script:
//!
//! 1. **Extraction** ([`parse`]): read the script's annotation comments into an [`ExpectationSet`]
//! 2. **Execution** ([`runner`]): run the interpreter on the script through an [`Executor`]
//! 3. **Normalization** ([`normalize`]): reduce the captured streams to non-blank lines
//! 4. **Judgement** ([`verdict`]): compare positionally, category by category
//! 5. **Reporting** ([`reporting`]): one `PASS`/`FAIL` line per comparison
//!
//! Extraction and execution are independent of each other; both finish before
//! any comparison starts.

use std::path::Path;

use tracing::info;

use crate::errors::HarnessError;

pub mod expectation;
pub mod normalize;
pub mod parse;
pub mod reporting;
pub mod runner;
pub mod verdict;

pub use expectation::{Annotation, ExpectationSet};
pub use normalize::NormalizedStreams;
pub use runner::{ExecutionResult, Executor, InterpreterProcess};
pub use verdict::{Finding, Verdict};

/// Extracts the expectations of `script`, runs it, and judges the run.
pub fn run_script<E: Executor + ?Sized>(executor: &E, script: &Path) -> Result<Verdict, HarnessError> {
    let expectations = parse::extract_expectations(script)?;
    let result = executor.execute(script)?;
    let verdict = verdict::judge_run(&expectations, &result);
    info!(
        script = %script.display(),
        passed = verdict.passed_count(),
        failed = verdict.failed_count(),
        "run complete"
    );
    Ok(verdict)
}
