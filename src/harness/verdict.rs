//! # Verdict Engine
//!
//! Decides, category by category, whether an interpreter run satisfied the
//! expectations of its script.
//!
//! The exit code gates everything. Anything outside the three meaningful
//! codes fails the run outright. Otherwise the parse-error pass and the
//! runtime-error pass both run unconditionally, and the output pass runs only
//! after a clean exit. Each pass compares positionally: values are paired up
//! over the overlapping prefix, then a single finding reports the first
//! missing or surplus entry if the lengths differ.

use std::fmt;

use tracing::debug;

use crate::harness::expectation::ExpectationSet;
use crate::harness::normalize::NormalizedStreams;
use crate::harness::runner::ExecutionResult;

pub const CLEAN_EXIT_CODE: i32 = 0;
pub const PARSE_FAILURE_EXIT_CODE: i32 = 65;
pub const RUNTIME_FAILURE_EXIT_CODE: i32 = 70;

/// The exit codes clox may legitimately return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitClass {
    Clean,
    ParseFailure,
    RuntimeFailure,
}

impl ExitClass {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            CLEAN_EXIT_CODE => Some(ExitClass::Clean),
            PARSE_FAILURE_EXIT_CODE => Some(ExitClass::ParseFailure),
            RUNTIME_FAILURE_EXIT_CODE => Some(ExitClass::RuntimeFailure),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ExitClass::Clean => CLEAN_EXIT_CODE,
            ExitClass::ParseFailure => PARSE_FAILURE_EXIT_CODE,
            ExitClass::RuntimeFailure => RUNTIME_FAILURE_EXIT_CODE,
        }
    }
}

/// One of the three independently compared expectation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ParseError,
    RuntimeError,
    Output,
}

impl Category {
    /// The exit class under which this category's stream is meaningful.
    pub fn exit_class(self) -> ExitClass {
        match self {
            Category::ParseError => ExitClass::ParseFailure,
            Category::RuntimeError => ExitClass::RuntimeFailure,
            Category::Output => ExitClass::Clean,
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Category::ParseError => "parser error",
            Category::RuntimeError => "runtime error",
            Category::Output => "output",
        }
    }
}

/// The outcome of one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The interpreter returned a code outside {0, 65, 70}.
    UnexpectedExitCode(i32),
    Matched {
        category: Category,
        expected: String,
    },
    Mismatched {
        category: Category,
        expected: String,
        actual: String,
    },
    /// An expected entry with nothing to compare it against.
    Missing {
        category: Category,
        expected: String,
    },
    /// An actual entry that no expectation accounts for.
    Unexpected {
        category: Category,
        actual: String,
    },
}

impl Finding {
    pub fn passed(&self) -> bool {
        matches!(self, Finding::Matched { .. })
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::UnexpectedExitCode(code) => write!(f, "Unexpected exit code: {}", code),
            Finding::Matched {
                category: Category::Output,
                expected,
            } => write!(f, "expect: {}", expected),
            Finding::Matched { category, expected } => {
                write!(f, "expect {}: {}", category.noun(), expected)
            }
            Finding::Mismatched {
                category,
                expected,
                actual,
            } => write!(f, "Expected {}: {} - got: {}", category.noun(), expected, actual),
            Finding::Missing {
                category: Category::Output,
                expected,
            } => write!(f, "Expected output: {} - got nothing", expected),
            Finding::Missing { category, expected } => {
                write!(f, "Expected {}: {}", category.noun(), expected)
            }
            Finding::Unexpected { category, actual } => {
                write!(f, "Unexpected {}: {}", category.noun(), actual)
            }
        }
    }
}

/// Every finding of one run, in the order the comparisons were made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    findings: Vec<Finding>,
}

impl Verdict {
    pub fn record(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// True if any single comparison failed.
    pub fn failed(&self) -> bool {
        self.findings.iter().any(|finding| !finding.passed())
    }

    pub fn passed_count(&self) -> usize {
        self.findings.iter().filter(|finding| finding.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.findings.len() - self.passed_count()
    }
}

/// Normalizes the run's streams and judges them.
pub fn judge_run(expectations: &ExpectationSet, result: &ExecutionResult) -> Verdict {
    let streams = NormalizedStreams::from(result);
    judge(expectations, result.exit_code, &streams)
}

pub fn judge(expectations: &ExpectationSet, exit_code: i32, streams: &NormalizedStreams) -> Verdict {
    debug!(
        exit_code,
        stdout_lines = streams.stdout.len(),
        stderr_lines = streams.stderr.len(),
        "judging run"
    );

    let mut verdict = Verdict::default();
    let Some(class) = ExitClass::from_code(exit_code) else {
        verdict.record(Finding::UnexpectedExitCode(exit_code));
        return verdict;
    };

    check_error_category(
        &mut verdict,
        Category::ParseError,
        &expectations.parse_errors,
        class,
        &streams.stderr,
    );
    check_error_category(
        &mut verdict,
        Category::RuntimeError,
        &expectations.runtime_errors,
        class,
        &streams.stderr,
    );
    if class == ExitClass::Clean {
        compare_positional(
            &mut verdict,
            Category::Output,
            &expectations.output,
            &streams.stdout,
        );
    }

    verdict
}

fn check_error_category(
    verdict: &mut Verdict,
    category: Category,
    expected: &[String],
    class: ExitClass,
    stderr: &[String],
) {
    let reported = class == category.exit_class() && !stderr.is_empty();

    match expected.first() {
        // Nothing expected, yet the interpreter failed in this category.
        None if reported => verdict.record(Finding::Unexpected {
            category,
            actual: stderr[0].clone(),
        }),
        None => {}
        // Errors expected but the run never failed this way: one representative finding.
        Some(first) if !reported => verdict.record(Finding::Missing {
            category,
            expected: first.clone(),
        }),
        Some(_) => compare_positional(verdict, category, expected, stderr),
    }
}

fn compare_positional(
    verdict: &mut Verdict,
    category: Category,
    expected: &[String],
    actual: &[String],
) {
    let overlap = expected.len().min(actual.len());
    for index in 0..overlap {
        let (want, got) = (&expected[index], &actual[index]);
        if want == got {
            verdict.record(Finding::Matched {
                category,
                expected: want.clone(),
            });
        } else {
            verdict.record(Finding::Mismatched {
                category,
                expected: want.clone(),
                actual: got.clone(),
            });
        }
    }

    if expected.len() > actual.len() {
        verdict.record(Finding::Missing {
            category,
            expected: expected[actual.len()].clone(),
        });
    }
    if actual.len() > expected.len() {
        verdict.record(Finding::Unexpected {
            category,
            actual: actual[expected.len()].clone(),
        });
    }
}
