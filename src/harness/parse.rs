//! # Annotation Extraction
//!
//! Scans a clox script line by line and collects the expectations declared in
//! its comments. Four literal forms are recognized:
//!
//! ```text
//! print 1;           // expect: 1
//! // [line 3] Error at 'x': Expect ';' after value.
//! var a = ;          // Error at ';': Expect expression.
//! nil.foo;           // expect runtime error: Only instances have properties.
//! ```
//!
//! Every pattern is tried against every line. A line that happens to satisfy
//! two patterns contributes to both sequences; there is no precedence.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::errors::HarnessError;
use crate::harness::expectation::{Annotation, ExpectationSet};

static EXPECT_OUTPUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"// expect: (.+)").unwrap());

static BRACKETED_ERROR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"// (\[line (\d+)\] Error(.+))").unwrap());

// Requires a character before the comment: a bare comment line never reports on itself.
static INFERRED_ERROR: Lazy<Regex> = Lazy::new(|| Regex::new(r".// (Error (.+))").unwrap());

static EXPECT_RUNTIME_ERROR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"// expect runtime error: (.+)").unwrap());

/// Reads the script at `path` and extracts its expectations.
pub fn extract_expectations(path: &Path) -> Result<ExpectationSet, HarnessError> {
    let source = fs::read_to_string(path).map_err(|source| HarnessError::ReadScript {
        path: path.to_path_buf(),
        source,
    })?;
    let expectations = extract_from_str(&source);
    debug!(
        script = %path.display(),
        output = ?expectations.output,
        parse_errors = ?expectations.parse_errors,
        runtime_errors = ?expectations.runtime_errors,
        "extracted expectations"
    );
    Ok(expectations)
}

/// Extracts expectations from in-memory script text.
pub fn extract_from_str(source: &str) -> ExpectationSet {
    source
        .lines()
        .enumerate()
        .flat_map(|(index, line)| annotations_on_line(index + 1, line))
        .collect()
}

/// All annotations carried by one physical line, in pattern order.
fn annotations_on_line(line_number: usize, line: &str) -> Vec<Annotation> {
    let mut found = Vec::new();

    if let Some(caps) = EXPECT_OUTPUT.captures(line) {
        found.push(Annotation::ExpectedOutput(caps[1].to_string()));
    }
    if let Some(caps) = BRACKETED_ERROR.captures(line) {
        found.push(Annotation::ExpectedParseError(caps[1].to_string()));
    }
    if let Some(caps) = INFERRED_ERROR.captures(line) {
        found.push(Annotation::ExpectedParseError(infer_error_line(
            line_number,
            &caps[1],
        )));
    }
    if let Some(caps) = EXPECT_RUNTIME_ERROR.captures(line) {
        found.push(Annotation::ExpectedRuntimeError(caps[1].to_string()));
    }

    found
}

/// Fallback for `// Error ...` annotations that omit the line reference.
///
/// The error is assumed to be reported against the line the annotation sits
/// on, so its physical position becomes the `[line N]` prefix.
pub fn infer_error_line(line_number: usize, error: &str) -> String {
    format!("[line {}] {}", line_number, error)
}
