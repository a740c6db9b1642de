//! Reduces raw interpreter streams to the line sequences the verdict engine compares.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::harness::runner::ExecutionResult;

/// The generic stack-trace footer clox prints after a runtime error.
static TRACE_FOOTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[line \d+\] in script$").unwrap());

/// Non-blank stdout and stderr lines of one run, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedStreams {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl NormalizedStreams {
    pub fn from_raw(stdout: &str, stderr: &str) -> Self {
        Self {
            stdout: split_non_blank(stdout).collect(),
            stderr: split_non_blank(stderr)
                .filter(|line| !is_trace_footer(line))
                .collect(),
        }
    }
}

impl From<&ExecutionResult> for NormalizedStreams {
    fn from(result: &ExecutionResult) -> Self {
        Self::from_raw(&result.stdout, &result.stderr)
    }
}

pub fn is_trace_footer(line: &str) -> bool {
    TRACE_FOOTER.is_match(line)
}

// `\r\n` yields an empty piece between the two breaks, which the filter drops.
fn split_non_blank(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(['\n', '\r'])
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_lines_dropped_from_both_streams() {
        let streams = NormalizedStreams::from_raw("1\n\n2\n", "\nboom\n\n");
        assert_eq!(streams.stdout, vec!["1", "2"]);
        assert_eq!(streams.stderr, vec!["boom"]);
    }

    #[test]
    fn trace_footer_dropped_from_stderr_only() {
        let streams = NormalizedStreams::from_raw(
            "[line 3] in script\n",
            "Operands must be numbers.\n[line 3] in script\n",
        );
        assert_eq!(streams.stdout, vec!["[line 3] in script"]);
        assert_eq!(streams.stderr, vec!["Operands must be numbers."]);
    }

    #[test]
    fn footer_match_is_exact() {
        assert!(is_trace_footer("[line 120] in script"));
        assert!(!is_trace_footer(" [line 1] in script"));
        assert!(!is_trace_footer("[line 1] in script "));
        assert!(!is_trace_footer("[line x] in script"));
        assert!(!is_trace_footer("[line 1] in function"));
    }

    #[test]
    fn no_trimming() {
        let streams = NormalizedStreams::from_raw("  padded  \n", "");
        assert_eq!(streams.stdout, vec!["  padded  "]);
    }

    #[test]
    fn crlf_and_lone_cr_are_line_breaks() {
        let streams = NormalizedStreams::from_raw("a\r\nb\rc", "");
        assert_eq!(streams.stdout, vec!["a", "b", "c"]);
    }
}
