//! Renders a verdict as one `PASS:`/`FAIL:` line per finding.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::harness::verdict::{Finding, Verdict};

/// Writes every finding in comparison order.
pub fn write_verdict<W: WriteColor>(out: &mut W, verdict: &Verdict) -> io::Result<()> {
    for finding in verdict.findings() {
        write_finding(out, finding)?;
    }
    out.flush()
}

pub fn write_finding<W: WriteColor>(out: &mut W, finding: &Finding) -> io::Result<()> {
    let (tag, color) = if finding.passed() {
        ("PASS", Color::Green)
    } else {
        ("FAIL", Color::Red)
    };
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(out, "{}", tag)?;
    out.reset()?;
    writeln!(out, ": {}", finding)
}
