//! # Interpreter Execution
//!
//! The interpreter under test is a black box: the harness hands it a script
//! path and gets back an exit code plus the two captured streams. The
//! [`Executor`] trait is that contract, so the verdict pipeline can be driven
//! by a scripted fake in tests without spawning processes.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::errors::HarnessError;

/// Exit code recorded when the child terminated without one and no signal is known.
pub const UNKNOWN_EXIT_CODE: i32 = -1;

/// Everything observable about one interpreter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Runs a script and reports what happened. Blocks until the run is over.
pub trait Executor {
    fn execute(&self, script: &Path) -> Result<ExecutionResult, HarnessError>;
}

/// Launches the interpreter binary as `<interpreter> <script>`.
#[derive(Debug, Clone)]
pub struct InterpreterProcess {
    interpreter: PathBuf,
}

impl InterpreterProcess {
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }
}

impl Executor for InterpreterProcess {
    fn execute(&self, script: &Path) -> Result<ExecutionResult, HarnessError> {
        debug!(interpreter = %self.interpreter.display(), script = %script.display(), "spawning");

        let output = Command::new(&self.interpreter)
            .arg(script)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| HarnessError::Spawn {
                interpreter: self.interpreter.clone(),
                source,
            })?;

        let exit_code = exit_code_of(output.status);
        debug!(
            exit_code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "interpreter finished"
        );

        Ok(ExecutionResult {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// A signalled child reports the negated signal number.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            warn!(signal, "interpreter terminated by signal");
            return -signal;
        }
    }

    warn!("interpreter exited without a status code");
    UNKNOWN_EXIT_CODE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_interpreter_is_a_spawn_error() {
        let process = InterpreterProcess::new("definitely/not/a/real/clox");
        let err = process.execute(Path::new("script.lox")).unwrap_err();
        assert!(matches!(err, HarnessError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn captures_streams_and_exit_code() {
        let process = InterpreterProcess::new("/bin/sh");
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("run.sh");
        std::fs::write(&script, "echo out\necho err >&2\nexit 65\n").unwrap();

        let result = process.execute(&script).unwrap();
        assert_eq!(result, ExecutionResult::new(65, "out\n", "err\n"));
    }

    #[cfg(unix)]
    #[test]
    fn signal_becomes_negative_exit_code() {
        let process = InterpreterProcess::new("/bin/sh");
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("die.sh");
        std::fs::write(&script, "kill -9 $$\n").unwrap();

        let result = process.execute(&script).unwrap();
        assert_eq!(result.exit_code, -9);
    }
}
