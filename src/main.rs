use std::process::ExitCode;

fn main() -> ExitCode {
    clox_harness::cli::run()
}
