// src/main.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    match user_stats::bootstrap::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
