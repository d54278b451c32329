//! Cabin CLI - seat inventory and booking for a single flight

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = cabin_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
