//! token-sync - Merge or replace the color tokens of a design document

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = token_sync::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
