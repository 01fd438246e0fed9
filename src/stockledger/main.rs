//! # Stock CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns all
//! user-facing concerns: argument parsing, resolving which inventory file to
//! use, logging setup, dispatch, error reporting and table rendering.
//!
//! A failed load (missing or malformed file) and a failed save both end the
//! process with status 1. After a failed save the change was applied in memory
//! only; the file still holds the previous state.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
