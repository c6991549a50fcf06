//! Pattern 17: Observer
//!
//! Run with: cargo run --bin p17_observer

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("observer")
}
