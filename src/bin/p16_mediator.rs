//! Pattern 16: Mediator
//!
//! Run with: cargo run --bin p16_mediator

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("mediator")
}
