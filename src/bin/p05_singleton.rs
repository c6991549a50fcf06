//! Pattern 5: Singleton
//!
//! Run with: cargo run --bin p05_singleton

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("singleton")
}
