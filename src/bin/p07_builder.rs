//! Pattern 7: Builder
//!
//! Run with: cargo run --bin p07_builder

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("builder")
}
