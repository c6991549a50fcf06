//! Pattern 15: Facade
//!
//! Run with: cargo run --bin p15_facade

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("facade")
}
