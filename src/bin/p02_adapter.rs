//! Pattern 2: Adapter
//!
//! Run with: cargo run --bin p02_adapter

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("adapter")
}
