//! Pattern 11: Composite
//!
//! Run with: cargo run --bin p11_composite

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("composite")
}
