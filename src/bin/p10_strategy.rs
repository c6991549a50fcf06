//! Pattern 10: Strategy
//!
//! Run with: cargo run --bin p10_strategy

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("strategy")
}
