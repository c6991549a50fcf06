//! Pattern 12: Decorator
//!
//! Run with: cargo run --bin p12_decorator

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("decorator")
}
