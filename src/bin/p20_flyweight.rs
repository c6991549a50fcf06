//! Pattern 20: Flyweight
//!
//! Run with: cargo run --bin p20_flyweight

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("flyweight")
}
