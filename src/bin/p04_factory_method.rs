//! Pattern 4: Factory Method
//!
//! Run with: cargo run --bin p04_factory_method

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("factory_method")
}
