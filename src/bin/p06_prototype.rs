//! Pattern 6: Prototype
//!
//! Run with: cargo run --bin p06_prototype

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("prototype")
}
