//! Pattern 9: Bridge
//!
//! Run with: cargo run --bin p09_bridge

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("bridge")
}
