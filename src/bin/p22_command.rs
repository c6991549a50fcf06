//! Pattern 22: Command
//!
//! Run with: cargo run --bin p22_command

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("command")
}
