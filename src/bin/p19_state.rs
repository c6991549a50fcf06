//! Pattern 19: State
//!
//! Run with: cargo run --bin p19_state

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("state")
}
