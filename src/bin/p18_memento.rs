//! Pattern 18: Memento
//!
//! Run with: cargo run --bin p18_memento

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("memento")
}
