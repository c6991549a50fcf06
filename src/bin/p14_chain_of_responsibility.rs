//! Pattern 14: Chain of Responsibility
//!
//! Run with: cargo run --bin p14_chain_of_responsibility

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("chain_of_responsibility")
}
