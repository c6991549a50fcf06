//! Pattern 13: Visitor
//!
//! Run with: cargo run --bin p13_visitor

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("visitor")
}
