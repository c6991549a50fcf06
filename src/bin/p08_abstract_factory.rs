//! Pattern 8: Abstract Factory
//!
//! Run with: cargo run --bin p08_abstract_factory

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("abstract_factory")
}
