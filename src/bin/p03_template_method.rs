//! Pattern 3: Template Method
//!
//! Run with: cargo run --bin p03_template_method

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("template_method")
}
