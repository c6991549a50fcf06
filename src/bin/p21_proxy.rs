//! Pattern 21: Proxy
//!
//! Run with: cargo run --bin p21_proxy

use std::process::ExitCode;

fn main() -> ExitCode {
    design_patterns::page::main_for("proxy")
}
