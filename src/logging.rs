//! Logger setup for the playground binaries.
//!
//! Library code only uses the `log` macros. Binaries call [`init`] once;
//! the filter is read from `PLAYGROUND_LOG` (same syntax as `RUST_LOG`).

use env_logger::{Builder, Env};

pub const LOG_ENV: &str = "PLAYGROUND_LOG";

/// Installs the global logger. Calling it twice is harmless.
pub fn init() {
    let env = Env::default().filter_or(LOG_ENV, "warn");
    let _ = Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

/// Logger for unit and integration tests: output is captured by the test harness.
pub fn init_for_tests() {
    let _ = Builder::from_env(Env::default().filter_or(LOG_ENV, "debug"))
        .is_test(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_for_tests();
        init_for_tests();
        init();
        log::debug!("logger still usable after repeated init");
    }
}
