//! Opt-in debug diagnostics on stderr.
//!
//! Set `SQA_SCAFFOLD_LOG` to any value to see every directory and file
//! operation as it happens. Normal progress output goes to stdout and is
//! not affected.

use std::fmt::Display;

/// Environment variable enabling debug output.
pub const LOG_ENV_VAR: &str = "SQA_SCAFFOLD_LOG";

pub fn enabled() -> bool {
    std::env::var_os(LOG_ENV_VAR).is_some()
}

/// Emit `[DEBUG <scope>] <msg>` when debug logging is enabled.
pub fn debug(scope: &str, msg: impl Display) {
    if enabled() {
        eprintln!("[DEBUG {}] {}", scope, msg);
    }
}
