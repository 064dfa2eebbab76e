//! Logger setup shared by the binaries
//!
//! Log records go to stderr through `env_logger`; stdout stays reserved for
//! the line each tool prints. `RUST_LOG` overrides the default level.

use env_logger::Env;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize logging at [DEFAULT_LEVEL]
pub fn init() {
    init_with_level(DEFAULT_LEVEL);
}

/// Initialize logging with a fallback level
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_level(level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

/// Level used by binaries that accept `--verbose`
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        DEFAULT_LEVEL
    }
}
