//! Diagnostic logging through `log` + `env_logger`.
//!
//! Logs go to stderr. `RUST_LOG` always wins over the built-in filter.

use env_logger::Env;

/// Filter used when `RUST_LOG` is not set.
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { "warn,tradu_cli=debug" } else { "warn" }
}

/// Installs the global logger. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
