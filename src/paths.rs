//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations,
//! so the config file lives in the same place on Linux and macOS.

use std::path::PathBuf;

const APP_DIR: &str = "tradu";

/// Returns the configuration directory for tradu.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/tradu` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/tradu` otherwise
///
/// Returns `None` if neither is available.
pub fn config_dir() -> Option<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg).join(APP_DIR)),
        _ => dirs::home_dir().map(|home| home.join(".config").join(APP_DIR)),
    }
}
