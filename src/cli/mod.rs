//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Interactive session handler.
pub mod commands;

pub use args::Args;
