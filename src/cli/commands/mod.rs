//! Command implementations.

/// Interactive translation loop.
pub mod interactive;
