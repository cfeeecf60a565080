//! # tradu - Interactive Translation Assistant
//!
//! `tradu` asks for English text and a target language, sends them to an
//! OpenAI-compatible chat completion endpoint and prints the translation
//! together with the tokens the request used.
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! tradu
//! ```
//!
//! Type `salir`, `exit` or `quit` (any case) to leave.
//!
//! ## Configuration
//!
//! The API key comes from the environment (a `.env` file in the current
//! directory is honoured). Model and endpoint can be changed in
//! `~/.config/tradu/config.toml`:
//!
//! ```toml
//! [tradu]
//! model = "gpt-4o-mini"
//! endpoint = "https://api.openai.com"
//! api_key_env = "OPENAI_API_KEY"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Startup configuration from the environment and config file.
pub mod config;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The interactive read, translate, print loop.
pub mod session;

/// Prompt construction and the chat completion client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
