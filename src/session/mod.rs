//! Interactive translation session.
//!
//! Asks for English text and a target language, translates, prints, repeats.

/// Exit sentinels and source-text parsing.
pub mod command;
mod reader;
#[allow(clippy::module_inception)]
mod session;
mod ui;

pub use reader::{ConsoleReader, InquireReader, LineReader, Prompt, StdinReader};
pub use session::{SessionStats, TranslationSession};
