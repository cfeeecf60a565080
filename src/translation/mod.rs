mod client;
mod error;
mod language;
mod prompt;

pub use client::{
    Completer, Completion, CompletionClient, DEFAULT_ENDPOINT, DEFAULT_MODEL, TokenUsage,
    TranslationRequest, parse_completion,
};
pub use error::ServiceError;
pub use language::{COMMON_LANGUAGES, LanguageCompleter, suggest_languages};
pub use prompt::{
    ChatMessage, MessagePair, PromptTemplate, Role, SYSTEM_PROMPT_TEMPLATE, build_messages,
};
