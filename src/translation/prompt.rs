use serde::Serialize;

pub const SYSTEM_PROMPT_TEMPLATE: &str = "Translate the following from English into {language}";

/// The user slot takes the source text as-is.
pub const USER_PROMPT_TEMPLATE: &str = "{text}";

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// The system instruction followed by the user's text, always in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePair {
    pub system: ChatMessage,
    pub user: ChatMessage,
}

impl MessagePair {
    /// Returns the messages in the order they are sent.
    pub const fn as_array(&self) -> [&ChatMessage; 2] {
        [&self.system, &self.user]
    }
}

/// A two-slot chat prompt: a system instruction and a user message.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    system: &'static str,
    user: &'static str,
}

impl PromptTemplate {
    /// The English-to-`{language}` translation prompt.
    pub const fn translation() -> Self {
        Self {
            system: SYSTEM_PROMPT_TEMPLATE,
            user: USER_PROMPT_TEMPLATE,
        }
    }

    #[allow(clippy::literal_string_with_formatting_args)]
    pub fn build(&self, target_language: &str, source_text: &str) -> MessagePair {
        // {language} and {text} are placeholders for string replacement, not format arguments.
        // Each slot only knows its own placeholder, so substituted values are never re-expanded.
        MessagePair {
            system: ChatMessage {
                role: Role::System,
                content: self.system.replacen("{language}", target_language, 1),
            },
            user: ChatMessage {
                role: Role::User,
                content: self.user.replacen("{text}", source_text, 1),
            },
        }
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::translation()
    }
}

/// Builds the translation messages for one request.
pub fn build_messages(target_language: &str, source_text: &str) -> MessagePair {
    PromptTemplate::translation().build(target_language, source_text)
}
