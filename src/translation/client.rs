use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::ServiceError;
use super::prompt::{ChatMessage, MessagePair};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// One English text and the language to translate it into.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target_language: String,
}

/// Token accounting returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

/// The generated text of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub content: String,
    /// `None` when the provider sent no usage record.
    pub usage: Option<TokenUsage>,
}

/// Anything that can turn a message pair into a completion.
#[allow(async_fn_in_trait)]
pub trait Completer {
    async fn complete(&self, messages: &MessagePair) -> Result<Completion, ServiceError>;
}

impl<T: Completer> Completer for &T {
    async fn complete(&self, messages: &MessagePair) -> Result<Completion, ServiceError> {
        (**self).complete(messages).await
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [&'a ChatMessage; 2],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for OpenAI-compatible chat completion endpoints.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(endpoint: String, model: String, api_key: String) -> Self {
        Self::with_client(Client::new(), endpoint, model, api_key)
    }

    /// Uses a preconfigured `reqwest` client (proxy, TLS or timeout settings).
    pub const fn with_client(
        client: Client,
        endpoint: String,
        model: String,
        api_key: String,
    ) -> Self {
        Self {
            client,
            endpoint,
            model,
            api_key,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

impl Completer for CompletionClient {
    async fn complete(&self, messages: &MessagePair) -> Result<Completion, ServiceError> {
        let url = self.url();

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: messages.as_array(),
            stream: false,
        };

        debug!("Sending chat completion request to {url} (model: {})", self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| ServiceError::Transport {
                url: url.clone(),
                message: error_chain(&e),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ServiceError::Transport {
            url: url.clone(),
            message: error_chain(&e),
        })?;

        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let completion = parse_completion(&body)?;
        debug!("Completion received (usage: {:?})", completion.usage);
        Ok(completion)
    }
}

/// Parses a non-streamed chat completion body.
pub fn parse_completion(body: &str) -> Result<Completion, ServiceError> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ServiceError::EmptyResponse)?;

    Ok(Completion {
        content: choice.message.content.unwrap_or_default(),
        usage: response.usage,
    })
}

/// Pulls `error.message` out of an OpenAI error body, falling back to the raw body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body).map_or_else(
        |_| body.trim().to_string(),
        |envelope| envelope.error.message,
    )
}

// reqwest's top-level message hides the cause ("error sending request"), so walk the sources.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
