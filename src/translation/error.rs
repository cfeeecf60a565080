use thiserror::Error;

/// Failure of a single translation request.
///
/// Each variant keeps the original message so it can be shown to the user as-is.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced an HTTP response (connect, DNS, TLS, I/O).
    #[error("Failed to reach {url}: {message}")]
    Transport { url: String, message: String },

    /// The provider answered with a non-success status.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The body was not a chat completion.
    #[error("Malformed response from API: {0}")]
    MalformedResponse(String),

    #[error("API response contained no choices")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_keeps_provider_message() {
        let err = ServiceError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("Incorrect API key provided"));
    }

    #[test]
    fn test_transport_error_display() {
        let err = ServiceError::Transport {
            url: "http://localhost:1/v1/chat/completions".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }
}
