//! Error types for the QnA Maker client.
//!
//! Library crates use [`QnaMakerError`] via `thiserror`. The embedding
//! application owns retries, logging, and user-facing messaging.

/// Top-level error type for all client operations.
#[derive(Debug, thiserror::Error)]
pub enum QnaMakerError {
    /// Endpoint validation failed; the client is never constructed.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/transport failure while talking to the service.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        /// The underlying transport-layer cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// Transport succeeded but the response shape does not match the
    /// service contract. The raw payload is kept for diagnostics.
    #[error("invalid response: {message}")]
    InvalidResponse {
        message: String,
        payload: serde_json::Value,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, QnaMakerError>;

impl QnaMakerError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a transport-layer failure, keeping the underlying cause.
    pub fn transport(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            message: msg.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid-response error carrying the offending payload.
    pub fn invalid_response(msg: impl Into<String>, payload: serde_json::Value) -> Self {
        Self::InvalidResponse {
            message: msg.into(),
            payload,
        }
    }
}
