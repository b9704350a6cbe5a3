use std::fmt;

use async_trait::async_trait;

/// Shown when the endpoint reports a failure status without saying why.
pub const GENERIC_ERROR_TEXT: &str = "Something went wrong";

/// Errors that can occur while exchanging a message with the endpoint.
/// Every variant ends the current submission; none are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// Endpoint misconfigured (bad URL, client could not be built).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint answered with a failure status. `message` is the payload's `error` field.
    Api { status: u16, message: Option<String> },
    /// Failed to parse the endpoint's response body.
    Parse(String),
}

impl EndpointError {
    /// Text for the error surface: the endpoint's own error string when it sent a
    /// non-empty one, the generic fallback for any other failure status, otherwise
    /// the raw description.
    pub fn display_text(&self) -> String {
        match self {
            EndpointError::Api {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            EndpointError::Api { .. } => GENERIC_ERROR_TEXT.to_string(),
            EndpointError::Config(msg) | EndpointError::Network(msg) | EndpointError::Parse(msg) => {
                msg.clone()
            }
        }
    }
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointError::Config(msg) => write!(f, "config error: {msg}"),
            EndpointError::Network(msg) => write!(f, "network error: {msg}"),
            EndpointError::Api {
                status,
                message: Some(message),
            } => write!(f, "API error (HTTP {status}): {message}"),
            EndpointError::Api {
                status,
                message: None,
            } => write!(f, "API error (HTTP {status})"),
            EndpointError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for EndpointError {}

/// The remote service that answers chat messages.
///
/// One `send` is one request/response exchange. Any timeout is the
/// implementation's business; callers never cancel.
#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    /// Returns the name of the endpoint, for logs and the title bar.
    fn name(&self) -> &str;

    /// Sends one message and returns the reply text (empty when the endpoint sent none).
    async fn send(&self, message: &str) -> Result<String, EndpointError>;

    /// Checks that the endpoint is reachable.
    async fn health(&self) -> Result<(), EndpointError> {
        Ok(())
    }
}
