//! JSON-over-HTTP endpoint.
//!
//! `POST {base_url}/api/chat` with `{"message": ...}`; the server answers
//! `{"reply": ...}` on success or `{"error": ...}` with a failure status.
//! The body is decoded before the status is looked at, so a failure status
//! with a non-JSON body surfaces as a parse error.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::config::ResolvedConfig;
use crate::endpoint::types::{ChatRequest, ChatResponse, HealthResponse};
use crate::endpoint::{ChatEndpoint, EndpointError};

pub const DEFAULT_CHAT_PATH: &str = "/api/chat";
pub const DEFAULT_HEALTH_PATH: &str = "/health";

/// Joins a base URL and a route without doubling or dropping the slash.
fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

pub struct HttpEndpoint {
    chat_url: String,
    health_url: String,
    client: reqwest::Client,
}

impl HttpEndpoint {
    /// Builds an endpoint rooted at `base_url` using the default routes.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EndpointError> {
        Self::with_paths(base_url, DEFAULT_CHAT_PATH, DEFAULT_HEALTH_PATH, timeout)
    }

    pub fn with_paths(
        base_url: &str,
        chat_path: &str,
        health_path: &str,
        timeout: Duration,
    ) -> Result<Self, EndpointError> {
        reqwest::Url::parse(base_url)
            .map_err(|e| EndpointError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EndpointError::Config(e.to_string()))?;

        Ok(Self {
            chat_url: join_url(base_url, chat_path),
            health_url: join_url(base_url, health_path),
            client,
        })
    }

    pub fn from_config(config: &ResolvedConfig) -> Result<Self, EndpointError> {
        Self::with_paths(
            &config.base_url,
            &config.chat_path,
            &config.health_path,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

#[async_trait]
impl ChatEndpoint for HttpEndpoint {
    fn name(&self) -> &str {
        &self.chat_url
    }

    async fn send(&self, message: &str) -> Result<String, EndpointError> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        info!("POST {} (message_len={})", self.chat_url, message.len());

        let response = self
            .client
            .post(&self.chat_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| EndpointError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Chat response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| EndpointError::Network(e.to_string()))?;

        let data: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Unparsable chat response (HTTP {}): {}", status.as_u16(), e);
            EndpointError::Parse(e.to_string())
        })?;

        if !status.is_success() {
            warn!(
                "Chat endpoint error: {} - {:?}",
                status.as_u16(),
                data.error
            );
            return Err(EndpointError::Api {
                status: status.as_u16(),
                message: data.error,
            });
        }

        let reply = data.reply.unwrap_or_default();
        info!("Chat reply received ({} bytes)", reply.len());
        Ok(reply)
    }

    async fn health(&self) -> Result<(), EndpointError> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(|e| EndpointError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EndpointError::Api {
                status: status.as_u16(),
                message: None,
            });
        }

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| EndpointError::Parse(e.to_string()))?;

        if health.status != "ok" {
            return Err(EndpointError::Parse(format!(
                "unexpected health status '{}'",
                health.status
            )));
        }
        debug!("Health check passed: {}", self.health_url);
        Ok(())
    }
}
