//! Wire types for the `/api/chat` and `/health` routes.

use serde::{Deserialize, Serialize};

/// Request body for the chat route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body for the chat route. Success carries `reply`, failure carries `error`;
/// both are optional on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response body for the health route.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}
