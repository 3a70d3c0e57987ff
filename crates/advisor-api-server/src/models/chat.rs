use serde::{Deserialize, Serialize};

use crate::services::conversation::ChatTurn;

/// Externally supplied user identifier. Opaque, no validation.
pub type UserId = String;

// ===== REQUEST MODELS =====

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: UserId,
    pub messages: Vec<ChatTurn>,
}

#[derive(Debug, Deserialize)]
pub struct ClearRequest {
    pub user_id: UserId,
}

// ===== RESPONSE MODELS =====

/// Chat responses are always HTTP 200; failures carry an `error` key the
/// frontend checks for instead of an error status code.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { reply: String },
    Error { error: String },
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}
