// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Body of every error the relay produces itself.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
