// src/services/provider.rs
//! Client for an OpenAI compatible `/chat/completions` endpoint.

use std::error::Error as StdError;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ProviderConfig;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Provider { status: StatusCode, message: String },

    #[error("malformed provider response: {0}")]
    Decode(String),

    #[error("provider returned no completion text")]
    EmptyReply,
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest hides the interesting part (timeout, refused, dns) in the source chain.
        let mut text = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        RelayError::Transport(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone, Debug)]
pub struct ProviderClient {
    http: Client,
    config: ProviderConfig,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Result<Self, RelayError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Sends one completion request and returns the first choice's text, trimmed.
    pub async fn complete(&self, turns: &[ChatTurn]) -> Result<String, RelayError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = CompletionRequest {
            model: &self.config.model,
            messages: turns,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let res = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            return Err(RelayError::Provider {
                status,
                message: provider_message(status, &text),
            });
        }

        let parsed: CompletionResponse =
            serde_json::from_str(&text).map_err(|e| RelayError::Decode(e.to_string()))?;

        let reply = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if reply.is_empty() {
            return Err(RelayError::EmptyReply);
        }
        Ok(reply)
    }
}

fn provider_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let body = body.trim();
    if body.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {body}")
    }
}
