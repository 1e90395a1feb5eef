// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{message::ErrorResponse, services::provider::RelayError};

/// Startup failures. The process does not bind when any of these occur.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingCredential(&'static str),

    #[error("invalid HOST: {0}")]
    InvalidHost(String),

    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid PROVIDER_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),

    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

/// Errors surfaced at the request boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{detail}")]
    Validation { status: StatusCode, detail: String },

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { status, .. } => *status,
            AppError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}
