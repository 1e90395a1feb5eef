// src/state.rs
use std::sync::Arc;

use crate::{
    config::ProviderConfig,
    services::{
        persona::UNCLE_SYSTEM_PROMPT,
        provider::{ProviderClient, RelayError},
    },
};

pub type SharedState = Arc<AppState>;

/// Read-only for the life of the process; handlers never mutate it.
pub struct AppState {
    pub persona: &'static str,
    pub provider: ProviderClient,
}

impl AppState {
    pub fn new(provider: ProviderConfig) -> Result<Self, RelayError> {
        Ok(Self {
            persona: UNCLE_SYSTEM_PROMPT,
            provider: ProviderClient::new(provider)?,
        })
    }
}
