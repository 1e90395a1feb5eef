pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;

use crate::{config::Config, state::AppState};

/// Full application: routes, shared state and CORS.
pub fn app(config: &Config) -> Result<Router, services::provider::RelayError> {
    let state = std::sync::Arc::new(AppState::new(config.provider.clone())?);
    Ok(routes::create_router()
        .with_state(state)
        .layer(routes::cors_layer(config.cors_origins.clone())))
}
