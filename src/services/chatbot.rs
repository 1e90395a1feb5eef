// src/services/chatbot.rs
use tracing::{error, info};

use super::provider::{ChatTurn, ProviderClient, RelayError};

/// System persona first, then the caller's message untouched.
pub fn build_turns(persona: &str, user_msg: &str) -> Vec<ChatTurn> {
    vec![ChatTurn::system(persona), ChatTurn::user(user_msg)]
}

pub async fn generate_reply(
    provider: &ProviderClient,
    persona: &str,
    user_msg: &str,
) -> Result<String, RelayError> {
    info!("Received message: {}", user_msg);

    let turns = build_turns(persona, user_msg);
    match provider.complete(&turns).await {
        Ok(reply) => {
            info!("Generated response: {}", reply);
            Ok(reply)
        }
        Err(e) => {
            error!(error = %e, "Error processing request");
            Err(e)
        }
    }
}
