use serde::{Deserialize, Serialize};

pub mod content;
pub mod message;

pub use content::*;
pub use message::*;

/// Version tag Bedrock expects in every Anthropic `InvokeModel` body.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

#[derive(Debug, Deserialize, Serialize)]
pub struct InvokeModelRequest {
    pub anthropic_version: String,
    pub max_tokens: i32,
    pub messages: Vec<Message>,
}

impl InvokeModelRequest {
    /// A single-turn request carrying one user text block.
    pub fn user_text(text: &str, max_tokens: i32) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            max_tokens,
            messages: vec![Message::user(text)],
        }
    }
}
