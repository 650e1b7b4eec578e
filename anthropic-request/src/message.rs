use serde::{Deserialize, Serialize};

use crate::content::ContentBlock;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "role")]
pub enum Message {
    #[serde(rename = "assistant")]
    Assistant { content: Vec<ContentBlock> },
    #[serde(rename = "user")]
    User { content: Vec<ContentBlock> },
}

impl Message {
    pub fn user(text: &str) -> Self {
        Message::User {
            content: vec![ContentBlock::text(text)],
        }
    }
}
