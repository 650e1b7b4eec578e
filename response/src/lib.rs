use serde::Deserialize;

/// Status and raw body of an `InvokeModel` call. The body is kept byte for
/// byte as received.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeModelResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl InvokeModelResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Parses the body as an Anthropic messages response. `None` for error
    /// statuses and for bodies of any other shape.
    pub fn message(&self) -> Option<MessagesResponse> {
        if !self.is_ok() {
            return None;
        }
        serde_json::from_slice(&self.body).ok()
    }
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    pub stop_reason: Option<String>,
    pub usage: Usage,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Usage {
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub cache_creation_input_tokens: Option<i32>,
    pub cache_read_input_tokens: Option<i32>,
}
