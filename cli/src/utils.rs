use response::InvokeModelResponse;
use tracing::{info, warn};

pub fn usage_callback(response: &InvokeModelResponse) {
    if !response.is_ok() {
        warn!("Bedrock returned status {}", response.status);
        return;
    }
    if let Some(msg) = usage_summary(response) {
        info!("{}", msg);
    }
}

fn usage_summary(response: &InvokeModelResponse) -> Option<String> {
    let message = response.message()?;

    let usage = message.usage;
    let mut msg = format!(
        "Usage: input_tokens: {}, output_tokens: {}",
        usage.input_tokens, usage.output_tokens
    );
    if let Some(t) = usage.cache_read_input_tokens {
        msg.push_str(&format!(", cache_read_input_tokens: {}", t));
    }
    if let Some(t) = usage.cache_creation_input_tokens {
        msg.push_str(&format!(", cache_creation_input_tokens: {}", t));
    }
    if let Some(reason) = message.stop_reason {
        msg.push_str(&format!(", stop_reason: {}", reason));
    }
    if let Some(model) = message.model {
        msg.push_str(&format!(", model: {}", model));
    }
    if let Some(id) = message.id {
        msg.push_str(&format!(", id: {}", id));
    }
    Some(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_summary_names_model_and_id() {
        let body = r#"{
            "id": "msg_bdrk_01",
            "model": "claude-3-haiku-20240307",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5, "cache_read_input_tokens": 2}
        }"#;

        let summary = usage_summary(&InvokeModelResponse::new(200, body)).unwrap();
        assert_eq!(
            summary,
            "Usage: input_tokens: 10, output_tokens: 5, cache_read_input_tokens: 2, \
             stop_reason: end_turn, model: claude-3-haiku-20240307, id: msg_bdrk_01"
        );
    }

    #[test]
    fn usage_summary_skips_other_bodies() {
        assert!(usage_summary(&InvokeModelResponse::new(200, r#"{"ok":true}"#)).is_none());
        assert!(usage_summary(&InvokeModelResponse::new(403, "Forbidden")).is_none());
    }
}
