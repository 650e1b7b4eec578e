use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: &str) -> Self {
        ContentBlock::Text {
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_block_is_tagged_by_type() {
        let json = serde_json::to_value(ContentBlock::text("Hello")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "text", "text": "Hello"}));
    }

    #[test]
    fn test_unknown_block_type_is_rejected() {
        let json = r#"{"type": "image", "source": {}}"#;
        assert!(serde_json::from_str::<ContentBlock>(json).is_err());
    }
}
