use anyhow::Result;
use http::header::CONTENT_TYPE;
use http::{Method, Request};
use tracing::debug;

use crate::{INVOKE_MODEL_TARGET, invoke_model_url};

pub const X_AMZ_TARGET: &str = "x-amz-target";

/// Builds the unsigned `InvokeModel` POST carrying `body` as-is.
pub fn build_invoke_model_request(
    region: &str,
    model_id: &str,
    body: Vec<u8>,
) -> Result<Request<Vec<u8>>> {
    let url = invoke_model_url(region, model_id);
    debug!("Building InvokeModel request: POST {}", url);

    let request = Request::builder()
        .method(Method::POST)
        .uri(url)
        .header(CONTENT_TYPE, "application/json")
        .header(X_AMZ_TARGET, INVOKE_MODEL_TARGET)
        .body(body)?;

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_invoke_model_request() {
        let body = br#"{"max_tokens":1}"#.to_vec();
        let request =
            build_invoke_model_request("ap-northeast-1", "anthropic.claude-v2", body.clone())
                .unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.uri().to_string(),
            "https://bedrock-runtime.ap-northeast-1.amazonaws.com/model/anthropic.claude-v2/invoke"
        );
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(
            request.headers()[X_AMZ_TARGET],
            "BedrockRuntime.InvokeModel"
        );
        assert_eq!(request.headers().len(), 2);
        assert_eq!(request.body(), &body);
    }

    #[test]
    fn test_model_id_with_version_suffix() {
        let request = build_invoke_model_request(
            "ap-northeast-1",
            "anthropic.claude-3-5-sonnet-20240620-v1:0",
            Vec::new(),
        )
        .unwrap();

        assert_eq!(
            request.uri().path(),
            "/model/anthropic.claude-3-5-sonnet-20240620-v1:0/invoke"
        );
    }

    #[test]
    fn test_model_id_that_breaks_the_url() {
        let result = build_invoke_model_request("ap-northeast-1", "bad model\nid", Vec::new());
        assert!(result.is_err());
    }
}
