pub mod request;
pub mod signer;

pub use request::*;
pub use signer::*;

/// Region every request is sent to.
pub const REGION: &str = "ap-northeast-1";

/// SigV4 signing name of the Bedrock runtime.
pub const SERVICE_NAME: &str = "bedrock";

pub const INVOKE_MODEL_TARGET: &str = "BedrockRuntime.InvokeModel";

pub fn endpoint(region: &str) -> String {
    format!("https://bedrock-runtime.{region}.amazonaws.com")
}

pub fn invoke_model_path(model_id: &str) -> String {
    format!("/model/{model_id}/invoke")
}

pub fn invoke_model_url(region: &str, model_id: &str) -> String {
    endpoint(region) + &invoke_model_path(model_id)
}
