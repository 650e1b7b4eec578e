use std::io::{self, Write};
use std::time::SystemTime;

use anthropic_request::InvokeModelRequest;
use anyhow::{Context, Result};
use bedrock::{
    REGION, SERVICE_NAME, SigV4Signer, SignRequest, apply_signature, build_invoke_model_request,
};
use client::Transport;
use response::InvokeModelResponse;
use tracing::{debug, error, info};

pub mod config;
pub mod utils;

use utils::usage_callback;

pub const PROMPT: &str = "Hello, Claude";
pub const MAX_TOKENS: i32 = 1000;

/// Runs the whole program. Failures are printed to `out` and swallowed, so
/// the process exits normally either way.
pub async fn execute(config_path: &str, transport: &impl Transport, out: &mut impl Write) {
    if let Err(err) = run(config_path, transport, &mut *out).await {
        error!("{:#}", err);
        if let Err(write_err) = writeln!(out, "{err:#}") {
            error!("Failed to write error: {}", write_err);
        }
    }
}

/// Loads the config at `config_path` and invokes the model with the static
/// credentials it holds. No request is built if loading fails.
pub async fn run(
    config_path: &str,
    transport: &impl Transport,
    out: &mut impl Write,
) -> Result<()> {
    let conf = config::load_conf(config_path).context("Failed to load AWS credentials")?;
    debug!("Using {:?}", conf);

    let signer = SigV4Signer::new(conf.credentials());
    invoke(&conf.model_id, &signer, transport, SystemTime::now(), out).await
}

/// Builds, signs and sends the fixed prompt to `model_id`, then prints the
/// response.
pub async fn invoke(
    model_id: &str,
    signer: &impl SignRequest,
    transport: &impl Transport,
    time: SystemTime,
    out: &mut impl Write,
) -> Result<()> {
    let payload = InvokeModelRequest::user_text(PROMPT, MAX_TOKENS);
    let body = serde_json::to_vec(&payload).context("Failed to convert payload to JSON")?;
    debug!("Payload is {} bytes", body.len());

    let mut request =
        build_invoke_model_request(REGION, model_id, body).context("Failed to build request")?;

    let signed_headers = signer
        .sign(&request, request.body(), SERVICE_NAME, REGION, time)
        .await
        .context("Failed to sign request")?;
    apply_signature(&mut request, signed_headers).context("Failed to sign request")?;

    info!("Invoking model {} in {}", model_id, REGION);
    let response = transport.send(request).await?;
    usage_callback(&response);

    write_response(&response, out).context("Failed to write response")
}

/// A 200 prints the body alone; anything else prints `error: <status>` first.
pub fn write_response(response: &InvokeModelResponse, out: &mut impl Write) -> io::Result<()> {
    if !response.is_ok() {
        writeln!(out, "error: {}", response.status)?;
    }
    out.write_all(&response.body)?;
    writeln!(out)
}
