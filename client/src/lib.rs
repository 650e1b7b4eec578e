//! # Transport
//!
//! Sends an already signed `http::Request` and hands back the status and the
//! complete body. [`HttpTransport`] does this over `reqwest`; tests substitute
//! their own [`Transport`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use http::Request;
use reqwest::Client;
use response::InvokeModelResponse;
use tracing::{debug, trace};

#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and reads the response body to the end.
    async fn send(&self, request: Request<Vec<u8>>) -> Result<InvokeModelResponse>;
}

/// `reqwest` transport with the client's default timeouts and TLS.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request<Vec<u8>>) -> Result<InvokeModelResponse> {
        let request =
            reqwest::Request::try_from(request).context("Failed to convert request")?;
        debug!("Sending {} {}", request.method(), request.url());

        let response = self
            .client
            .execute(request)
            .await
            .context("Failed to send request")?;
        let status = response.status().as_u16();
        trace!("Received response headers: {:?}", response.headers());

        let body = response
            .bytes()
            .await
            .context("Failed to read response")?;
        debug!("Received status {} with {} bytes", status, body.len());

        Ok(InvokeModelResponse::new(status, body.to_vec()))
    }
}
