use std::time::SystemTime;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_credential_types::provider::ProvideCredentials;
use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningSettings, sign};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use http::Request;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use tracing::{debug, trace};

/// Computes the authentication headers for a request.
///
/// `body` is passed separately from `request` and must be the exact bytes
/// that end up on the wire.
#[async_trait]
pub trait SignRequest: Send + Sync {
    async fn sign(
        &self,
        request: &Request<Vec<u8>>,
        body: &[u8],
        service: &str,
        region: &str,
        time: SystemTime,
    ) -> Result<Vec<(String, String)>>;
}

/// SigV4 signer backed by `aws-sigv4`.
///
/// Credentials come from any [`ProvideCredentials`]; a plain
/// `aws_credential_types::Credentials` works for static keys.
#[derive(Debug)]
pub struct SigV4Signer<P> {
    credentials_provider: P,
}

impl<P: ProvideCredentials> SigV4Signer<P> {
    pub fn new(credentials_provider: P) -> Self {
        Self {
            credentials_provider,
        }
    }
}

#[async_trait]
impl<P: ProvideCredentials> SignRequest for SigV4Signer<P> {
    async fn sign(
        &self,
        request: &Request<Vec<u8>>,
        body: &[u8],
        service: &str,
        region: &str,
        time: SystemTime,
    ) -> Result<Vec<(String, String)>> {
        let credentials = self
            .credentials_provider
            .provide_credentials()
            .await
            .context("Failed to resolve AWS credentials")?;
        debug!(
            "Resolved credentials for access key {}",
            credentials.access_key_id()
        );
        let identity: Identity = credentials.into();

        let headers = request
            .headers()
            .iter()
            .map(|(name, value)| -> Result<(&str, &str)> {
                Ok((name.as_str(), value.to_str()?))
            })
            .collect::<Result<Vec<_>>>()?;

        let signable_request = SignableRequest::new(
            request.method().as_str(),
            request.uri().to_string(),
            headers.into_iter(),
            SignableBody::Bytes(body),
        )?;

        let signing_params = v4::SigningParams::builder()
            .identity(&identity)
            .region(region)
            .name(service)
            .time(time)
            .settings(SigningSettings::default())
            .build()?
            .into();

        let (signing_instructions, _signature) =
            sign(signable_request, &signing_params)?.into_parts();

        let signed_headers: Vec<(String, String)> = signing_instructions
            .headers()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        trace!("Signed {} bytes for {}/{}", body.len(), service, region);

        Ok(signed_headers)
    }
}

/// Writes signed headers onto the request, replacing any existing value.
pub fn apply_signature(
    request: &mut Request<Vec<u8>>,
    headers: Vec<(String, String)>,
) -> Result<()> {
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let mut value = HeaderValue::from_str(&value)?;
        if name == AUTHORIZATION {
            value.set_sensitive(true);
        }
        request.headers_mut().insert(name, value);
    }

    Ok(())
}
