//! HTTP client for the Pindrop API.
//!
//! All remote calls are single-shot: no automatic retries anywhere. The
//! signing endpoint in particular is never blind-retried because the request
//! carries a client-side timestamp.

use std::time::Duration;

use tracing::{debug, instrument};

use pindrop_core::config::ApiConfig;
use pindrop_core::error::{PindropError, Result};
use pindrop_core::traits::TokenProvider;
use pindrop_core::types::{GatewayListResponse, SignedLinkRequest, SignedLinkResponse};

/// Bearer-authenticated client for the Pindrop API.
pub struct ApiClient<P: TokenProvider> {
    config: ApiConfig,
    tokens: P,
    http: reqwest::Client,
}

impl<P: TokenProvider> ApiClient<P> {
    /// Creates a client from the given config and token provider.
    pub fn new(config: ApiConfig, tokens: P) -> Self {
        let http = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            tokens,
            http,
        }
    }

    /// Returns the config this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn bearer(&self) -> Result<String> {
        Ok(format!("Bearer {}", self.tokens.token()?))
    }

    /// Checks that the stored credential is accepted by the API.
    ///
    /// Short-lived liveness call, bounded by the configured auth timeout.
    /// Any non-200 status is an authentication failure.
    #[instrument(skip(self))]
    pub async fn test_authentication(&self) -> Result<()> {
        let url = self.config.endpoint("data/testAuthentication");

        let response = self
            .http
            .get(&url)
            .header("Authorization", self.bearer()?)
            .timeout(Duration::from_secs(self.config.auth_timeout_seconds))
            .send()
            .await
            .map_err(|e| PindropError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(PindropError::AuthFailed { status });
        }

        debug!("Credential accepted");
        Ok(())
    }

    /// Lists the gateway domains available on the account.
    ///
    /// Each listed sub-domain is suffixed with the configured
    /// second-level domain to form the final host.
    #[instrument(skip(self))]
    pub async fn list_gateways(&self) -> Result<Vec<String>> {
        let url = self.config.endpoint("v3/ipfs/gateways");

        let response = self
            .http
            .get(&url)
            .header("Authorization", self.bearer()?)
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|e| PindropError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(PindropError::RemoteList { status });
        }

        let listing: GatewayListResponse = response
            .json()
            .await
            .map_err(|e| PindropError::Http(e.to_string()))?;

        let domains: Vec<String> = listing
            .data
            .rows
            .into_iter()
            .map(|row| format!("{}{}", row.domain, self.config.gateway_suffix))
            .collect();

        debug!(count = domains.len(), "Listed gateways");
        Ok(domains)
    }

    /// Sends a signing request and returns the raw signed URL string.
    ///
    /// The returned value is exactly what the transport delivered; callers
    /// normalize it (see [`crate::normalize_signed_url`]).
    #[instrument(skip(self, request))]
    pub async fn sign_download_link(&self, request: &SignedLinkRequest) -> Result<String> {
        let url = self.config.endpoint("v3/files/private/download_link");

        let response = self
            .http
            .post(&url)
            .header("Authorization", self.bearer()?)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| PindropError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(PindropError::RemoteSigning { status });
        }

        let signed: SignedLinkResponse = response
            .json()
            .await
            .map_err(|e| PindropError::Http(e.to_string()))?;

        debug!(target = %request.url, "Signed link issued");
        Ok(signed.data)
    }
}
