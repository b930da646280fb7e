//! Authorization flow.
//!
//! Saves the bearer token, verifies it against the API, then runs the
//! gateway selection flow so a fresh install ends up fully configured.

use dialoguer::Password;
use tracing::{info, instrument};

use pindrop_core::config::ApiConfig;
use pindrop_core::error::{PindropError, Result};
use pindrop_store::{GatewayStore, TokenStore};

use crate::api::ApiClient;
use crate::select::configure_gateway;

/// Authorizes the CLI with a bearer token.
///
/// Prompts for the token when none is supplied; an empty token is rejected.
/// The token file is overwritten wholesale, then checked against the
/// credential endpoint (3 s timeout), and finally the gateway selection
/// flow runs. Returns the configured gateway domain, or `None` when the
/// user cancelled the selection.
#[instrument(skip_all)]
pub async fn authorize(
    config: &ApiConfig,
    tokens: &TokenStore,
    gateways: &GatewayStore,
    token: Option<String>,
    use_default: bool,
) -> Result<Option<String>> {
    let token = match token {
        Some(token) => token,
        None => Password::new()
            .with_prompt("Enter your Pindrop token")
            .interact()
            .map_err(|e| PindropError::Prompt(e.to_string()))?,
    };

    if token.is_empty() {
        return Err(PindropError::EmptyToken);
    }

    tokens.set(&token)?;

    let api = ApiClient::new(config.clone(), tokens.clone());
    api.test_authentication().await?;
    info!("Authentication successful");

    configure_gateway(&api, gateways, None, use_default).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pindrop_core::traits::TokenProvider;
    use tempfile::tempdir;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_empty_token_rejected_before_write() {
        let server = MockServer::start().await;
        let dir = tempdir().unwrap();
        let tokens = TokenStore::new(dir.path());
        let gateways = GatewayStore::new(dir.path());

        let err = authorize(
            &ApiConfig::new(server.uri()),
            &tokens,
            &gateways,
            Some(String::new()),
            true,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, PindropError::EmptyToken));
        assert!(matches!(tokens.token(), Err(PindropError::TokenNotFound)));
    }

    #[tokio::test]
    async fn test_full_flow_saves_token_and_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/testAuthentication"))
            .and(header("Authorization", "Bearer jwt-fresh"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v3/ipfs/gateways"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data":{"rows":[{"domain":"quiet-fog-123"}]}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let tokens = TokenStore::new(dir.path());
        let gateways = GatewayStore::new(dir.path());

        let saved = authorize(
            &ApiConfig::new(server.uri()),
            &tokens,
            &gateways,
            Some("jwt-fresh".into()),
            true,
        )
        .await
        .unwrap();

        assert_eq!(saved, Some("quiet-fog-123.pindrop.cloud".to_string()));
        assert_eq!(tokens.token().unwrap(), "jwt-fresh");
        assert_eq!(gateways.get().unwrap(), "quiet-fog-123.pindrop.cloud");
    }

    #[tokio::test]
    async fn test_rejected_credential_stops_before_gateway_selection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/testAuthentication"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v3/ipfs/gateways"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let tokens = TokenStore::new(dir.path());
        let gateways = GatewayStore::new(dir.path());

        let err = authorize(
            &ApiConfig::new(server.uri()),
            &tokens,
            &gateways,
            Some("jwt-bad".into()),
            true,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, PindropError::AuthFailed { status: 401 }));
        assert!(matches!(gateways.get(), Err(PindropError::NotConfigured)));
    }
}
