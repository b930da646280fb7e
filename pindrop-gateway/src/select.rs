//! Gateway selection and configuration flow.

use dialoguer::Select;
use tracing::{info, instrument};

use pindrop_core::error::{PindropError, Result};
use pindrop_core::traits::TokenProvider;
use pindrop_store::GatewayStore;

use crate::api::ApiClient;

/// Picks a gateway from the listed candidates.
///
/// With `use_default` the first candidate is chosen deterministically
/// ([`PindropError::NoCandidates`] on an empty list). Otherwise an
/// interactive chooser runs; cancelling it (Esc/q) yields `Ok(None)`,
/// a deliberate no-op rather than an error.
pub fn choose_gateway(candidates: &[String], use_default: bool) -> Result<Option<String>> {
    let first = candidates.first().ok_or(PindropError::NoCandidates)?;

    if use_default {
        return Ok(Some(first.clone()));
    }

    let selection = Select::new()
        .with_prompt("Select a gateway")
        .items(candidates)
        .default(0)
        .interact_opt()
        .map_err(|e| PindropError::Prompt(e.to_string()))?;

    Ok(selection.map(|i| candidates[i].clone()))
}

/// Configures the gateway domain used by all subsequent commands.
///
/// An explicit `domain` is persisted as-is, no remote call. Without one the
/// account's gateways are fetched and one is chosen (first candidate when
/// `use_default`, interactively otherwise). The domain file is written only
/// after a fully successful selection; a cancelled prompt leaves it
/// untouched and returns `Ok(None)`.
#[instrument(skip(api, store))]
pub async fn configure_gateway<P: TokenProvider>(
    api: &ApiClient<P>,
    store: &GatewayStore,
    domain: Option<String>,
    use_default: bool,
) -> Result<Option<String>> {
    if let Some(domain) = domain {
        store.set(&domain)?;
        info!(%domain, "Gateway saved");
        return Ok(Some(domain));
    }

    let candidates = api.list_gateways().await?;
    match choose_gateway(&candidates, use_default)? {
        Some(domain) => {
            store.set(&domain)?;
            info!(%domain, "Gateway saved");
            Ok(Some(domain))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pindrop_core::config::ApiConfig;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn candidates(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_choice_is_first_candidate() {
        let picked = choose_gateway(&candidates(&["a", "b", "c"]), true).unwrap();
        assert_eq!(picked, Some("a".to_string()));
    }

    #[test]
    fn test_empty_candidates_fail() {
        let err = choose_gateway(&[], true).unwrap_err();
        assert!(matches!(err, PindropError::NoCandidates));
    }

    #[tokio::test]
    async fn test_explicit_domain_skips_remote_listing() {
        let server = MockServer::start().await;
        let dir = tempdir().unwrap();
        let store = GatewayStore::new(dir.path());
        let api = ApiClient::new(ApiConfig::new(server.uri()), "jwt-test".to_string());

        let saved = configure_gateway(&api, &store, Some("my.example.net".into()), false)
            .await
            .unwrap();

        assert_eq!(saved, Some("my.example.net".to_string()));
        assert_eq!(store.get().unwrap(), "my.example.net");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_default_selection_from_remote_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/ipfs/gateways"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data":{"rows":[{"domain":"quiet-fog-123"},{"domain":"late-sun-456"}]}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let store = GatewayStore::new(dir.path());
        let api = ApiClient::new(ApiConfig::new(server.uri()), "jwt-test".to_string());

        let saved = configure_gateway(&api, &store, None, true).await.unwrap();
        assert_eq!(saved, Some("quiet-fog-123.pindrop.cloud".to_string()));
        assert_eq!(store.get().unwrap(), "quiet-fog-123.pindrop.cloud");
    }

    #[tokio::test]
    async fn test_zero_remote_gateways_leave_store_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/ipfs/gateways"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"data":{"rows":[]}}"#),
            )
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let store = GatewayStore::new(dir.path());
        let api = ApiClient::new(ApiConfig::new(server.uri()), "jwt-test".to_string());

        let err = configure_gateway(&api, &store, None, true).await.unwrap_err();
        assert!(matches!(err, PindropError::NoCandidates));
        assert!(matches!(store.get(), Err(PindropError::NotConfigured)));
    }
}
