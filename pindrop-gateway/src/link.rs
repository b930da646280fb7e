//! Access-link issuance.
//!
//! Public CIDs become a direct gateway URL with no network call; private
//! CIDs go through the signing endpoint and come back as a time-bounded
//! signed URL. A fresh request (with a fresh timestamp) is built per call;
//! signed URLs are never cached since they embed their own expiry.

use tracing::{debug, instrument};

use pindrop_core::error::{PindropError, Result};
use pindrop_core::traits::TokenProvider;
use pindrop_core::types::{AccessLinkOutcome, NetworkMode, SignedLinkRequest};
use pindrop_store::GatewayStore;

use crate::api::ApiClient;

/// Undoes the transport's escaping of a signed URL.
///
/// Contract: undo exactly one layer of JSON-style ampersand escaping
/// (the literal six-character sequence `\u0026` becomes `&`) and strip
/// exactly one layer of surrounding quote characters. Never loops.
pub fn normalize_signed_url(raw: &str) -> String {
    let unescaped = raw.replace("\\u0026", "&");
    let mut stripped = unescaped.as_str();
    stripped = stripped.strip_prefix('"').unwrap_or(stripped);
    stripped = stripped.strip_suffix('"').unwrap_or(stripped);
    stripped.to_string()
}

/// Issues access links for CIDs.
pub struct AccessLinkIssuer<P: TokenProvider> {
    api: ApiClient<P>,
    gateways: GatewayStore,
}

impl<P: TokenProvider> AccessLinkIssuer<P> {
    /// Creates an issuer over the given API client and gateway store.
    pub fn new(api: ApiClient<P>, gateways: GatewayStore) -> Self {
        Self { api, gateways }
    }

    /// Resolves a ready-to-use URL for `cid` on the given network.
    ///
    /// Public: pure string composition against the configured gateway
    /// domain; no signing, no network call. Private: validates the lifetime
    /// before any I/O, builds a timestamped [`SignedLinkRequest`] for
    /// `https://<domain>/files/<cid>`, sends it once, and normalizes the
    /// returned URL. A malformed CID is passed through as an opaque path
    /// segment; any remote rejection surfaces as
    /// [`PindropError::RemoteSigning`].
    #[instrument(skip(self))]
    pub async fn issue(
        &self,
        cid: &str,
        expires: i64,
        mode: NetworkMode,
    ) -> Result<AccessLinkOutcome> {
        match mode {
            NetworkMode::Public => {
                let domain = self.gateways.get()?;
                let url = format!("https://{domain}/ipfs/{cid}");
                debug!(%url, "Composed direct gateway URL");
                Ok(AccessLinkOutcome::Direct(url))
            }
            NetworkMode::Private => {
                if expires <= 0 {
                    return Err(PindropError::InvalidLifetime(expires));
                }

                let domain = self.gateways.get()?;
                let target = format!("https://{domain}/files/{cid}");
                let request = SignedLinkRequest::get(target, expires);

                let raw = self.api.sign_download_link(&request).await?;
                let url = normalize_signed_url(&raw);
                debug!(expires, "Issued signed access link");
                Ok(AccessLinkOutcome::Signed(url))
            }
        }
    }
}
