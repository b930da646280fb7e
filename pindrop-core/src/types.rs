//! Domain types for gateway access resolution and signed-link issuance.
//!
//! The wire payloads here match the Pindrop API exactly; `SignedLinkRequest`
//! is the body POSTed to the signing endpoint and `SignedLinkResponse` is its
//! 200 reply.

use serde::{Deserialize, Serialize};

use crate::error::{PindropError, Result};

/// Which network a CID lives on.
///
/// Public content is fetchable directly via the gateway's `/ipfs/` path;
/// private content requires a signed, time-bounded link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    /// Directly fetchable via the CID path.
    Public,
    /// Requires a signed, time-bounded access link.
    Private,
}

impl NetworkMode {
    /// Parses the wire form, accepting exactly `"public"` or `"private"`.
    ///
    /// Case-sensitive: any other value is an [`PindropError::InvalidNetwork`],
    /// never silently coerced.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "public" => Ok(NetworkMode::Public),
            "private" => Ok(NetworkMode::Private),
            other => Err(PindropError::InvalidNetwork(other.to_string())),
        }
    }

    /// Returns the lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkMode::Public => "public",
            NetworkMode::Private => "private",
        }
    }
}

impl std::fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload POSTed to the signing endpoint.
///
/// The timestamp is captured client-side at build time. A request is never
/// retried with a stale timestamp; callers build a fresh one per attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedLinkRequest {
    /// Target URL the signature will authorize (`https://<domain>/files/<cid>`)
    pub url: String,
    /// Requested lifetime in seconds
    pub expires: i64,
    /// Issuance timestamp, seconds since epoch (client clock, not server)
    pub date: i64,
    /// HTTP method the signature authorizes; fixed at GET for this flow
    pub method: String,
}

impl SignedLinkRequest {
    /// Builds a GET signing request for `url` valid for `expires` seconds,
    /// stamped with the current client time.
    pub fn get(url: impl Into<String>, expires: i64) -> Self {
        Self {
            url: url.into(),
            expires,
            date: chrono::Utc::now().timestamp(),
            method: "GET".to_string(),
        }
    }
}

/// 200 reply from the signing endpoint.
///
/// `data` holds the signed URL as the transport delivered it, possibly still
/// quoted and with `&`-escaped ampersands. Consumed once, never cached:
/// the URL embeds its own expiry.
#[derive(Clone, Debug, Deserialize)]
pub struct SignedLinkResponse {
    /// The raw signed URL string
    pub data: String,
}

/// The externally visible result of access-link resolution.
///
/// Callers get a ready-to-use URL either way; no intermediate state leaks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessLinkOutcome {
    /// Direct gateway URL for public content; no signing was performed.
    Direct(String),
    /// Signed, time-bounded URL for private content.
    Signed(String),
}

impl AccessLinkOutcome {
    /// Returns the resolved URL regardless of variant.
    pub fn url(&self) -> &str {
        match self {
            AccessLinkOutcome::Direct(url) | AccessLinkOutcome::Signed(url) => url,
        }
    }
}

impl std::fmt::Display for AccessLinkOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.url())
    }
}

/// One row of the gateway listing endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct GatewayRow {
    /// Gateway sub-domain, without the second-level-domain suffix
    pub domain: String,
}

/// Paginated row-set wrapper of the gateway listing endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct GatewayRows {
    /// The listed gateways
    pub rows: Vec<GatewayRow>,
}

/// Reply from `GET /v3/ipfs/gateways`.
#[derive(Clone, Debug, Deserialize)]
pub struct GatewayListResponse {
    /// Row-set payload
    pub data: GatewayRows,
}
