//! Network mode resolution.
//!
//! Every command that accepts a `--network` flag resolves it through this
//! one type so the fallback chain is applied identically everywhere, never
//! reimplemented per command.

use tracing::debug;

use pindrop_core::error::Result;
use pindrop_core::types::NetworkMode;
use pindrop_store::SettingsStore;

/// Resolves the effective network for an operation.
///
/// Priority order: explicit per-call override, persisted default-network
/// setting, hard-coded fallback of public.
#[derive(Clone, Debug)]
pub struct NetworkResolver {
    default_network: Option<NetworkMode>,
}

impl NetworkResolver {
    /// Creates a resolver with the persisted default threaded in.
    pub fn new(default_network: Option<NetworkMode>) -> Self {
        Self { default_network }
    }

    /// Creates a resolver from the persisted settings store.
    pub fn from_settings(settings: &SettingsStore) -> Result<Self> {
        Ok(Self::new(settings.default_network()?))
    }

    /// Resolves an explicit override string to a network mode.
    ///
    /// A non-empty override must be exactly `public` or `private`
    /// (case-sensitive); anything else fails with
    /// [`pindrop_core::PindropError::InvalidNetwork`]. Empty means "use the
    /// configured default", which itself falls back to public.
    pub fn resolve(&self, explicit: &str) -> Result<NetworkMode> {
        if explicit.is_empty() {
            let mode = self.default_network.unwrap_or(NetworkMode::Public);
            debug!(%mode, "Resolved network from default");
            return Ok(mode);
        }
        let mode = NetworkMode::parse(explicit)?;
        debug!(%mode, "Resolved network from explicit override");
        Ok(mode)
    }
}
