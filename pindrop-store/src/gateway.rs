//! Persisted gateway domain.

use std::path::{Path, PathBuf};

use tracing::instrument;

use pindrop_core::error::{PindropError, Result};

use crate::value_file::{home_dir, read_value, write_value};

/// File name under the home directory holding the gateway domain.
const GATEWAY_FILE: &str = ".pindrop-cli-gateway";

/// Persists the single configured gateway domain.
///
/// One domain is active at a time; each successful [`GatewayStore::set`]
/// overwrites it. A never-configured store is surfaced as
/// [`PindropError::NotConfigured`], never silently defaulted.
#[derive(Clone, Debug)]
pub struct GatewayStore {
    path: PathBuf,
}

impl GatewayStore {
    /// Creates a store rooted at the given directory. Used by tests and by
    /// callers that thread their own state directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(GATEWAY_FILE),
        }
    }

    /// Creates a store at the default location in the user's home directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(home_dir()?))
    }

    /// Reads the configured domain.
    ///
    /// Fails with [`PindropError::NotConfigured`] when no domain has ever
    /// been set; other read failures surface as [`PindropError::Io`].
    #[instrument(skip(self))]
    pub fn get(&self) -> Result<String> {
        read_value(&self.path)?.ok_or(PindropError::NotConfigured)
    }

    /// Overwrites the configured domain unconditionally.
    ///
    /// No DNS validation happens here; resolution is lazy, on the first
    /// actual request against the domain.
    #[instrument(skip(self))]
    pub fn set(&self, domain: &str) -> Result<()> {
        write_value(&self.path, domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_before_set_is_not_configured() {
        let dir = tempdir().unwrap();
        let store = GatewayStore::new(dir.path());

        let err = store.get().unwrap_err();
        assert!(matches!(err, PindropError::NotConfigured));
    }

    #[test]
    fn test_set_get_round_trip() {
        let dir = tempdir().unwrap();
        let store = GatewayStore::new(dir.path());

        store.set("x.example.net").unwrap();
        assert_eq!(store.get().unwrap(), "x.example.net");

        // Idempotent
        assert_eq!(store.get().unwrap(), "x.example.net");
    }

    #[test]
    fn test_set_overwrites_previous_domain() {
        let dir = tempdir().unwrap();
        let store = GatewayStore::new(dir.path());

        store.set("old.example.net").unwrap();
        store.set("new.example.net").unwrap();
        assert_eq!(store.get().unwrap(), "new.example.net");
    }

    #[test]
    fn test_update_visible_to_later_instance() {
        let dir = tempdir().unwrap();
        GatewayStore::new(dir.path()).set("g.example.net").unwrap();

        // A fresh store over the same directory observes the write
        let later = GatewayStore::new(dir.path());
        assert_eq!(later.get().unwrap(), "g.example.net");
    }
}
