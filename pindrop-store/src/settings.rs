//! Persisted CLI settings.
//!
//! Currently a single setting: the default network consulted when a command
//! is run without an explicit `--network` override.

use std::path::{Path, PathBuf};

use tracing::instrument;

use pindrop_core::error::Result;
use pindrop_core::types::NetworkMode;

use crate::value_file::{home_dir, read_value, write_value};

/// File name under the home directory holding the default network.
const NETWORK_FILE: &str = ".pindrop-cli-network";

/// Persists the default-network setting.
#[derive(Clone, Debug)]
pub struct SettingsStore {
    network_path: PathBuf,
}

impl SettingsStore {
    /// Creates a store rooted at the given directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            network_path: dir.as_ref().join(NETWORK_FILE),
        }
    }

    /// Creates a store at the default location in the user's home directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(home_dir()?))
    }

    /// Returns the persisted default network, or `None` when never set.
    ///
    /// A stored value outside {public, private} fails strict parsing rather
    /// than being coerced.
    #[instrument(skip(self))]
    pub fn default_network(&self) -> Result<Option<NetworkMode>> {
        match read_value(&self.network_path)? {
            Some(raw) => Ok(Some(NetworkMode::parse(&raw)?)),
            None => Ok(None),
        }
    }

    /// Persists the default network.
    #[instrument(skip(self))]
    pub fn set_default_network(&self, mode: NetworkMode) -> Result<()> {
        write_value(&self.network_path, mode.as_str())
    }
}
