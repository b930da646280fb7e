//! Persisted bearer token.

use std::path::{Path, PathBuf};

use tracing::instrument;

use pindrop_core::error::{PindropError, Result};
use pindrop_core::traits::TokenProvider;

use crate::value_file::{home_dir, read_value, write_value};

/// File name under the home directory holding the bearer token.
const TOKEN_FILE: &str = ".pindrop-cli";

/// Persists the raw bearer token, overwritten wholesale on each `auth` run.
#[derive(Clone, Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Creates a store rooted at the given directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_FILE),
        }
    }

    /// Creates a store at the default location in the user's home directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(home_dir()?))
    }

    /// Overwrites the stored token.
    #[instrument(skip_all)]
    pub fn set(&self, token: &str) -> Result<()> {
        write_value(&self.path, token)
    }
}

impl TokenProvider for TokenStore {
    fn token(&self) -> Result<String> {
        read_value(&self.path)?.ok_or(PindropError::TokenNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_token() {
        let dir = tempdir().unwrap();
        let store = TokenStore::new(dir.path());

        let err = store.token().unwrap_err();
        assert!(matches!(err, PindropError::TokenNotFound));
    }

    #[test]
    fn test_set_then_provide() {
        let dir = tempdir().unwrap();
        let store = TokenStore::new(dir.path());

        store.set("jwt-abc123").unwrap();
        assert_eq!(store.token().unwrap(), "jwt-abc123");
    }

    #[test]
    fn test_reauth_overwrites() {
        let dir = tempdir().unwrap();
        let store = TokenStore::new(dir.path());

        store.set("jwt-old").unwrap();
        store.set("jwt-new").unwrap();
        assert_eq!(store.token().unwrap(), "jwt-new");
    }
}
