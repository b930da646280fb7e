//! Common traits for Pindrop.
//!
//! These traits define the seams between the gateway subsystem and its
//! collaborators, enabling tests to substitute fakes.

use crate::error::Result;

/// Supplies the bearer credential for authenticated API calls.
///
/// Implementations might read a credential file, an environment variable,
/// or a keychain. Lookup is local and synchronous.
pub trait TokenProvider: Send + Sync {
    /// Returns the bearer token, or an error when none is stored.
    fn token(&self) -> Result<String>;
}

/// Opens a URL with the host platform's handler.
///
/// The open action is fire-and-forget: implementations start the handler
/// but do not wait on it. Only failure to launch is reported; whether the
/// handler itself succeeds (e.g. a browser is registered) is not observed.
pub trait UrlLauncher: Send + Sync {
    /// Launches the platform URL handler for `url`.
    fn launch(&self, url: &str) -> Result<()>;
}

impl TokenProvider for String {
    fn token(&self) -> Result<String> {
        Ok(self.clone())
    }
}
