//! Opening resolved URLs in the browser.
//!
//! The platform is detected once and the dispatch lives behind the single
//! [`UrlLauncher`] capability instead of a branch at every call site. The
//! launch is fire-and-forget: the handler process is spawned, never waited
//! on, and its own failures (no browser registered, say) go unnoticed here.

use std::process::Command;

use tracing::{debug, instrument};

use pindrop_core::error::{PindropError, Result};
use pindrop_core::traits::{TokenProvider, UrlLauncher};

use crate::link::AccessLinkIssuer;
use crate::network::NetworkResolver;

/// Lifetime requested for signed links when the caller gives none.
pub const DEFAULT_LINK_LIFETIME_SECONDS: i64 = 30;

/// Host platform tag for URL-handler dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    /// macOS; opens via the system `open` launcher
    MacOs,
    /// Windows; opens via the URL-protocol file handler
    Windows,
    /// Linux; opens via the desktop `xdg-open` launcher
    Linux,
    /// Anything else; URL opening is unsupported
    Other(String),
}

impl Platform {
    /// Detects the platform this process is running on.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }
}

/// Launches URLs through the platform's handler subprocess.
#[derive(Clone, Debug)]
pub struct CommandLauncher {
    platform: Platform,
}

impl CommandLauncher {
    /// Creates a launcher for the detected host platform.
    pub fn new() -> Self {
        Self::with_platform(Platform::current())
    }

    /// Creates a launcher for an explicit platform tag.
    pub fn with_platform(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Default for CommandLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlLauncher for CommandLauncher {
    fn launch(&self, url: &str) -> Result<()> {
        let mut command = match &self.platform {
            Platform::MacOs => {
                let mut c = Command::new("open");
                c.arg(url);
                c
            }
            Platform::Windows => {
                let mut c = Command::new("rundll32");
                c.arg("url.dll,FileProtocolHandler").arg(url);
                c
            }
            Platform::Linux => {
                let mut c = Command::new("xdg-open");
                c.arg(url);
                c
            }
            Platform::Other(name) => {
                return Err(PindropError::UnsupportedPlatform(name.clone()));
            }
        };

        // Spawn only; the handler is not waited on
        command
            .spawn()
            .map_err(|e| PindropError::Launch(e.to_string()))?;

        debug!(%url, "URL handler launched");
        Ok(())
    }
}

/// Top-level entry: resolves a CID to a URL and opens it in the browser.
pub struct LinkOpener<P: TokenProvider, L: UrlLauncher> {
    resolver: NetworkResolver,
    issuer: AccessLinkIssuer<P>,
    launcher: L,
}

impl<P: TokenProvider, L: UrlLauncher> LinkOpener<P, L> {
    /// Creates an opener from its collaborators.
    pub fn new(resolver: NetworkResolver, issuer: AccessLinkIssuer<P>, launcher: L) -> Self {
        Self {
            resolver,
            issuer,
            launcher,
        }
    }

    /// Resolves the URL for `cid` and launches the platform URL handler.
    ///
    /// The network comes from the resolver's fallback chain; private CIDs
    /// get a signed link with [`DEFAULT_LINK_LIFETIME_SECONDS`] unless the
    /// caller supplied a lifetime. Any stage failure aborts the whole
    /// operation; there are no retries across stages. Returns the URL that
    /// was opened.
    #[instrument(skip(self))]
    pub async fn open_for_browsing(
        &self,
        cid: &str,
        network_override: &str,
        expires: Option<i64>,
    ) -> Result<String> {
        let mode = self.resolver.resolve(network_override)?;

        let outcome = self
            .issuer
            .issue(cid, expires.unwrap_or(DEFAULT_LINK_LIFETIME_SECONDS), mode)
            .await?;

        let url = outcome.url().to_string();
        self.launcher.launch(&url)?;
        Ok(url)
    }
}
