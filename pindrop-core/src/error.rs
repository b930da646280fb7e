//! Error types for Pindrop.
//!
//! This module provides the error taxonomy using `thiserror`. Every error is
//! designed to be user-actionable: the display text names the command to run
//! or the value that was rejected.

use thiserror::Error;

/// Result type alias using `PindropError`.
pub type Result<T> = std::result::Result<T, PindropError>;

/// Main error type for all Pindrop operations.
#[derive(Debug, Error)]
pub enum PindropError {
    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// No gateway domain has been configured yet.
    #[error("no gateway configured; run the 'auth' command or 'gateways set' first")]
    NotConfigured,

    /// No credential has been stored yet.
    #[error("no access token found; run the 'auth' command first")]
    TokenNotFound,

    /// The home directory could not be resolved.
    #[error("could not determine the user home directory")]
    HomeDirUnavailable,

    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A network override was neither "public" nor "private".
    #[error("invalid network '{0}': expected 'public' or 'private'")]
    InvalidNetwork(String),

    /// A requested link lifetime was zero or negative.
    #[error("invalid link lifetime {0}: must be a positive number of seconds")]
    InvalidLifetime(i64),

    /// An empty token was supplied to the auth flow.
    #[error("token cannot be empty")]
    EmptyToken,

    // ═══════════════════════════════════════════════════════════════════════════
    // REMOTE API ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The credential check was rejected by the API.
    #[error("authentication failed (status {status}); make sure you are using a valid Pindrop token")]
    AuthFailed {
        /// HTTP status returned by the credential check
        status: u16,
    },

    /// The signing endpoint returned a non-200 status.
    #[error("signing request failed with status {status}")]
    RemoteSigning {
        /// HTTP status returned by the signing endpoint
        status: u16,
    },

    /// The gateway listing endpoint returned a non-200 status.
    #[error("gateway listing failed with status {status}")]
    RemoteList {
        /// HTTP status returned by the listing endpoint
        status: u16,
    },

    /// The remote returned zero gateways to choose from.
    #[error("no gateways available on this account")]
    NoCandidates,

    /// HTTP transport failure (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // LOCAL FAILURES
    // ═══════════════════════════════════════════════════════════════════════════

    /// File I/O error from local persistence.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An interactive prompt failed (terminal error, not cancellation).
    #[error("prompt failed: {0}")]
    Prompt(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // URL OPENING
    // ═══════════════════════════════════════════════════════════════════════════

    /// URL-open dispatch on an unrecognized host platform.
    #[error("unsupported platform '{0}': cannot open URLs here")]
    UnsupportedPlatform(String),

    /// The URL-opening subprocess failed to start.
    #[error("failed to launch the URL handler: {0}")]
    Launch(String),
}

impl PindropError {
    /// Returns true if the user can fix this by running a setup command.
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            PindropError::NotConfigured | PindropError::TokenNotFound
        )
    }

    /// Returns true if this error carries a remote HTTP status.
    pub fn is_remote_error(&self) -> bool {
        matches!(
            self,
            PindropError::AuthFailed { .. }
                | PindropError::RemoteSigning { .. }
                | PindropError::RemoteList { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_bad_value() {
        let err = PindropError::InvalidNetwork("mainnet".into());
        assert!(err.to_string().contains("mainnet"));

        let err = PindropError::InvalidLifetime(-5);
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_remote_errors_preserve_status() {
        let err = PindropError::RemoteSigning { status: 403 };
        assert!(err.to_string().contains("403"));
        assert!(err.is_remote_error());
    }

    #[test]
    fn test_setup_errors_point_at_commands() {
        assert!(PindropError::NotConfigured.is_setup_error());
        assert!(PindropError::TokenNotFound.is_setup_error());
        assert!(PindropError::NotConfigured.to_string().contains("auth"));
        assert!(!PindropError::NoCandidates.is_setup_error());
    }
}
