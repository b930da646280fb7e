//! Gateway access resolution and signed-link issuance.
//!
//! Given a CID and a network mode, this crate decides which gateway host to
//! use, optionally requests a time-bounded signed link from the Pindrop API,
//! and hands back a ready-to-use URL — including the cross-platform launcher
//! that opens it in a browser.
//!
//! Flow: [`NetworkResolver`] picks the effective network (explicit override →
//! persisted default → public). Public CIDs become a direct gateway URL via
//! the configured domain; private CIDs go through [`AccessLinkIssuer`], which
//! builds a timestamped [`pindrop_core::SignedLinkRequest`], sends it through
//! [`ApiClient`], and normalizes the returned URL. [`LinkOpener`] is the
//! top-level entry that also dispatches to the platform URL handler.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, clippy::all)]

mod api;
mod auth;
mod link;
mod network;
mod open;
mod select;

pub use api::ApiClient;
pub use auth::authorize;
pub use link::{normalize_signed_url, AccessLinkIssuer};
pub use network::NetworkResolver;
pub use open::{CommandLauncher, LinkOpener, Platform, DEFAULT_LINK_LIFETIME_SECONDS};
pub use select::{choose_gateway, configure_gateway};
