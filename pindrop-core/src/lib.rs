//! # Pindrop Core
//!
//! Core types, errors, and configuration for the Pindrop CLI.
//!
//! This crate provides the foundational building blocks used by all other
//! Pindrop crates:
//!
//! - **Types**: Network modes, signed-link wire payloads, access-link outcomes
//! - **Errors**: Comprehensive error taxonomy with context
//! - **Config**: Explicit API configuration threaded into every component
//! - **Traits**: Seams for the token provider and the URL launcher

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::ApiConfig;
pub use error::{PindropError, Result};
pub use traits::*;
pub use types::*;
