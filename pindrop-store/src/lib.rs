//! Durable local state for the Pindrop CLI.
//!
//! Each store persists exactly one value as a dot-file in the user's home
//! directory, written wholesale with 0600 permissions. Writes go through a
//! temp-file + rename so racing readers never observe a torn value; racing
//! writers are last-write-wins by design (single-user local tool, no locks).

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, clippy::all)]

mod gateway;
mod settings;
mod token;
mod value_file;

pub use gateway::GatewayStore;
pub use settings::SettingsStore;
pub use token::TokenStore;
