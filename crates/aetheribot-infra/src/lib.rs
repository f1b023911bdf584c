//! Infrastructure layer for AetheriBot.
//!
//! Contains implementations of the ports defined in `aetheribot-core`:
//! the reqwest-backed GitHub client, credential resolution, the TOML
//! configuration loader, and data directory helpers.

pub mod config;
pub mod filesystem;
pub mod github;
pub mod secret;
