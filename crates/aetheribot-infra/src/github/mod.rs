//! GitHub REST API adapter.

pub mod client;
pub mod types;

pub use client::GitHubClient;
