//! Credential resolution.
//!
//! - `env`: environment variable provider and the `GitHubCredential` newtype

pub mod env;

pub use env::{resolve_github_credential, EnvSecretProvider, GitHubCredential, TOKEN_PREFIX};
