//! Environment variable secret provider.
//!
//! The GitHub token is read from the variable named by
//! `github.token_env` (default `GITHUB_API_KEY`) and must carry the
//! classic personal-access-token prefix. Anything else is rejected before
//! a client is ever built.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use aetheribot_types::error::QueryError;

/// Required prefix for GitHub tokens.
pub const TOKEN_PREFIX: &str = "ghp_";

/// A GitHub token that passed the prefix check.
///
/// Wrapped in [`SecretString`]; `Debug` never prints the value.
pub struct GitHubCredential(SecretString);

impl GitHubCredential {
    /// Validate a raw token.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        if raw.starts_with(TOKEN_PREFIX) {
            Ok(Self(SecretString::from(raw.to_string())))
        } else {
            Err(QueryError::InvalidCredential)
        }
    }

    /// Token text, for building the `Authorization` header only.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for GitHubCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GitHubCredential(****)")
    }
}

/// Read-only secret lookup backed by process environment variables.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Look up `key`. Missing and non-Unicode variables are both `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve and validate the GitHub credential from the environment.
pub fn resolve_github_credential(token_env: &str) -> Result<GitHubCredential, QueryError> {
    let raw = EnvSecretProvider::new()
        .get(token_env)
        .ok_or(QueryError::InvalidCredential)?;
    GitHubCredential::parse(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_prefixed_token() {
        let cred = GitHubCredential::parse("ghp_abc123").unwrap();
        assert_eq!(cred.expose(), "ghp_abc123");
    }

    #[test]
    fn test_parse_rejects_other_tokens() {
        for raw in ["", "gho_abc", "github_pat_abc", " ghp_abc", "GHP_abc"] {
            let err = GitHubCredential::parse(raw).unwrap_err();
            assert!(err.is_unauthorized(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_debug_masks_token() {
        let cred = GitHubCredential::parse("ghp_supersecret").unwrap();
        let debug = format!("{cred:?}");
        assert!(!debug.contains("supersecret"));
    }

    #[test]
    fn test_resolve_from_env() {
        // SAFETY: Variable names are unique to this test.
        unsafe { std::env::set_var("AETHERIBOT_TEST_TOKEN_OK", "ghp_fromenv") };
        let cred = resolve_github_credential("AETHERIBOT_TEST_TOKEN_OK").unwrap();
        assert_eq!(cred.expose(), "ghp_fromenv");

        unsafe { std::env::set_var("AETHERIBOT_TEST_TOKEN_BAD", "not-a-token") };
        assert!(resolve_github_credential("AETHERIBOT_TEST_TOKEN_BAD").is_err());

        // SAFETY: Cleanup of the variables set above.
        unsafe {
            std::env::remove_var("AETHERIBOT_TEST_TOKEN_OK");
            std::env::remove_var("AETHERIBOT_TEST_TOKEN_BAD");
        }
    }

    #[test]
    fn test_resolve_missing_var() {
        let err = resolve_github_credential("AETHERIBOT_TEST_TOKEN_NONEXISTENT").unwrap_err();
        assert!(err.is_unauthorized());
    }
}
