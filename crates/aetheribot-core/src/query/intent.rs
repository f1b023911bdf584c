//! Classifies a user utterance as a repository reference or a search.
//!
//! The rule is a single unanchored pattern match for `<token>/<token>`.
//! Any slash between word-like tokens counts, so prose such as
//! "client/server architecture" is routed to a repository lookup. That is
//! the intended contract: callers that want a search must avoid slashes.

use std::sync::LazyLock;

use regex::Regex;

use aetheribot_types::github::RepositoryReference;

/// Owner: ASCII word characters and hyphens. Name: starts with a word
/// character, then word characters, dots, and hyphens.
static REPOSITORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9_-]+)/([A-Za-z0-9_][A-Za-z0-9_.-]*)")
        .expect("repository pattern is valid")
});

/// Free text to send to the repository search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeTextQuery {
    pub text: String,
}

/// The two ways an utterance can be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Repository(RepositoryReference),
    Search(FreeTextQuery),
}

/// Classify an utterance. The first `owner/name`-shaped substring wins.
pub fn classify(utterance: &str) -> Intent {
    match REPOSITORY_PATTERN.captures(utterance) {
        Some(caps) => Intent::Repository(RepositoryReference::new(&caps[1], &caps[2])),
        None => Intent::Search(FreeTextQuery {
            text: utterance.to_string(),
        }),
    }
}
