//! Repository lookup and search result types.
//!
//! These are the request-scoped entities the query pipeline builds from
//! upstream responses. Upstream wire formats live in `aetheribot-infra`;
//! these types are what the formatter sees.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An `owner/name` pair extracted from user text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryReference {
    pub owner: String,
    pub name: String,
}

impl RepositoryReference {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Repository metadata as returned by the host.
///
/// Optional fields stay optional here; fallback literals are applied only
/// when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDetails {
    pub full_name: String,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    pub url: String,
}

/// README section of a repository summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ReadmePreview {
    /// First lines of the decoded README.
    Excerpt(String),
    /// README fetch returned a non-success status.
    Unavailable,
}

/// Output of the direct-lookup path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub details: RepositoryDetails,
    pub readme: ReadmePreview,
}

/// One entry of a repository search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub full_name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub url: String,
}

/// Output of the search path: the original query and its ranked hits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultSet {
    pub query: String,
    pub hits: Vec<SearchHit>,
}

impl SearchResultSet {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
