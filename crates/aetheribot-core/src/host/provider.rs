//! RepositoryHost trait definition.
//!
//! The three read-only operations the query pipeline consumes. Uses RPITIT
//! (native async fn in traits); `BoxRepositoryHost` provides the
//! object-safe wrapper for runtime selection.

use std::future::Future;

use aetheribot_types::error::QueryError;
use aetheribot_types::github::{RepositoryDetails, RepositoryReference, SearchHit};

/// Trait for source-hosting backends.
///
/// Implementations live in aetheribot-infra (e.g., `GitHubClient`).
pub trait RepositoryHost: Send + Sync {
    /// Human-readable host name (e.g., "github").
    fn name(&self) -> &str;

    /// Fetch repository metadata. A non-success status is an
    /// `QueryError::Upstream` error.
    fn get_repository(
        &self,
        reference: &RepositoryReference,
    ) -> impl Future<Output = Result<RepositoryDetails, QueryError>> + Send;

    /// Fetch the README's base64 `content` field.
    ///
    /// Best-effort: a non-success status yields `Ok(None)`. Transport and
    /// decode failures are still errors.
    fn get_readme(
        &self,
        reference: &RepositoryReference,
    ) -> impl Future<Output = Result<Option<String>, QueryError>> + Send;

    /// Search repositories by free text, sorted by stars descending.
    fn search_repositories(
        &self,
        query: &str,
        per_page: usize,
    ) -> impl Future<Output = Result<Vec<SearchHit>, QueryError>> + Send;
}
