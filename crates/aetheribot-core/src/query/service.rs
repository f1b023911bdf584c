//! QueryService -- turns a chat utterance into a rendered reply.
//!
//! Pipeline:
//! 1. `classify` the utterance into an [`Intent`]
//! 2. Repository: fetch metadata (required), then README (best-effort)
//! 3. Search: one ranked search call, at most [`SEARCH_PAGE_SIZE`] hits
//! 4. Render the outcome with [`super::format`]
//!
//! Calls are strictly sequential and never retried. A required-call failure
//! fails the whole query.

use tracing::debug;

use aetheribot_types::error::QueryError;
use aetheribot_types::github::{
    ReadmePreview, RepositoryReference, RepositorySummary, SearchResultSet,
};

use super::format::{render_search, render_summary};
use super::intent::{classify, FreeTextQuery, Intent};
use super::readme::decode_preview;
use crate::host::RepositoryHost;

/// Number of search hits requested and rendered.
pub const SEARCH_PAGE_SIZE: usize = 3;

/// Result of answering one utterance. Exactly one shape per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Repository(RepositorySummary),
    Search(SearchResultSet),
}

impl QueryOutcome {
    /// Render as the chat reply text.
    pub fn render(&self) -> String {
        match self {
            QueryOutcome::Repository(summary) => render_summary(summary),
            QueryOutcome::Search(results) => render_search(results),
        }
    }
}

/// Stateless query pipeline over a [`RepositoryHost`].
pub struct QueryService<H> {
    host: H,
}

impl<H: RepositoryHost> QueryService<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Classify and answer an utterance.
    pub async fn answer(&self, utterance: &str) -> Result<QueryOutcome, QueryError> {
        match classify(utterance) {
            Intent::Repository(reference) => {
                debug!(host = self.host.name(), %reference, "Direct repository lookup");
                self.lookup(&reference).await.map(QueryOutcome::Repository)
            }
            Intent::Search(query) => {
                debug!(host = self.host.name(), query = %query.text, "Repository search");
                self.search(&query).await.map(QueryOutcome::Search)
            }
        }
    }

    /// Answer an utterance and render the reply text.
    pub async fn reply(&self, utterance: &str) -> Result<String, QueryError> {
        Ok(self.answer(utterance).await?.render())
    }

    /// Fetch metadata, then the README preview.
    pub async fn lookup(
        &self,
        reference: &RepositoryReference,
    ) -> Result<RepositorySummary, QueryError> {
        let details = self.host.get_repository(reference).await?;

        let readme = match self.host.get_readme(reference).await? {
            Some(encoded) => ReadmePreview::Excerpt(decode_preview(&encoded)?),
            None => {
                debug!(%reference, "README not available, using placeholder");
                ReadmePreview::Unavailable
            }
        };

        Ok(RepositorySummary { details, readme })
    }

    /// Run a ranked search for the whole query text.
    pub async fn search(&self, query: &FreeTextQuery) -> Result<SearchResultSet, QueryError> {
        let mut hits = self
            .host
            .search_repositories(&query.text, SEARCH_PAGE_SIZE)
            .await?;

        // Upstream already sorts; a stable sort keeps its order on ties.
        hits.sort_by(|a, b| b.stars.cmp(&a.stars));
        hits.truncate(SEARCH_PAGE_SIZE);

        debug!(hits = hits.len(), "Search complete");

        Ok(SearchResultSet {
            query: query.text.clone(),
            hits,
        })
    }
}
