//! GitHubClient -- concrete [`RepositoryHost`] implementation for the GitHub REST API.
//!
//! Issues plain `GET`s against `api_base_url` with the token in an
//! `Authorization: token ...` header. The token is a [`GitHubCredential`]
//! and is only exposed while building request headers.
//!
//! No timeout is set unless `github.request_timeout_secs` is configured,
//! so a hung upstream hangs the caller.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use aetheribot_core::host::RepositoryHost;
use aetheribot_types::config::GitHubConfig;
use aetheribot_types::error::{QueryError, UpstreamOperation};
use aetheribot_types::github::{RepositoryDetails, RepositoryReference, SearchHit};

use super::types::{GitHubReadme, GitHubRepository, GitHubSearchResponse};
use crate::secret::GitHubCredential;

/// Media type requested on every call.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// GitHub REST API client.
pub struct GitHubClient {
    http: reqwest::Client,
    credential: GitHubCredential,
    base_url: String,
}

impl GitHubClient {
    /// Create a client from the `[github]` config section.
    pub fn new(config: &GitHubConfig, credential: GitHubCredential) -> Result<Self, QueryError> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| QueryError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            credential,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Override the base URL (useful for testing or GitHub Enterprise).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path_and_query: &str) -> RequestBuilder {
        self.http
            .get(format!("{}{}", self.base_url, path_and_query))
            .header(AUTHORIZATION, format!("token {}", self.credential.expose()))
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
    }

    async fn send(&self, path_and_query: &str) -> Result<Response, QueryError> {
        let response = self
            .get(path_and_query)
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        debug!(path = path_and_query, status = response.status().as_u16(), "GitHub response");
        Ok(response)
    }

    /// Turn a non-success response into an upstream error carrying its body.
    async fn require_success(
        response: Response,
        operation: UpstreamOperation,
    ) -> Result<Response, QueryError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(QueryError::Upstream {
            operation,
            status: status.as_u16(),
            body,
        })
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, QueryError> {
        response
            .json()
            .await
            .map_err(|e| QueryError::Decode(format!("failed to parse GitHub response: {e}")))
    }
}

impl RepositoryHost for GitHubClient {
    fn name(&self) -> &str {
        "github"
    }

    async fn get_repository(
        &self,
        reference: &RepositoryReference,
    ) -> Result<RepositoryDetails, QueryError> {
        let path = format!("/repos/{}/{}", reference.owner, reference.name);
        let response = self.send(&path).await?;
        let response = Self::require_success(response, UpstreamOperation::RepositoryFetch).await?;
        let repo: GitHubRepository = Self::json(response).await?;
        Ok(repo.into())
    }

    async fn get_readme(
        &self,
        reference: &RepositoryReference,
    ) -> Result<Option<String>, QueryError> {
        let path = format!("/repos/{}/{}/readme", reference.owner, reference.name);
        let response = self.send(&path).await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let readme: GitHubReadme = Self::json(response).await?;
        if let Some(encoding) = readme.encoding.as_deref() {
            if encoding != "base64" {
                debug!(%reference, encoding, "Unexpected README encoding");
            }
        }
        readme
            .content
            .map(Some)
            .ok_or_else(|| QueryError::Decode("README response has no content".to_string()))
    }

    async fn search_repositories(
        &self,
        query: &str,
        per_page: usize,
    ) -> Result<Vec<SearchHit>, QueryError> {
        let path = format!(
            "/search/repositories?q={}&sort=stars&order=desc&per_page={}",
            urlencoding::encode(query),
            per_page
        );
        let response = self.send(&path).await?;
        let response = Self::require_success(response, UpstreamOperation::Search).await?;
        let results: GitHubSearchResponse = Self::json(response).await?;
        debug!(total_count = results.total_count.unwrap_or_default(), "GitHub search matched");

        Ok(results
            .items
            .unwrap_or_default()
            .into_iter()
            .map(SearchHit::from)
            .collect())
    }
}
