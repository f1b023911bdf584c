//! Application state wiring the query pipeline to the GitHub client.
//!
//! AppState is shared by the CLI commands and the REST API handlers. The
//! pipeline is generic over `RepositoryHost`; AppState pins it to a boxed
//! host so tests can swap in an in-memory one.

use std::sync::Arc;

use aetheribot_core::host::BoxRepositoryHost;
use aetheribot_core::query::QueryService;
use aetheribot_infra::config::load_global_config;
use aetheribot_infra::filesystem::resolve_data_dir;
use aetheribot_infra::github::GitHubClient;
use aetheribot_infra::secret::resolve_github_credential;
use aetheribot_types::config::GlobalConfig;
use aetheribot_types::error::QueryError;

/// Query pipeline pinned to the boxed host.
pub type ConcreteQueryService = QueryService<BoxRepositoryHost>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GlobalConfig>,
    /// `None` when no valid GitHub credential was found. Chat requests are
    /// then rejected with 401 before any upstream call.
    pub queries: Option<Arc<ConcreteQueryService>>,
}

impl AppState {
    /// Initialize the application state: load config, resolve the
    /// credential, wire the GitHub client.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;
        tracing::debug!(data_dir = %data_dir.display(), "Configuration loaded");

        Self::from_config(config)
    }

    /// Resolve the credential named by `github.token_env` and wire the
    /// GitHub client. A missing or malformed credential leaves `queries`
    /// empty instead of failing.
    pub fn from_config(config: GlobalConfig) -> anyhow::Result<Self> {
        let queries = match resolve_github_credential(&config.github.token_env) {
            Ok(credential) => {
                let client = GitHubClient::new(&config.github, credential)?;
                tracing::debug!(base_url = client.base_url(), "GitHub client ready");
                Some(Arc::new(QueryService::new(BoxRepositoryHost::new(client))))
            }
            Err(err) => {
                tracing::warn!(
                    token_env = %config.github.token_env,
                    "{err} Chat queries will be rejected until it is set."
                );
                None
            }
        };

        Ok(Self {
            config: Arc::new(config),
            queries,
        })
    }

    /// Build state around an arbitrary host.
    #[cfg(test)]
    pub fn with_host<H: aetheribot_core::host::RepositoryHost + 'static>(config: GlobalConfig, host: H) -> Self {
        Self {
            config: Arc::new(config),
            queries: Some(Arc::new(QueryService::new(BoxRepositoryHost::new(host)))),
        }
    }

    /// Build state with no usable credential.
    #[cfg(test)]
    pub fn without_credential(config: GlobalConfig) -> Self {
        Self {
            config: Arc::new(config),
            queries: None,
        }
    }

    /// The query pipeline, or the credential error when none is configured.
    pub fn queries(&self) -> Result<Arc<ConcreteQueryService>, QueryError> {
        self.queries.clone().ok_or(QueryError::InvalidCredential)
    }
}
