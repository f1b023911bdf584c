//! BoxRepositoryHost -- object-safe dynamic dispatch wrapper for RepositoryHost.
//!
//! 1. Define an object-safe `RepositoryHostDyn` trait with boxed futures
//! 2. Blanket-impl `RepositoryHostDyn` for all `T: RepositoryHost`
//! 3. `BoxRepositoryHost` wraps `Box<dyn RepositoryHostDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use aetheribot_types::error::QueryError;
use aetheribot_types::github::{RepositoryDetails, RepositoryReference, SearchHit};

use super::provider::RepositoryHost;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, QueryError>> + Send + 'a>>;

/// Object-safe version of [`RepositoryHost`] with boxed futures.
pub trait RepositoryHostDyn: Send + Sync {
    fn name(&self) -> &str;

    fn get_repository_boxed<'a>(
        &'a self,
        reference: &'a RepositoryReference,
    ) -> BoxFuture<'a, RepositoryDetails>;

    fn get_readme_boxed<'a>(
        &'a self,
        reference: &'a RepositoryReference,
    ) -> BoxFuture<'a, Option<String>>;

    fn search_repositories_boxed<'a>(
        &'a self,
        query: &'a str,
        per_page: usize,
    ) -> BoxFuture<'a, Vec<SearchHit>>;
}

impl<T: RepositoryHost> RepositoryHostDyn for T {
    fn name(&self) -> &str {
        RepositoryHost::name(self)
    }

    fn get_repository_boxed<'a>(
        &'a self,
        reference: &'a RepositoryReference,
    ) -> BoxFuture<'a, RepositoryDetails> {
        Box::pin(self.get_repository(reference))
    }

    fn get_readme_boxed<'a>(
        &'a self,
        reference: &'a RepositoryReference,
    ) -> BoxFuture<'a, Option<String>> {
        Box::pin(self.get_readme(reference))
    }

    fn search_repositories_boxed<'a>(
        &'a self,
        query: &'a str,
        per_page: usize,
    ) -> BoxFuture<'a, Vec<SearchHit>> {
        Box::pin(self.search_repositories(query, per_page))
    }
}

/// Type-erased repository host.
///
/// Since `RepositoryHost` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxRepositoryHost` itself implements `RepositoryHost`, so it
/// plugs into `QueryService` like any concrete host.
pub struct BoxRepositoryHost {
    inner: Box<dyn RepositoryHostDyn>,
}

impl BoxRepositoryHost {
    /// Wrap a concrete `RepositoryHost` in a type-erased box.
    pub fn new<T: RepositoryHost + 'static>(host: T) -> Self {
        Self {
            inner: Box::new(host),
        }
    }
}

impl RepositoryHost for BoxRepositoryHost {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn get_repository(
        &self,
        reference: &RepositoryReference,
    ) -> Result<RepositoryDetails, QueryError> {
        self.inner.get_repository_boxed(reference).await
    }

    async fn get_readme(
        &self,
        reference: &RepositoryReference,
    ) -> Result<Option<String>, QueryError> {
        self.inner.get_readme_boxed(reference).await
    }

    async fn search_repositories(
        &self,
        query: &str,
        per_page: usize,
    ) -> Result<Vec<SearchHit>, QueryError> {
        self.inner.search_repositories_boxed(query, per_page).await
    }
}
