//! GitHub credential extractor.
//!
//! Extracting [`GitHubQueries`] checks that the server holds a valid GitHub
//! credential. It runs before the body is read, so a request without one is
//! rejected with 401 and no upstream call is made.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::http::error::AppError;
use crate::state::{AppState, ConcreteQueryService};

/// The query pipeline, available only when a credential is configured.
pub struct GitHubQueries(pub Arc<ConcreteQueryService>);

impl FromRequestParts<AppState> for GitHubQueries {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(GitHubQueries(state.queries()?))
    }
}
