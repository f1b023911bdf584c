//! Application error type mapping to HTTP status codes and `{ error }` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use aetheribot_types::error::QueryError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed GitHub credential.
    Unauthorized,
    /// Any failure while answering a query.
    Query(QueryError),
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        if e.is_unauthorized() {
            AppError::Unauthorized
        } else {
            AppError::Query(e)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                QueryError::InvalidCredential.to_string(),
            ),
            AppError::Query(e) => {
                tracing::error!(error = %e, "GitHub query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("GitHub search failed: {e}"),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
