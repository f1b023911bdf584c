use std::fmt;

use thiserror::Error;

/// Upstream operations whose failure fails the whole request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamOperation {
    RepositoryFetch,
    Search,
}

impl fmt::Display for UpstreamOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamOperation::RepositoryFetch => write!(f, "Repo fetch error"),
            UpstreamOperation::Search => write!(f, "Search failed"),
        }
    }
}

/// Errors raised while answering a chat query.
///
/// `InvalidCredential` is the only variant that maps to 401; everything else
/// is reported as a 500 by the HTTP layer.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("GitHub API key is missing or invalid.")]
    InvalidCredential,

    #[error("{operation}: {status} {body}")]
    Upstream {
        operation: UpstreamOperation,
        status: u16,
        body: String,
    },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl QueryError {
    /// Whether this error should be reported as an authentication failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, QueryError::InvalidCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_display() {
        let err = QueryError::Upstream {
            operation: UpstreamOperation::RepositoryFetch,
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"Repo fetch error: 404 {"message":"Not Found"}"#);
    }

    #[test]
    fn test_search_error_display() {
        let err = QueryError::Upstream {
            operation: UpstreamOperation::Search,
            status: 422,
            body: "Validation Failed".to_string(),
        };
        assert_eq!(err.to_string(), "Search failed: 422 Validation Failed");
    }

    #[test]
    fn test_only_credential_error_is_unauthorized() {
        assert!(QueryError::InvalidCredential.is_unauthorized());
        assert!(!QueryError::Decode("bad".to_string()).is_unauthorized());
        assert_eq!(
            QueryError::InvalidCredential.to_string(),
            "GitHub API key is missing or invalid."
        );
    }
}
