//! HTTP/REST API layer for AetheriBot.
//!
//! Axum-based API serving the chat endpoint, the mood catalog, and a health
//! check, with CORS and request tracing.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
