//! Custom axum extractors.

pub mod credential;
