//! Shared domain types for AetheriBot.
//!
//! This crate contains the request-scoped types exchanged between the chat
//! endpoint, the query pipeline, and the GitHub adapter: chat messages,
//! repository summaries, search results, moods, configuration, and the
//! query error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod github;
pub mod mood;
