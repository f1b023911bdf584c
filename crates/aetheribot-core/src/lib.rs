//! Query routing and upstream aggregation for AetheriBot.
//!
//! This crate defines the `RepositoryHost` port that the infrastructure
//! layer implements, and the pipeline that turns a chat utterance into a
//! repository summary or a ranked search. It depends only on
//! `aetheribot-types` -- never on `aetheribot-infra` or any HTTP crate.

pub mod host;
pub mod query;
