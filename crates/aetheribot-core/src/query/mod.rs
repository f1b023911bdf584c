//! Utterance classification, upstream aggregation, and reply rendering.

pub mod format;
pub mod intent;
pub mod readme;
pub mod service;

pub use intent::{classify, FreeTextQuery, Intent};
pub use service::{QueryOutcome, QueryService};
