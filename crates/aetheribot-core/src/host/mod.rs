//! Repository host abstraction (GitHub and compatible APIs).

pub mod box_host;
pub mod provider;

pub use box_host::BoxRepositoryHost;
pub use provider::RepositoryHost;
