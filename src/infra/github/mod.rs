//! GitHub REST API client module.
//!
//! Provides `GitHubClient` for the handful of repository endpoints ghpm
//! uses, with the `RepoClient` trait as the seam the engine depends on.

mod client;
pub(crate) mod error;
#[cfg(test)]
pub mod mock;
mod repo;
pub(crate) mod types;

pub use client::{DEFAULT_API_URL, GitHubClient, resolve_token};
pub use error::GitHubError;
pub use repo::RepoClient;
pub use types::{OwnerScope, PER_PAGE, RepositoryRecord, Visibility};
