//! Repository operations.

use reqwest::Method;
use serde_json::json;

use super::client::GitHubClient;
use super::error::Result;
use super::types::{OwnerScope, RepositoryRecord, User, Visibility, VisibilityPatch};

/// Trait for the repository endpoints ghpm needs.
#[async_trait::async_trait]
pub trait RepoClient: Send + Sync + 'static {
    /// `GET /user`: login of the token owner.
    async fn current_user(&self) -> Result<User>;

    /// Fetch one page (1-based) of repositories with the given visibility.
    async fn list_repos_page(
        &self,
        scope: &OwnerScope,
        visibility: Visibility,
        page: u32,
    ) -> Result<Vec<RepositoryRecord>>;

    /// `GET /repos/{owner}/{repo}`.
    async fn get_repo(&self, full_name: &str) -> Result<RepositoryRecord>;

    /// `PATCH /repos/{owner}/{repo}` with `{"private": ...}`. Any 2xx is a
    /// success; the response body is not inspected.
    async fn set_visibility(&self, full_name: &str, target: Visibility) -> Result<()>;
}

#[async_trait::async_trait]
impl RepoClient for GitHubClient {
    async fn current_user(&self) -> Result<User> {
        self.request(Method::GET, "/user", "user", None).await
    }

    async fn list_repos_page(
        &self,
        scope: &OwnerScope,
        visibility: Visibility,
        page: u32,
    ) -> Result<Vec<RepositoryRecord>> {
        let resource = match scope {
            OwnerScope::AuthenticatedUser => format!("your {visibility} repositories"),
            OwnerScope::NamedUser(login) => format!("{visibility} repositories of {login}"),
        };
        self.request(
            Method::GET,
            &scope.page_path(visibility, page),
            &resource,
            None,
        )
        .await
    }

    async fn get_repo(&self, full_name: &str) -> Result<RepositoryRecord> {
        self.request(Method::GET, &format!("/repos/{full_name}"), full_name, None)
            .await
    }

    async fn set_visibility(&self, full_name: &str, target: Visibility) -> Result<()> {
        let patch = VisibilityPatch {
            private: target.is_private(),
        };
        self.request_status(
            Method::PATCH,
            &format!("/repos/{full_name}"),
            full_name,
            Some(json!(patch)),
        )
        .await
    }
}
