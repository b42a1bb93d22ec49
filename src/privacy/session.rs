use std::sync::Arc;

use super::retry::{NoRetry, RetryPolicy};
use crate::infra::github::{GitHubError, RepoClient};

/// An authenticated client bound to the user owning its token.
///
/// Built once per run. Everything inside is read-only and shared with the
/// concurrent tasks of a sweep through `Arc`s.
pub struct Session<C> {
    client: Arc<C>,
    username: String,
    retry: Arc<dyn RetryPolicy>,
}

impl<C: RepoClient> Session<C> {
    /// Resolve the token owner's login. Failure here is fatal for the run.
    pub async fn bootstrap(client: C) -> Result<Self, GitHubError> {
        let user = client.current_user().await?;
        tracing::debug!(username = %user.login, "session established");
        Ok(Self {
            client: Arc::new(client),
            username: user.login,
            retry: Arc::new(NoRetry),
        })
    }

    #[cfg(test)]
    pub fn with_retry_policy(mut self, policy: impl RetryPolicy + 'static) -> Self {
        self.retry = Arc::new(policy);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    pub fn retry_policy(&self) -> &Arc<dyn RetryPolicy> {
        &self.retry
    }

    /// `"repo"` becomes `"{username}/repo"`; `"owner/repo"` is kept.
    pub fn resolve_full_name(&self, name: &str) -> String {
        let name = name.trim().trim_matches('/');
        if name.contains('/') {
            name.to_string()
        } else {
            format!("{}/{}", self.username, name)
        }
    }
}
