//! Page-by-page listing of a user's repositories.

use tokio_util::sync::CancellationToken;

use super::retry::{self, RetryPolicy};
use super::session::Session;
use crate::infra::github::{
    GitHubError, OwnerScope, PER_PAGE, RepoClient, RepositoryRecord, Visibility,
};

/// Cursor over the pages of one listing.
///
/// Requests `page=1, 2, ...` and stops after the first page holding fewer
/// than `PER_PAGE` entries; a full page always triggers one more request.
pub struct RepoPages<'a, C: ?Sized> {
    client: &'a C,
    scope: OwnerScope,
    visibility: Visibility,
    next: Option<u32>,
}

impl<'a, C: RepoClient + ?Sized> RepoPages<'a, C> {
    pub fn new(client: &'a C, scope: OwnerScope, visibility: Visibility) -> Self {
        Self {
            client,
            scope,
            visibility,
            next: Some(1),
        }
    }

    /// Fetch the next page, or `None` once the listing is exhausted.
    ///
    /// The request goes through the same retry and cancellation guard as
    /// every mutation. A failed page does not advance the cursor.
    pub async fn next_page(
        &mut self,
        cancel: &CancellationToken,
        policy: &dyn RetryPolicy,
    ) -> Result<Option<Vec<RepositoryRecord>>, GitHubError> {
        let Some(page) = self.next else {
            return Ok(None);
        };

        let client = self.client;
        let scope = &self.scope;
        let visibility = self.visibility;
        let resource = format!("page {page} of the {visibility} repository listing");
        let records = retry::guarded(&resource, cancel, policy, || {
            client.list_repos_page(scope, visibility, page)
        })
        .await?;
        tracing::debug!(page, count = records.len(), "fetched repository page");

        self.next = (records.len() >= PER_PAGE).then_some(page + 1);
        Ok(Some(records))
    }
}

/// Collect every page of a listing.
pub async fn list_all<C: RepoClient>(
    session: &Session<C>,
    scope: OwnerScope,
    visibility: Visibility,
    cancel: &CancellationToken,
) -> Result<Vec<RepositoryRecord>, GitHubError> {
    let mut pages = RepoPages::new(session.client().as_ref(), scope, visibility);
    let policy = session.retry_policy().as_ref();
    let mut all = Vec::new();
    while let Some(page) = pages.next_page(cancel, policy).await? {
        all.extend(page);
    }
    Ok(all)
}
