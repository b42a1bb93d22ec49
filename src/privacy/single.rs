//! Visibility switch for one named repository.

use tokio_util::sync::CancellationToken;

use super::outcome::Outcome;
use super::policy::{self, Decision, SwitchScope};
use super::retry;
use super::session::Session;
use crate::infra::github::{GitHubError, RepoClient, RepositoryRecord, Visibility};

/// Make one repository private.
///
/// The star count is read first; forks are allowed here. A repository that is
/// already private is patched anyway and reported as switched.
pub async fn switch_one_to_private<C: RepoClient>(
    session: &Session<C>,
    name: &str,
    cancel: &CancellationToken,
) -> Result<Outcome, GitHubError> {
    let full_name = session.resolve_full_name(name);
    if let Some(skipped) = readme_guard(session, &full_name) {
        return Ok(skipped);
    }

    let client = session.client();
    let retry_policy = session.retry_policy().as_ref();
    let record = retry::guarded(&full_name, cancel, retry_policy, || {
        client.get_repo(&full_name)
    })
    .await?;
    tracing::debug!(repo = %full_name, stars = record.stars, fork = record.fork, "fetched repository");

    let decision = policy::decide(
        &record,
        Visibility::Private,
        session.username(),
        SwitchScope::Single,
    );
    if let Some(skipped) = Outcome::skipped(&record, decision) {
        skipped.log();
        return Ok(skipped);
    }

    patch(session, full_name, Visibility::Private, cancel).await
}

/// Make one repository public. Only the profile README guard applies.
pub async fn switch_one_to_public<C: RepoClient>(
    session: &Session<C>,
    name: &str,
    cancel: &CancellationToken,
) -> Result<Outcome, GitHubError> {
    let full_name = session.resolve_full_name(name);
    if let Some(skipped) = readme_guard(session, &full_name) {
        return Ok(skipped);
    }

    patch(session, full_name, Visibility::Public, cancel).await
}

fn readme_guard<C: RepoClient>(session: &Session<C>, full_name: &str) -> Option<Outcome> {
    if !policy::is_profile_readme(full_name, session.username()) {
        return None;
    }
    let record = RepositoryRecord {
        full_name: full_name.to_string(),
        stars: 0,
        private: false,
        fork: false,
    };
    let skipped = Outcome::skipped(&record, Decision::SkippedReadme);
    if let Some(outcome) = &skipped {
        outcome.log();
    }
    skipped
}

async fn patch<C: RepoClient>(
    session: &Session<C>,
    full_name: String,
    target: Visibility,
    cancel: &CancellationToken,
) -> Result<Outcome, GitHubError> {
    let client = session.client();
    let retry_policy = session.retry_policy().as_ref();
    let result = retry::guarded(&full_name, cancel, retry_policy, || {
        client.set_visibility(&full_name, target)
    })
    .await;
    match result {
        Ok(()) => {
            let outcome = Outcome::switched(full_name);
            tracing::info!(repo = %outcome.full_name, visibility = %target, "switched visibility");
            Ok(outcome)
        }
        Err(err) => {
            tracing::warn!(repo = %full_name, reason = err.reason(), "switch failed");
            Err(err)
        }
    }
}
