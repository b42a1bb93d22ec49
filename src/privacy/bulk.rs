//! Concurrent public-to-private sweep over every repository of the session
//! owner.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use super::directory::RepoPages;
use super::outcome::{Outcome, OutcomeKind, SwitchReport};
use super::policy::{self, SwitchScope};
use super::retry;
use super::session::Session;
use crate::infra::github::{GitHubError, OwnerScope, RepoClient, RepositoryRecord, Visibility};

/// A page could not be fetched. Outcomes gathered so far are kept.
#[derive(Debug, thiserror::Error)]
#[error("Sweep aborted after {} page(s)", report.pages_fetched)]
pub struct SweepAborted {
    pub report: SwitchReport,
    #[source]
    pub source: GitHubError,
}

/// Switch every public repository of the session owner to private, subject
/// to policy.
///
/// Repositories of one page are patched concurrently and all of them finish
/// before the next page is requested. Per-repository failures end up in the
/// report; only a failed page fetch aborts the sweep.
pub async fn switch_all_public_to_private<C: RepoClient>(
    session: &Session<C>,
    cancel: &CancellationToken,
) -> Result<SwitchReport, SweepAborted> {
    let scope = OwnerScope::NamedUser(session.username().to_string());
    let mut pages = RepoPages::new(session.client().as_ref(), scope, Visibility::Public);
    let mut report = SwitchReport::default();

    loop {
        if cancel.is_cancelled() {
            tracing::warn!(pages = report.pages_fetched, "sweep cancelled");
            break;
        }

        let records = match pages.next_page(cancel, session.retry_policy().as_ref()).await {
            Ok(Some(records)) => records,
            Ok(None) => break,
            Err(GitHubError::Cancelled { .. }) => continue,
            Err(source) => return Err(SweepAborted { report, source }),
        };
        report.pages_fetched += 1;
        let page = report.pages_fetched;
        tracing::info!(page, count = records.len(), "processing page");

        for outcome in switch_page(session, records, cancel).await {
            outcome.log();
            report.push(outcome);
        }
    }

    tracing::info!("{}", report.summary());
    Ok(report)
}

/// Apply policy to one page and patch the allowed records concurrently.
async fn switch_page<C: RepoClient>(
    session: &Session<C>,
    records: Vec<RepositoryRecord>,
    cancel: &CancellationToken,
) -> Vec<Outcome> {
    let mut outcomes = Vec::with_capacity(records.len());
    let mut tasks = JoinSet::new();
    let mut names = HashMap::new();

    for record in records {
        let decision = policy::decide(
            &record,
            Visibility::Private,
            session.username(),
            SwitchScope::Bulk,
        );
        if let Some(skipped) = Outcome::skipped(&record, decision) {
            outcomes.push(skipped);
            continue;
        }

        let client = Arc::clone(session.client());
        let retry_policy = Arc::clone(session.retry_policy());
        let cancel = cancel.clone();
        let full_name = record.full_name;
        let handle = tasks.spawn({
            let full_name = full_name.clone();
            async move {
                let result = retry::guarded(&full_name, &cancel, retry_policy.as_ref(), || {
                    client.set_visibility(&full_name, Visibility::Private)
                })
                .await;
                match result {
                    Ok(()) => Outcome::switched(full_name),
                    Err(err) => Outcome::failed(full_name, &err),
                }
            }
        });
        names.insert(handle.id(), full_name);
    }

    let mut patched = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next_with_id().await {
        let outcome = match joined {
            Ok((_, outcome)) => outcome,
            Err(err) => Outcome {
                full_name: names.remove(&err.id()).unwrap_or_default(),
                kind: OutcomeKind::OtherError,
                detail: Some(format!("switch task failed: {err}")),
            },
        };
        patched.push(outcome);
    }
    patched.sort_by(|a, b| a.full_name.cmp(&b.full_name));

    outcomes.extend(patched);
    outcomes
}
