//! Per-repository results and the aggregate sweep report.

use std::collections::BTreeMap;

use super::policy::{Decision, STARS_THRESHOLD};
use crate::infra::github::{GitHubError, RepositoryRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutcomeKind {
    Switched,
    SkippedReadme,
    SkippedStarred,
    SkippedFork,
    NotFound,
    Rejected,
    ServerError,
    TransportError,
    Cancelled,
    /// Any other failure: unexpected status, undecodable body.
    OtherError,
}

impl OutcomeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Switched => "switched",
            Self::SkippedReadme => "skipped (profile README)",
            Self::SkippedStarred => "skipped (starred)",
            Self::SkippedFork => "skipped (fork)",
            Self::NotFound => "not found",
            Self::Rejected => "rejected",
            Self::ServerError => "server error",
            Self::TransportError => "transport error",
            Self::Cancelled => "cancelled",
            Self::OtherError => "error",
        }
    }

    pub fn is_skip(self) -> bool {
        matches!(
            self,
            Self::SkippedReadme | Self::SkippedStarred | Self::SkippedFork
        )
    }

    pub fn is_failure(self) -> bool {
        !self.is_skip() && self != Self::Switched
    }

    fn from_error(err: &GitHubError) -> Self {
        match err {
            GitHubError::NotFound { .. } => Self::NotFound,
            GitHubError::Rejected { .. } => Self::Rejected,
            GitHubError::ServerError { .. } => Self::ServerError,
            GitHubError::Transport { .. } => Self::TransportError,
            GitHubError::Cancelled { .. } => Self::Cancelled,
            GitHubError::UnexpectedStatus { .. }
            | GitHubError::Decode { .. }
            | GitHubError::TokenError(_)
            | GitHubError::ClientBuild(_) => Self::OtherError,
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one attempted (or refused) visibility change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub full_name: String,
    pub kind: OutcomeKind,
    /// Human-readable reason for skips and failures.
    pub detail: Option<String>,
}

impl Outcome {
    pub fn switched(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            kind: OutcomeKind::Switched,
            detail: None,
        }
    }

    /// Outcome for a policy refusal. Returns `None` for `Decision::Allow`.
    pub fn skipped(record: &RepositoryRecord, decision: Decision) -> Option<Self> {
        let (kind, detail) = match decision {
            Decision::Allow => return None,
            Decision::SkippedReadme => (
                OutcomeKind::SkippedReadme,
                "it is your profile README repository; use the web UI for that".to_string(),
            ),
            Decision::SkippedStarred => (
                OutcomeKind::SkippedStarred,
                format!(
                    "it has {} star(s); repositories with {STARS_THRESHOLD} or more stars stay public",
                    record.stars
                ),
            ),
            Decision::SkippedFork => (OutcomeKind::SkippedFork, "it is a fork".to_string()),
        };
        Some(Self {
            full_name: record.full_name.clone(),
            kind,
            detail: Some(detail),
        })
    }

    pub fn failed(full_name: impl Into<String>, err: &GitHubError) -> Self {
        Self {
            full_name: full_name.into(),
            kind: OutcomeKind::from_error(err),
            detail: Some(err.to_string()),
        }
    }

    /// Record the outcome in the log with the repository as a field.
    pub fn log(&self) {
        let detail = self.detail.as_deref().unwrap_or_default();
        match self.kind {
            OutcomeKind::Switched => {
                tracing::info!(repo = %self.full_name, "switched visibility")
            }
            kind if kind.is_skip() => {
                tracing::info!(repo = %self.full_name, reason = %kind, "skipped: {detail}")
            }
            kind => {
                tracing::warn!(repo = %self.full_name, reason = %kind, "not switched: {detail}")
            }
        }
    }
}

/// Aggregate result of a bulk sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SwitchReport {
    pub outcomes: Vec<Outcome>,
    pub pages_fetched: u32,
}

impl SwitchReport {
    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.outcomes.iter().filter(|o| o.kind == kind).count()
    }

    pub fn switched(&self) -> usize {
        self.count(OutcomeKind::Switched)
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.kind.is_skip()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.kind.is_failure()).count()
    }

    /// Count per kind, only for kinds that occurred.
    pub fn counts(&self) -> BTreeMap<OutcomeKind, usize> {
        let mut counts = BTreeMap::new();
        for outcome in &self.outcomes {
            *counts.entry(outcome.kind).or_insert(0) += 1;
        }
        counts
    }

    pub fn summary(&self) -> String {
        format!(
            "{} switched, {} skipped, {} failed across {} page(s)",
            self.switched(),
            self.skipped(),
            self.failed(),
            self.pages_fetched
        )
    }
}
