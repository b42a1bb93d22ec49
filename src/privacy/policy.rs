//! Rules deciding which repositories ghpm may touch.

use crate::infra::github::{RepositoryRecord, Visibility};

/// Repositories with at least this many stars are never made private.
pub const STARS_THRESHOLD: u64 = 1;

/// Which operation is asking. Forks are only protected during the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchScope {
    Bulk,
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    SkippedReadme,
    SkippedStarred,
    SkippedFork,
}

/// True for the `"{username}/{username}"` profile README repository.
///
/// GitHub logins are case-insensitive, so the comparison is too.
pub fn is_profile_readme(full_name: &str, username: &str) -> bool {
    full_name
        .split_once('/')
        .is_some_and(|(owner, repo)| {
            owner.eq_ignore_ascii_case(username) && repo.eq_ignore_ascii_case(username)
        })
}

/// Decide whether `record` may be switched to `target`. First match wins.
pub fn decide(
    record: &RepositoryRecord,
    target: Visibility,
    username: &str,
    scope: SwitchScope,
) -> Decision {
    if is_profile_readme(&record.full_name, username) {
        return Decision::SkippedReadme;
    }
    if target == Visibility::Private {
        if record.stars >= STARS_THRESHOLD {
            return Decision::SkippedStarred;
        }
        if record.fork && scope == SwitchScope::Bulk {
            return Decision::SkippedFork;
        }
    }
    Decision::Allow
}
