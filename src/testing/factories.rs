//! Test factories for creating test data with sensible defaults.
//!
//! Use `*_with()` variants to customize specific fields.
//!
//! # Example
//! ```ignore
//! use crate::testing::factories::{record, record_with};
//!
//! let plain = record();
//! let starred_fork = record_with(|r| {
//!     r.stars = 3;
//!     r.fork = true;
//! });
//! ```

use crate::infra::github::RepositoryRecord;
use crate::privacy::{Outcome, OutcomeKind};

// =============================================================================
// Repository factories
// =============================================================================

/// Create a public, unstarred, non-fork repository owned by "alice".
pub fn record() -> RepositoryRecord {
    RepositoryRecord {
        full_name: "alice/app".to_string(),
        stars: 0,
        private: false,
        fork: false,
    }
}

/// Create a RepositoryRecord with customizations applied via closure.
pub fn record_with(f: impl FnOnce(&mut RepositoryRecord)) -> RepositoryRecord {
    let mut r = record();
    f(&mut r);
    r
}

// =============================================================================
// Outcome factories
// =============================================================================

/// Create an Outcome without detail.
pub fn outcome(full_name: &str, kind: OutcomeKind) -> Outcome {
    Outcome {
        full_name: full_name.to_string(),
        kind,
        detail: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults() {
        let r = record();
        assert_eq!(r.full_name, "alice/app");
        assert_eq!(r.stars, 0);
        assert!(!r.private);
        assert!(!r.fork);
    }

    #[test]
    fn test_record_with_customization() {
        let r = record_with(|r| {
            r.full_name = "alice/fork".to_string();
            r.fork = true;
        });
        assert_eq!(r.full_name, "alice/fork");
        assert!(r.fork);
        assert_eq!(r.stars, 0);
    }
}
