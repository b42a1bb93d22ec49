//! Centralized reader for the environment variables ghpm understands.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const GHPM_TOKEN: &str = "GHPM_TOKEN";
const GH_TOKEN: &str = "GH_TOKEN";
const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
const GHPM_LOG: &str = "GHPM_LOG";

/// Snapshot of the relevant environment variables at load time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvVars {
    /// Token dedicated to ghpm. Takes precedence over the shared ones.
    pub ghpm_token: Option<String>,

    /// Token shared with the GitHub CLI.
    pub gh_token: Option<String>,

    /// Token commonly exported in CI environments.
    pub github_token: Option<String>,

    /// Log filter directive, e.g. "debug" or "ghpm=trace".
    pub log: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}

impl EnvVars {
    /// Read all relevant environment variables from the current process.
    pub fn load() -> Self {
        Self {
            ghpm_token: non_empty_var(GHPM_TOKEN),
            gh_token: non_empty_var(GH_TOKEN),
            github_token: non_empty_var(GITHUB_TOKEN),
            log: non_empty_var(GHPM_LOG),
        }
    }

    /// First token found, in precedence order, with the variable it came from.
    pub fn token(&self) -> Option<(&'static str, &str)> {
        [
            (GHPM_TOKEN, &self.ghpm_token),
            (GH_TOKEN, &self.gh_token),
            (GITHUB_TOKEN, &self.github_token),
        ]
        .into_iter()
        .find_map(|(name, value)| value.as_deref().map(|v| (name, v.trim())))
    }
}
