//! tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays reserved for command output.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::env_var::EnvVars;

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool, env: &EnvVars) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, env.log.as_deref()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// GHPM_LOG wins over RUST_LOG, which wins over the verbosity default.
fn build_filter(verbose: bool, ghpm_log: Option<&str>) -> EnvFilter {
    if let Some(filter) = ghpm_log.and_then(|d| EnvFilter::try_new(d).ok()) {
        return filter;
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}
