//! Shared setup for commands that talk to GitHub.

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use crate::infra::github::{GitHubClient, resolve_token};
use crate::privacy::Session;
use crate::shared::config::Config;
use crate::shared::env_var::EnvVars;

/// Resolve the token, build the client and look up its owner.
pub async fn open_session(config: &Config, env: &EnvVars) -> anyhow::Result<Session<GitHubClient>> {
    let token = resolve_token(env)?;
    let client = GitHubClient::new(token, &config.api)?;
    Session::bootstrap(client)
        .await
        .context("Failed to resolve the GitHub user owning the token")
}

/// Token cancelled on the first Ctrl+C. A second Ctrl+C exits immediately.
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            tracing::warn!("Ctrl+C handler unavailable; the sweep cannot be interrupted");
            return;
        }
        tracing::warn!("Cancellation requested, waiting for in-flight requests to stop");
        trigger.cancel();

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });
    cancel
}
