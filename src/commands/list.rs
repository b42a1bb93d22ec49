//! `ghpm list-public` / `ghpm list-private`.

use tokio_util::sync::CancellationToken;

use super::common::{cancel_on_ctrl_c, open_session};
use crate::infra::github::{OwnerScope, RepoClient, Visibility};
use crate::privacy::{Session, list_all};
use crate::shared::config::Config;
use crate::shared::env_var::EnvVars;

pub async fn run(config: &Config, env: &EnvVars, visibility: Visibility) -> anyhow::Result<()> {
    let session = open_session(config, env).await?;
    let cancel = cancel_on_ctrl_c();
    let names = list_names(&session, visibility, &cancel).await?;
    println!("{}", render_names(&names)?);
    Ok(())
}

/// Full names of every repository of the session owner with `visibility`.
async fn list_names<C: RepoClient>(
    session: &Session<C>,
    visibility: Visibility,
    cancel: &CancellationToken,
) -> anyhow::Result<Vec<String>> {
    let records = list_all(session, OwnerScope::AuthenticatedUser, visibility, cancel).await?;
    tracing::debug!(count = records.len(), %visibility, "listed repositories");
    Ok(records.into_iter().map(|r| r.full_name).collect())
}

fn render_names(names: &[String]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(names)?)
}
