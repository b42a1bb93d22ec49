//! `ghpm switch-private <name>` / `ghpm switch-public <name>`.

use anyhow::{Context, bail};
use clap::Args;

use super::common::{cancel_on_ctrl_c, open_session};
use crate::infra::github::Visibility;
use crate::privacy::{Outcome, OutcomeKind, switch_one_to_private, switch_one_to_public};
use crate::shared::config::Config;
use crate::shared::env_var::EnvVars;

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct SwitchArgs {
    /// Repository name, either "repo" (owned by you) or "owner/repo"
    pub name: String,
}

pub async fn run(
    config: &Config,
    env: &EnvVars,
    args: &SwitchArgs,
    target: Visibility,
) -> anyhow::Result<()> {
    let session = open_session(config, env).await?;
    let cancel = cancel_on_ctrl_c();

    let outcome = match target {
        Visibility::Private => switch_one_to_private(&session, &args.name, &cancel).await,
        Visibility::Public => switch_one_to_public(&session, &args.name, &cancel).await,
    }
    .with_context(|| format!("Failed to make {} {target}", args.name))?;

    println!("{}", describe(&outcome, target)?);
    Ok(())
}

/// Success line for a switch; a policy skip is an error for the CLI.
fn describe(outcome: &Outcome, target: Visibility) -> anyhow::Result<String> {
    match outcome.kind {
        OutcomeKind::Switched => Ok(format!("{} is now {target}", outcome.full_name)),
        kind if kind.is_skip() => bail!(
            "Refusing to make {} {target}: {}",
            outcome.full_name,
            outcome.detail.as_deref().unwrap_or(kind.label())
        ),
        kind => bail!("{} was not switched: {kind}", outcome.full_name),
    }
}
