//! `ghpm login`: check which account the resolved token belongs to.

use super::common::open_session;
use crate::shared::config::Config;
use crate::shared::env_var::EnvVars;

pub async fn run(config: &Config, env: &EnvVars) -> anyhow::Result<()> {
    let session = open_session(config, env).await?;
    println!("{}", describe(session.username(), token_source(env)));
    Ok(())
}

fn token_source(env: &EnvVars) -> &'static str {
    env.token().map_or("gh auth token", |(name, _)| name)
}

fn describe(username: &str, source: &str) -> String {
    format!("Logged in to GitHub as {username} (token from {source})")
}
