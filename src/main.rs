mod cli;
mod commands;
mod infra;
mod privacy;
mod shared;
#[cfg(test)]
mod testing;

use std::io;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use infra::github::Visibility;
use shared::env_var::EnvVars;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Cli { verbose, command } = Cli::parse();

    let env = EnvVars::load();
    shared::logging::init(verbose, &env);

    if let Commands::Completions { shell } = command {
        clap_complete::generate(shell, &mut Cli::command(), "ghpm", &mut io::stdout());
        return Ok(());
    }
    if let Commands::Config(config_cmd) = &command {
        return config_cmd.run();
    }

    let config = shared::config::load_config()?;
    match &command {
        Commands::ListPublic => commands::list::run(&config, &env, Visibility::Public).await,
        Commands::ListPrivate => commands::list::run(&config, &env, Visibility::Private).await,
        Commands::SwitchPrivate(args) => {
            commands::switch::run(&config, &env, args, Visibility::Private).await
        }
        Commands::SwitchPublic(args) => {
            commands::switch::run(&config, &env, args, Visibility::Public).await
        }
        Commands::ThanosSnap => commands::snap::run(&config, &env).await,
        Commands::Login => commands::login::run(&config, &env).await,
        Commands::Config(_) | Commands::Completions { .. } => Ok(()),
    }
}
