//! `ghpm config ...`: inspect the configuration file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;

use crate::shared::config::{self, CONFIG_FILENAMES, Config};
use crate::shared::dirs::ghpm_config_dir;

/// Configuration management commands.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print JSON Schema for the configuration file
    Schema,

    /// Print the path of the configuration file ghpm reads
    Path,

    /// Print the effective configuration as YAML, defaults filled in
    Show,
}

impl ConfigCommands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Schema => println!("{}", render_schema()?),
            Self::Path => {
                let dir = ghpm_config_dir()
                    .context("Neither XDG_CONFIG_HOME nor HOME is set")?;
                println!("{}", config_file_in(&dir).display());
            }
            Self::Show => {
                let config = config::load_config()?;
                print!("{}", render_config(&config)?);
            }
        }
        Ok(())
    }
}

fn render_schema() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&config::generate_schema())?)
}

/// The first existing candidate file, or `config.yaml` when none exists yet.
fn config_file_in(dir: &Path) -> PathBuf {
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .unwrap_or_else(|| dir.join(CONFIG_FILENAMES[0]))
}

fn render_config(config: &Config) -> anyhow::Result<String> {
    Ok(serde_yaml::to_string(config)?)
}
