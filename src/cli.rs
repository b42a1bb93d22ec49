use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::config::ConfigCommands;
use crate::commands::switch::SwitchArgs;

#[derive(Parser)]
#[command(
    name = "ghpm",
    bin_name = "ghpm",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Log at debug level (GHPM_LOG or RUST_LOG take precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List your public repositories as a JSON array
    ListPublic,

    /// List your private repositories as a JSON array
    ListPrivate,

    /// Make one repository private (refused for starred repositories)
    SwitchPrivate(SwitchArgs),

    /// Make one repository public
    SwitchPublic(SwitchArgs),

    /// Make every unstarred, non-fork public repository private
    ThanosSnap,

    /// Show which GitHub account the token belongs to
    Login,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
