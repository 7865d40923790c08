//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::{Cli, Commands, RunArgs},
    handlers::{handle_config, handle_run},
};
use crate::config::Config;
use crate::exit::JobExit;
use anyhow::{Context, Result};

/// Resolves the config and executes the parsed command. No subcommand means `run`.
///
/// # Errors
/// Returns error if the config cannot be resolved or the command handler fails.
pub fn execute(cli: Cli) -> Result<JobExit> {
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let mut config = Config::load(cli.config.as_deref(), &cwd)?;

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            config.apply(args.overrides.to_overrides());
            handle_run(&config, args.dry_run)
        }
        Commands::Config(overrides) => {
            config.apply(overrides.to_overrides());
            handle_config(&config)
        }
    }
}
