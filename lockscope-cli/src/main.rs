use anyhow::Result;
use clap::Parser;
use lockscope_core::LockscopeConfig;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = LockscopeConfig::from_env();

    init_tracing(args.verbose || config.verbose);
    tracing::debug!(
        lockfile = %config.lockfile_name,
        production = config.production,
        max_depth = ?config.max_depth,
        "loaded configuration"
    );

    match args.command {
        Command::Insight(insight_args) => commands::insight::run(insight_args, &config),
        Command::Upgrade(upgrade_args) => commands::upgrade::run(upgrade_args),
        Command::Projects(projects_args) => commands::projects::run(projects_args, &config),
        Command::Compare(compare_args) => commands::compare::run(compare_args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
