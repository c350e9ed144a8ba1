use crate::commands;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "lockscope",
    about = "inspect npm lockfiles and the versions they pin",
    version,
    color = clap::ColorChoice::Auto
)]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show requested and resolved versions of matching dependencies
    Insight(commands::insight::InsightArgs),
    /// Set the requested version of matching dependencies in package.json
    Upgrade(commands::upgrade::UpgradeArgs),
    /// Find Node.js projects below a directory
    Projects(commands::projects::ProjectsArgs),
    /// Order version strings and report the highest
    Compare(commands::compare::CompareArgs),
}
