use anyhow::Result;
use clap::Args;
use lockscope_core::operations::{self, UpgradeOptions};
use lockscope_core::{Project, console};
use std::env;

#[derive(Args, Debug)]
pub struct UpgradeArgs {
    /// Package name pattern (glob, e.g. `lodash*`)
    pub pattern: String,

    /// Version selector to request, e.g. `^4`
    pub version: String,
}

pub fn run(args: UpgradeArgs) -> Result<()> {
    console::header("upgrade", env!("CARGO_PKG_VERSION"));

    let cwd = env::current_dir()?;
    let mut project = Project::discover(&cwd)?;

    let options = UpgradeOptions {
        name_pattern: args.pattern.clone(),
        version: args.version,
    };

    let changes = operations::upgrade(&mut project, &options)?;

    if changes.is_empty() {
        console::info(&format!(
            "No dependencies matching '{}' need changes.",
            args.pattern
        ));
        return Ok(());
    }

    for change in &changes {
        println!(
            "{} {}: {} -> {}",
            change.section, change.name, change.from, change.to
        );
    }

    println!();
    console::info("Run your package manager's install to refresh the lockfile.");

    Ok(())
}
