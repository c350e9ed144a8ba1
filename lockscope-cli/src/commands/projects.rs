use anyhow::Result;
use clap::Args;
use lockscope_core::{LockscopeConfig, console, operations};
use std::env;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Directory to search (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ProjectsArgs, config: &LockscopeConfig) -> Result<()> {
    if !args.json {
        console::header("projects", env!("CARGO_PKG_VERSION"));
    }

    let root = match args.path {
        Some(path) => path,
        None => env::current_dir()?,
    };

    let projects = operations::find_projects(&root, &config.lockfile_name)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        console::info("No Node.js projects found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = projects
        .iter()
        .map(|project| {
            let path = project
                .path
                .strip_prefix(&root)
                .ok()
                .filter(|relative| !relative.as_os_str().is_empty())
                .map(|relative| relative.display().to_string())
                .unwrap_or_else(|| ".".to_string());

            vec![
                path,
                project.name.clone(),
                project.version.clone(),
                if project.has_lockfile { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();

    console::table(&["path", "name", "version", "lockfile"], &rows);

    Ok(())
}
