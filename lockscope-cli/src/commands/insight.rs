use anyhow::Result;
use clap::Args;
use lockscope_core::operations::{self, DependencyScope, InsightOptions, InsightRow};
use lockscope_core::{LockscopeConfig, Project, console};
use std::env;

#[derive(Args, Debug)]
pub struct InsightArgs {
    /// Package name pattern (glob, e.g. `@apollo*`)
    pub pattern: String,

    /// Only report packages whose resolved version matches this selector
    #[arg(long)]
    pub version: Option<String>,

    /// Skip transitive dependencies
    #[arg(long)]
    pub only_direct: bool,

    /// Skip devDependencies
    #[arg(long)]
    pub production: bool,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InsightArgs, config: &LockscopeConfig) -> Result<()> {
    if !args.json {
        console::header("insight", env!("CARGO_PKG_VERSION"));
    }

    let cwd = env::current_dir()?;
    let project = Project::discover(&cwd)?;

    let options = InsightOptions {
        name_pattern: args.pattern.clone(),
        version: args.version,
        only_direct: args.only_direct,
        include_dev: config.include_dev() && !args.production,
        max_depth: config.max_depth,
    };

    let lockfile_path = project.lockfile_path(&config.lockfile_name);
    if !lockfile_path.is_file() && !args.json {
        console::warn(&format!(
            "{} not found; resolved versions are unavailable",
            config.lockfile_name
        ));
    }

    let rows = operations::insight(&project, &config.lockfile_name, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        console::info(&format!("No dependencies match '{}'.", args.pattern));
        return Ok(());
    }

    println!("{}", project.label());
    print_rows(&rows);

    Ok(())
}

fn print_rows(rows: &[InsightRow]) {
    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let resolved = if row.resolved.is_empty() {
                "-".to_string()
            } else {
                row.resolved.clone()
            };

            vec![
                row.name.clone(),
                row.requested.clone(),
                resolved,
                scope_label(row),
            ]
        })
        .collect();

    console::table(&["name", "requested", "resolved", "scope"], &table);
}

fn scope_label(row: &InsightRow) -> String {
    match row.scope {
        DependencyScope::Direct => "direct".to_string(),
        DependencyScope::Dev => "dev".to_string(),
        DependencyScope::Transitive => format!("transitive ({})", row.depth),
    }
}
