use crate::project::{MANIFEST_NAME, Project};
use crate::{LockscopeError, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub path: PathBuf,
    pub name: String,
    pub version: String,
    pub has_lockfile: bool,
}

/// Every Node.js project under `root`, ordered by path. Installed packages
/// (`node_modules`) and hidden directories are not searched.
pub fn find_projects(root: &Path, lockfile_name: &str) -> Result<Vec<ProjectSummary>> {
    let mut found = Vec::new();
    walk(root, lockfile_name, &mut found)?;
    found.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(found)
}

fn walk(dir: &Path, lockfile_name: &str, out: &mut Vec<ProjectSummary>) -> Result<()> {
    let manifest_path = dir.join(MANIFEST_NAME);

    if manifest_path.is_file() {
        match Project::from_manifest_path(manifest_path) {
            Ok(project) => out.push(ProjectSummary {
                has_lockfile: project.lockfile_path(lockfile_name).is_file(),
                name: project.manifest.name.clone().unwrap_or_default(),
                version: project.manifest.version.clone().unwrap_or_default(),
                path: project.root,
            }),
            Err(err) => tracing::warn!(error = %err, "skipping unreadable manifest"),
        }
    }

    let entries = fs::read_dir(dir).map_err(|source| LockscopeError::ReadFile {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        if !path.is_dir() || skip_dir(&entry.file_name().to_string_lossy()) {
            continue;
        }

        walk(&path, lockfile_name, out)?;
    }

    Ok(())
}

fn skip_dir(name: &str) -> bool {
    name == "node_modules" || name.starts_with('.')
}
