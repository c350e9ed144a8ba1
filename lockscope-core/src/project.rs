use crate::resolve::{self, ResolutionResult};
use crate::{LockscopeError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_NAME: &str = "package.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: Option<String>,
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: IndexMap<String, String>,
}

#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
}

pub fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == MANIFEST_NAME)
}

impl Project {
    pub fn discover(start: &Path) -> Result<Self> {
        let mut current = Some(start);

        while let Some(dir) = current {
            let candidate = dir.join(MANIFEST_NAME);
            if candidate.is_file() {
                return Self::from_manifest_path(candidate);
            }
            current = dir.parent();
        }

        Err(LockscopeError::ManifestMissing {
            path: start.to_path_buf(),
        })
    }

    pub fn from_manifest_path(path: PathBuf) -> Result<Self> {
        let data = fs::read_to_string(&path).map_err(|source| LockscopeError::ReadFile {
            path: path.clone(),
            source,
        })?;

        let manifest = parse_manifest(&path, &data)?;

        let root =
            path.parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| LockscopeError::ManifestInvalid {
                    path: path.clone(),
                    reason: "manifest has no parent directory".into(),
                })?;

        Ok(Project {
            root,
            manifest_path: path,
            manifest,
        })
    }

    pub fn label(&self) -> String {
        if let Some(name) = self.manifest.name.as_deref() {
            name.to_string()
        } else {
            self.root
                .file_name()
                .and_then(|os| os.to_str())
                .unwrap_or(".")
                .to_string()
        }
    }

    pub fn lockfile_path(&self, lockfile_name: &str) -> PathBuf {
        self.root.join(lockfile_name)
    }

    /// Resolution recorded in the project's lockfile; empty when the project
    /// has no lockfile.
    pub fn resolution(&self, lockfile_name: &str) -> Result<ResolutionResult> {
        let path = self.lockfile_path(lockfile_name);

        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no lockfile next to manifest");
            return Ok(ResolutionResult::empty());
        }

        resolve::resolve_file(&path)
    }

    /// Replaces the manifest file with `data` and reloads it.
    pub fn write_manifest_text(&mut self, data: &str) -> Result<()> {
        let manifest = parse_manifest(&self.manifest_path, data)?;

        fs::write(&self.manifest_path, data).map_err(|source| LockscopeError::WriteFile {
            path: self.manifest_path.clone(),
            source,
        })?;

        self.manifest = manifest;

        Ok(())
    }
}

fn parse_manifest(path: &Path, data: &str) -> Result<Manifest> {
    serde_json::from_str(data).map_err(|source| LockscopeError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}
