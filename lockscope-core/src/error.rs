use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LockscopeError {
    #[error("Failed to read file {path:?}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[error("Failed to write file {path:?}: {source}")]
    WriteFile { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse JSON in {path:?}: {source}")]
    ParseJson { path: PathBuf, source: serde_json::Error },

    #[error("Failed to serialize JSON for {path:?}: {reason}")]
    SerializeJson { path: PathBuf, reason: String },

    #[error("Project manifest package.json not found at {path:?}")]
    ManifestMissing { path: PathBuf },

    #[error("Invalid manifest in {path:?}: {reason}")]
    ManifestInvalid { path: PathBuf, reason: String },

    #[error("Invalid version selector {value}: {reason}")]
    Semver { value: String, reason: String },

    #[error("Invalid name pattern {pattern}: {reason}")]
    Pattern { pattern: String, reason: String },
}
