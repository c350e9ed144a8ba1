use crate::{LockscopeError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const LOCKFILE_NAME: &str = "package-lock.json";

/// Key of the project itself in the `packages` map.
pub const ROOT_KEY: &str = "";

const NODE_MODULES: &str = "node_modules/";

/// The parts of an npm `package-lock.json` that resolution reads.
///
/// Entries keep file order. Lockfiles without a `packages` map (lockfile
/// version 1) read as an empty map.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageLock {
    pub name: Option<String>,
    pub version: Option<String>,
    pub lockfile_version: Option<u32>,
    #[serde(default)]
    pub packages: IndexMap<String, LockPackage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockPackage {
    pub version: Option<String>,
    pub license: Option<String>,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: IndexMap<String, String>,
}

pub fn is_root(key: &str) -> bool {
    key == ROOT_KEY
}

/// Bare package name of a `packages` key.
///
/// `node_modules/a/node_modules/@scope/b` is `@scope/b`, the same name a
/// top-level install of that package has.
pub fn package_name(key: &str) -> &str {
    match key.rfind(NODE_MODULES) {
        Some(idx) => &key[idx + NODE_MODULES.len()..],
        None => key,
    }
}

pub fn is_lockfile(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == LOCKFILE_NAME)
}

pub fn parse(text: &str) -> std::result::Result<PackageLock, serde_json::Error> {
    serde_json::from_str(text)
}

pub fn read(path: &Path) -> Result<PackageLock> {
    let data = fs::read_to_string(path).map_err(|source| LockscopeError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&data).map_err(|source| LockscopeError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_node_modules_prefix() {
        assert_eq!(package_name("node_modules/rxfire"), "rxfire");
        assert_eq!(package_name("node_modules/@types/node"), "@types/node");
        assert_eq!(package_name("node_modules/a/node_modules/b"), "b");
        assert_eq!(package_name("packages/app"), "packages/app");
    }

    #[test]
    fn root_key_is_not_a_package() {
        assert!(is_root(""));
        assert!(!is_root("node_modules/rxfire"));
    }

    #[test]
    fn classifies_lockfile_by_name() {
        assert!(is_lockfile(Path::new("web/package-lock.json")));
        assert!(!is_lockfile(Path::new("web/package.json")));
        assert!(!is_lockfile(Path::new("web/yarn.lock")));
    }

    #[test]
    fn keeps_entry_order_and_ignores_unknown_fields() {
        let lock = parse(
            r#"{
              "name": "example",
              "lockfileVersion": 3,
              "requires": true,
              "packages": {
                "": { "name": "example", "dependencies": { "b": "^1.0.0" } },
                "node_modules/b": {
                  "version": "1.2.0",
                  "license": "MIT",
                  "integrity": "sha512-xyz",
                  "engines": { "node": ">=18" }
                },
                "node_modules/a": { "version": "0.1.0" }
              }
            }"#,
        )
        .unwrap();

        let keys: Vec<&str> = lock.packages.keys().map(String::as_str).collect();
        assert_eq!(keys, ["", "node_modules/b", "node_modules/a"]);
        assert_eq!(lock.lockfile_version, Some(3));

        let b = &lock.packages["node_modules/b"];
        assert_eq!(b.version.as_deref(), Some("1.2.0"));
        assert_eq!(b.license.as_deref(), Some("MIT"));
        assert!(b.dependencies.is_empty());
    }

    #[test]
    fn v1_lockfile_has_no_packages() {
        let lock = parse(r#"{ "name": "old", "lockfileVersion": 1, "dependencies": {} }"#).unwrap();
        assert!(lock.packages.is_empty());
    }

    #[test]
    fn read_reports_path_on_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCKFILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        match read(&path) {
            Err(LockscopeError::ParseJson { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected ParseJson, got {other:?}"),
        }
    }
}
