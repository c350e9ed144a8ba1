use super::insight::{compile_pattern, validate_selector};
use crate::{LockscopeError, Project, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

const SECTIONS: [&str; 2] = ["dependencies", "devDependencies"];

#[derive(Debug, Clone)]
pub struct UpgradeOptions {
    pub name_pattern: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeChange {
    pub section: String,
    pub name: String,
    pub from: String,
    pub to: String,
}

/// Sets every manifest dependency matching the pattern to the requested
/// version. The lockfile is left alone; the package manager refreshes it on
/// the next install.
pub fn upgrade(project: &mut Project, options: &UpgradeOptions) -> Result<Vec<UpgradeChange>> {
    let path = project.manifest_path.clone();
    let data = std::fs::read_to_string(&path).map_err(|source| LockscopeError::ReadFile {
        path: path.clone(),
        source,
    })?;

    let (updated, changes) = upgrade_manifest_text(&path, &data, options)?;

    if changes.is_empty() {
        return Ok(changes);
    }

    project.write_manifest_text(&updated)?;

    for change in &changes {
        tracing::debug!(
            name = %change.name,
            from = %change.from,
            to = %change.to,
            "upgraded manifest dependency"
        );
    }

    Ok(changes)
}

/// Rewrites manifest text, keeping key order and every unrelated field.
/// `path` is only used to report errors.
pub fn upgrade_manifest_text(
    path: &Path,
    data: &str,
    options: &UpgradeOptions,
) -> Result<(String, Vec<UpgradeChange>)> {
    let pattern = compile_pattern(&options.name_pattern)?;
    validate_selector(&options.version)?;

    let mut document: Value =
        serde_json::from_str(data).map_err(|source| LockscopeError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?;
    let mut changes = Vec::new();

    for section in SECTIONS {
        let Some(entries) = document.get_mut(section).and_then(Value::as_object_mut) else {
            continue;
        };

        for (name, value) in entries.iter_mut() {
            let Some(requested) = value.as_str() else {
                continue;
            };

            if !pattern.matches(name) || requested == options.version {
                continue;
            }

            changes.push(UpgradeChange {
                section: section.to_string(),
                name: name.clone(),
                from: requested.to_string(),
                to: options.version.clone(),
            });
            *value = Value::String(options.version.clone());
        }
    }

    if changes.is_empty() {
        return Ok((data.to_string(), changes));
    }

    let mut updated = write_pretty(&document, detect_indent(data)).map_err(|reason| {
        LockscopeError::SerializeJson {
            path: path.to_path_buf(),
            reason,
        }
    })?;
    if data.ends_with('\n') {
        updated.push('\n');
    }

    Ok((updated, changes))
}

fn write_pretty(document: &Value, indent: &str) -> std::result::Result<String, String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|err| err.to_string())?;
    String::from_utf8(buf).map_err(|err| err.to_string())
}

// Indentation of the first indented line; npm writes two spaces.
fn detect_indent(data: &str) -> &str {
    data.lines()
        .find_map(|line| {
            let rest = line.trim_start();
            let indent = &line[..line.len() - rest.len()];
            (!rest.is_empty() && !indent.is_empty()).then_some(indent)
        })
        .unwrap_or("  ")
}
