use crate::resolve::{NodeId, ResolutionResult};
use crate::{LockscopeError, Manifest, Project, Result};
use lockscope_semver::VersionSelector;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Clone)]
pub struct InsightOptions {
    /// Glob matched against package names, e.g. `@apollo*`.
    pub name_pattern: String,
    /// Keep only rows whose resolved version matches this selector.
    pub version: Option<String>,
    pub only_direct: bool,
    pub include_dev: bool,
    pub max_depth: Option<usize>,
}

impl InsightOptions {
    pub fn new(name_pattern: impl Into<String>) -> Self {
        InsightOptions {
            name_pattern: name_pattern.into(),
            version: None,
            only_direct: false,
            include_dev: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyScope {
    Direct,
    Dev,
    Transitive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRow {
    pub name: String,
    pub requested: String,
    /// Pinned version, empty when the lockfile does not resolve the package.
    pub resolved: String,
    pub scope: DependencyScope,
    pub depth: usize,
}

pub fn insight(
    project: &Project,
    lockfile_name: &str,
    options: &InsightOptions,
) -> Result<Vec<InsightRow>> {
    let resolution = project.resolution(lockfile_name)?;
    insight_with(&project.manifest, &resolution, options)
}

pub fn insight_with(
    manifest: &Manifest,
    resolution: &ResolutionResult,
    options: &InsightOptions,
) -> Result<Vec<InsightRow>> {
    let pattern = compile_pattern(&options.name_pattern)?;
    let selector = match options.version.as_deref() {
        Some(raw) => Some(validate_selector(raw)?),
        None => None,
    };

    let mut rows = Vec::new();

    let mut sections = vec![(&manifest.dependencies, DependencyScope::Direct)];
    if options.include_dev {
        sections.push((&manifest.dev_dependencies, DependencyScope::Dev));
    }

    for (entries, scope) in sections {
        for (name, requested) in entries {
            if !pattern.matches(name) {
                continue;
            }

            let resolved = resolution
                .dependency(name)
                .and_then(|dep| resolution.resolved(dep))
                .map(|node| node.version.clone())
                .unwrap_or_default();

            rows.push(InsightRow {
                name: name.clone(),
                requested: requested.clone(),
                resolved,
                scope,
                depth: 0,
            });
        }
    }

    if !options.only_direct {
        rows.extend(transitive_rows(resolution, &pattern, options));
    }

    if let Some(selector) = selector {
        rows.retain(|row| selector.matches(&row.resolved));
    }

    Ok(rows)
}

// Breadth first from the root edges; a package is reported at the first
// depth it is reached and never below a root edge that already names it.
fn transitive_rows(
    resolution: &ResolutionResult,
    pattern: &glob::Pattern,
    options: &InsightOptions,
) -> Vec<InsightRow> {
    let max_depth = options.max_depth.unwrap_or(usize::MAX);
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();

    let mut roots: Vec<_> = resolution.dependencies().collect();
    if options.include_dev {
        roots.extend(resolution.dev_dependencies());
    }

    for dep in roots {
        if let Some(node) = dep.resolved_node()
            && visited.insert(node)
        {
            queue.push_back((node, 0));
        }
    }

    let mut rows = Vec::new();

    while let Some((id, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for dep in resolution.transitive(resolution.node(id)) {
            let Some(target) = dep.resolved_node() else {
                continue;
            };

            if !visited.insert(target) {
                continue;
            }

            let node = resolution.node(target);
            if pattern.matches(&node.name) {
                rows.push(InsightRow {
                    name: node.name.clone(),
                    requested: dep.raw_version.clone(),
                    resolved: node.version.clone(),
                    scope: DependencyScope::Transitive,
                    depth: depth + 1,
                });
            }

            queue.push_back((target, depth + 1));
        }
    }

    rows
}

pub(crate) fn compile_pattern(raw: &str) -> Result<glob::Pattern> {
    glob::Pattern::new(raw).map_err(|err| LockscopeError::Pattern {
        pattern: raw.to_string(),
        reason: err.to_string(),
    })
}

pub(crate) fn validate_selector(raw: &str) -> Result<VersionSelector> {
    VersionSelector::validate(raw).map_err(|err| LockscopeError::Semver {
        value: raw.to_string(),
        reason: err.message().to_string(),
    })
}
