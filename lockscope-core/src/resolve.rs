mod query;
mod types;

pub use query::ResolutionResult;
pub use types::{Dependency, DependencyId, NodeId, Resolution, ResolvedDependency};

use crate::lockfile::{self, PackageLock};
use crate::{LockscopeError, Result};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Replays the resolution recorded in a lockfile.
///
/// One pass over `packages` in file order. Each entry's edges are registered
/// under the name they request. An entry for that name claims every edge
/// waiting on the name, and a later entry with the same name takes the claim
/// over, so the last copy in the file wins. Claims are linked once the pass
/// is over. Edges registered after the last entry for their name stay
/// pending.
pub fn resolve(lock: &PackageLock) -> ResolutionResult {
    let mut result = ResolutionResult::empty();
    // many requests for one name end up at the same package
    let mut pending: HashMap<String, Vec<DependencyId>> = HashMap::new();
    let mut claims: HashMap<String, Claim> = HashMap::new();

    for (key, package) in &lock.packages {
        let is_root = lockfile::is_root(key);
        let edges = register_all(&mut result, &mut pending, &package.dependencies);

        if is_root {
            result.dependencies.extend(edges);
        } else {
            let name = lockfile::package_name(key);
            let node = result.push_node(ResolvedDependency::new(
                name,
                package.version.as_deref().unwrap_or_default(),
                package.license.clone(),
                edges,
            ));

            let waiting = pending.remove(name).unwrap_or_default();
            match claims.get_mut(name) {
                Some(claim) => {
                    claim.node = node;
                    claim.edges.extend(waiting);
                }
                None if !waiting.is_empty() => {
                    claims.insert(
                        name.to_string(),
                        Claim {
                            node,
                            edges: waiting,
                        },
                    );
                }
                None => {}
            }
        }

        let dev_edges = register_all(&mut result, &mut pending, &package.dev_dependencies);
        if is_root {
            result.dev_dependencies.extend(dev_edges);
        }
    }

    for claim in claims.into_values() {
        for edge in claim.edges {
            result.link(edge, claim.node);
        }
    }

    let unresolved: usize = pending.values().map(Vec::len).sum();
    if unresolved > 0 {
        tracing::debug!(
            lockfile = lock.name.as_deref().unwrap_or(""),
            unresolved,
            "lockfile left dependencies without a package entry"
        );
    }

    result
}

// Edges waiting on one name and the latest entry with that name.
struct Claim {
    node: NodeId,
    edges: Vec<DependencyId>,
}

/// Resolution of lockfile text, or an empty result when the text is not a
/// lockfile.
pub fn resolve_str(text: &str) -> ResolutionResult {
    match lockfile::parse(text) {
        Ok(lock) => resolve(&lock),
        Err(err) => {
            tracing::warn!(error = %err, "lockfile could not be read; no resolution data");
            ResolutionResult::empty()
        }
    }
}

pub fn resolve_file(path: &Path) -> Result<ResolutionResult> {
    let data = fs::read_to_string(path).map_err(|source| LockscopeError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(resolve_str(&data))
}

fn register_all(
    result: &mut ResolutionResult,
    pending: &mut HashMap<String, Vec<DependencyId>>,
    requested: &IndexMap<String, String>,
) -> Vec<DependencyId> {
    let mut edges = Vec::with_capacity(requested.len());

    for (name, range) in requested {
        let id = result.push_edge(Dependency::new(name, range));
        pending.entry(name.clone()).or_default().push(id);
        edges.push(id);
    }

    edges
}
