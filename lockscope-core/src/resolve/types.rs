use lockscope_semver::{Version, VersionSelector};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DependencyId(pub(crate) usize);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) usize);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {
    /// No lockfile entry has claimed this edge (yet, or ever).
    Pending,
    Resolved(NodeId),
}

/// A reference to a package by name and requested version.
#[derive(Clone, Debug)]
pub struct Dependency {
    pub name: String,
    pub raw_version: String,
    /// `None` when `raw_version` is not a valid selector.
    pub requested_version: Option<VersionSelector>,
    resolution: Resolution,
}

impl Dependency {
    pub fn new(name: &str, raw_version: &str) -> Self {
        let requested_version = match VersionSelector::validate(raw_version) {
            Ok(selector) => Some(selector),
            Err(err) => {
                tracing::debug!(
                    dependency = name,
                    error = %err,
                    "requested version is not a valid selector"
                );
                None
            }
        };

        Dependency {
            name: name.to_string(),
            raw_version: raw_version.to_string(),
            requested_version,
            resolution: Resolution::Pending,
        }
    }

    pub fn requested(&self) -> Option<&str> {
        self.requested_version.as_ref().map(VersionSelector::normalized)
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn resolved_node(&self) -> Option<NodeId> {
        match self.resolution {
            Resolution::Resolved(node) => Some(node),
            Resolution::Pending => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Resolved(_))
    }

    // Only the resolver links edges, each one once, after its pass.
    pub(crate) fn link(&mut self, node: NodeId) {
        debug_assert_eq!(
            self.resolution,
            Resolution::Pending,
            "dependency {} linked twice",
            self.name
        );
        self.resolution = Resolution::Resolved(node);
    }
}

/// One package instance pinned by the lockfile.
#[derive(Clone, Debug)]
pub struct ResolvedDependency {
    pub name: String,
    pub version: String,
    pub license: Option<String>,
    pub transitive_dependencies: Vec<DependencyId>,
    parsed: Version,
}

impl ResolvedDependency {
    pub fn new(
        name: &str,
        version: &str,
        license: Option<String>,
        transitive_dependencies: Vec<DependencyId>,
    ) -> Self {
        ResolvedDependency {
            name: name.to_string(),
            version: version.to_string(),
            license,
            transitive_dependencies,
            parsed: Version::parse(version),
        }
    }

    pub fn parsed_version(&self) -> &Version {
        &self.parsed
    }
}
