use super::types::{Dependency, DependencyId, NodeId, ResolvedDependency};

/// The root project's view of a replayed lockfile.
///
/// Owns every edge and node the resolver created; edges and nodes refer to
/// each other by index.
#[derive(Clone, Debug, Default)]
pub struct ResolutionResult {
    edges: Vec<Dependency>,
    nodes: Vec<ResolvedDependency>,
    pub(crate) dependencies: Vec<DependencyId>,
    pub(crate) dev_dependencies: Vec<DependencyId>,
}

impl ResolutionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// No root dependencies at all. For a project that has a manifest this
    /// usually means the lockfile was unreadable, not that nothing is
    /// installed.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }

    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter().map(move |id| self.edge(*id))
    }

    pub fn dev_dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.dev_dependencies.iter().map(move |id| self.edge(*id))
    }

    /// First root edge named `name`, direct dependencies before dev ones.
    pub fn dependency(&self, name: &str) -> Option<&Dependency> {
        self.dependencies()
            .chain(self.dev_dependencies())
            .find(|dep| dep.name == name)
    }

    pub fn resolved(&self, dependency: &Dependency) -> Option<&ResolvedDependency> {
        dependency.resolved_node().map(|id| self.node(id))
    }

    pub fn resolved_version(&self, name: &str) -> Option<&str> {
        let dependency = self.dependency(name)?;
        self.resolved(dependency).map(|node| node.version.as_str())
    }

    pub fn edge(&self, id: DependencyId) -> &Dependency {
        &self.edges[id.0]
    }

    pub fn node(&self, id: NodeId) -> &ResolvedDependency {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[ResolvedDependency] {
        &self.nodes
    }

    pub fn transitive<'a>(
        &'a self,
        node: &'a ResolvedDependency,
    ) -> impl Iterator<Item = &'a Dependency> + 'a {
        node.transitive_dependencies
            .iter()
            .map(move |id| self.edge(*id))
    }

    pub fn packages_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a ResolvedDependency> + 'a {
        self.nodes.iter().filter(move |node| node.name == name)
    }

    /// Last package named `name` in lockfile order.
    pub fn package(&self, name: &str) -> Option<&ResolvedDependency> {
        self.nodes.iter().rev().find(|node| node.name == name)
    }

    /// Pending edges owned by the root or by a package.
    pub fn unresolved(&self) -> impl Iterator<Item = &Dependency> {
        let owned = self
            .nodes
            .iter()
            .flat_map(|node| node.transitive_dependencies.iter());

        self.dependencies
            .iter()
            .chain(self.dev_dependencies.iter())
            .chain(owned)
            .map(move |id| self.edge(*id))
            .filter(|dep| !dep.is_resolved())
    }

    pub(crate) fn push_edge(&mut self, dependency: Dependency) -> DependencyId {
        self.edges.push(dependency);
        DependencyId(self.edges.len() - 1)
    }

    pub(crate) fn push_node(&mut self, node: ResolvedDependency) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn link(&mut self, edge: DependencyId, node: NodeId) {
        self.edges[edge.0].link(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built() -> ResolutionResult {
        let mut result = ResolutionResult::empty();

        let direct = result.push_edge(Dependency::new("react", "^18.2.0"));
        let dev = result.push_edge(Dependency::new("react", "^18.0.0"));
        let loose = result.push_edge(Dependency::new("loose-envify", "^1.1.0"));
        result.dependencies.push(direct);
        result.dev_dependencies.push(dev);

        let react = result.push_node(ResolvedDependency::new(
            "react",
            "18.3.1",
            Some("MIT".to_string()),
            vec![loose],
        ));
        result.link(direct, react);
        result.link(dev, react);

        result
    }

    #[test]
    fn direct_edge_wins_lookup() {
        let result = built();
        let found = result.dependency("react").unwrap();
        assert_eq!(found.requested(), Some("^18.2.0"));
        assert_eq!(result.resolved_version("react"), Some("18.3.1"));
    }

    #[test]
    fn absent_name_is_none() {
        let result = built();
        assert!(result.dependency("vue").is_none());
        assert!(result.resolved_version("vue").is_none());
    }

    #[test]
    fn unresolved_lists_pending_transitive_edges() {
        let result = built();
        let pending: Vec<&str> = result.unresolved().map(|d| d.name.as_str()).collect();
        assert_eq!(pending, ["loose-envify"]);
    }

    #[test]
    fn empty_result_has_nothing() {
        let result = ResolutionResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.dependencies().count(), 0);
        assert!(result.nodes().is_empty());
    }
}
