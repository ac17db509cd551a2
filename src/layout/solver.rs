//! Recursive placement solver
//!
//! Pins, rulers and frames share one capability: each can tell whether it is
//! placed, what it depends on, how to place itself once those dependencies are
//! placed, and how to verify the result. [`Graph::solve_recursive`] walks the
//! dependency graph depth-first (post-order), tracking the active resolution
//! path to detect cycles.

use super::element::NodeId;
use super::error::PlacementError;
use super::graph::Graph;

/// Nodes currently being resolved, outermost first
#[derive(Debug, Clone, Default)]
pub struct DependencyPath {
    nodes: Vec<NodeId>,
}

impl DependencyPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    fn pop(&mut self) {
        self.nodes.pop();
    }
}

impl Graph {
    /// Whether a node has enough declared information to be solved locally
    pub fn is_placeable(&self, node: NodeId) -> bool {
        match node {
            NodeId::Pin(id) => self.pin(id).is_placeable(),
            NodeId::Ruler(id) => self.ruler_is_placeable(id),
            NodeId::Frame(id) => self.frame_is_placeable(id),
        }
    }

    pub fn is_placed(&self, node: NodeId) -> bool {
        match node {
            NodeId::Pin(id) => self.pin(id).is_placed(),
            NodeId::Ruler(id) => self.ruler_is_placed(id),
            NodeId::Frame(id) => self.frame_is_placed(id),
        }
    }

    /// Nodes that must be placed before `node` can place itself
    pub fn dependencies(&self, node: NodeId) -> Vec<NodeId> {
        match node {
            NodeId::Pin(id) => self.pin_dependencies(id),
            NodeId::Ruler(id) => self.ruler_dependencies(id),
            NodeId::Frame(id) => self.frame_dependencies(id),
        }
    }

    /// Place `node` assuming its dependencies are placed; does not recurse
    pub fn solve_placement(&mut self, node: NodeId) -> Result<(), PlacementError> {
        match node {
            NodeId::Pin(id) => self.solve_pin(id),
            NodeId::Ruler(id) => self.solve_ruler(id),
            NodeId::Frame(id) => self.solve_frame(id),
        }
    }

    pub fn clear_placement(&mut self, node: NodeId) {
        match node {
            NodeId::Pin(id) => self.pin_mut(id).clear_placement(),
            NodeId::Ruler(id) => self.clear_ruler_placement(id),
            NodeId::Frame(id) => self.clear_frame_placement(id),
        }
    }

    /// Check that resolved coordinates honor every declared constraint
    pub fn verify_placement(&self, node: NodeId) -> Result<(), PlacementError> {
        match node {
            NodeId::Pin(id) => self.verify_pin(id),
            NodeId::Ruler(id) => self.verify_ruler(id),
            NodeId::Frame(id) => self.verify_frame(id),
        }
    }

    /// Solve `node` after recursively solving everything it depends on.
    ///
    /// `path` holds the nodes on the active resolution path and is restored
    /// to its previous state on return, whether or not solving succeeded.
    pub fn solve_recursive(
        &mut self,
        node: NodeId,
        path: &mut DependencyPath,
    ) -> Result<(), PlacementError> {
        if path.contains(node) {
            let cycle = path
                .nodes()
                .iter()
                .chain(std::iter::once(&node))
                .map(|&n| self.global_name(n))
                .collect();
            return Err(PlacementError::circular(cycle));
        }
        if self.is_placed(node) {
            return Ok(());
        }

        path.push(node);
        let result = self.solve_dependencies_then_self(node, path);
        path.pop();
        result
    }

    fn solve_dependencies_then_self(
        &mut self,
        node: NodeId,
        path: &mut DependencyPath,
    ) -> Result<(), PlacementError> {
        for dep in self.dependencies(node) {
            self.solve_recursive(dep, path)?;
        }
        // a dependency's local solve can place this node as a side effect
        if !self.is_placed(node) {
            tracing::trace!(node = %self.global_name(node), "local solve");
            self.solve_placement(node)?;
        }
        Ok(())
    }

    /// Convenience entry point starting from an empty path
    pub fn solve(&mut self, node: impl Into<NodeId>) -> Result<(), PlacementError> {
        self.solve_recursive(node.into(), &mut DependencyPath::new())
    }
}
