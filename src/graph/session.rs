use super::{EdgeSet, IdentifierRegistry};

/// One graph under construction: a registry plus the edges between its vertices.
///
/// Every conversion owns its own session; tests build fresh ones instead of
/// sharing process state.
#[derive(Debug, Clone, Default)]
pub struct GraphSession {
    registry: IdentifierRegistry,
    edges: EdgeSet,
}

impl GraphSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session around an existing (usually custom-limited) registry.
    pub fn with_registry(registry: IdentifierRegistry) -> Self {
        Self {
            registry,
            edges: EdgeSet::new(),
        }
    }

    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Borrow both halves mutably at once.
    pub fn parts_mut(&mut self) -> (&mut IdentifierRegistry, &mut EdgeSet) {
        (&mut self.registry, &mut self.edges)
    }

    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn reset(&mut self) {
        self.registry.reset();
        self.edges.reset();
    }
}
