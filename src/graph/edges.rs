//! Undirected, deduplicated edges between vertices.

use indexmap::IndexSet;

use crate::types::VertexId;

/// An unordered pair of vertex ids.
///
/// Stored as `(min, max)` so `{a, b}` and `{b, a}` compare and hash the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    low: VertexId,
    high: VertexId,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.low, self.high)
    }

    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }
}

/// Set of undirected edges, iterated in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: IndexSet<Edge>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `{a, b}`. Returns `false` if the edge (in either orientation) was already present.
    pub fn add(&mut self, a: VertexId, b: VertexId) -> bool {
        self.edges.insert(Edge::new(a, b))
    }

    pub fn contains(&self, a: VertexId, b: VertexId) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn reset(&mut self) {
        self.edges.clear();
    }
}
