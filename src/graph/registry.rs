//! Label to vertex id assignment.
//!
//! Ids are handed out in first-sighting order starting at 1. Once a label has
//! an id it keeps it for the lifetime of the registry (until [`IdentifierRegistry::reset`]).

use indexmap::IndexMap;
use thiserror::Error;

use crate::types::{Label, VertexId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Identifier space exhausted (max id {max}); label '{label}' was not registered")]
    IdSpaceExhausted { label: String, max: u64 },
}

/// Maps node labels to [`VertexId`]s.
///
/// Backed by an [`IndexMap`], so iteration follows insertion order, which is
/// also ascending id order.
#[derive(Debug, Clone)]
pub struct IdentifierRegistry {
    ids: IndexMap<Label, VertexId>,
    last_id: u64,
    max_id: u64,
}

impl Default for IdentifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::with_max_id(u64::MAX)
    }

    /// Create a registry that refuses to allocate ids above `max_id`.
    pub fn with_max_id(max_id: u64) -> Self {
        Self {
            ids: IndexMap::new(),
            last_id: 0,
            max_id,
        }
    }

    /// Return the id for `label`, allocating the next one if the label is new.
    pub fn resolve(&mut self, label: &str) -> Result<VertexId, RegistryError> {
        if let Some(&id) = self.ids.get(label) {
            return Ok(id);
        }

        let id = self
            .last_id
            .checked_add(1)
            .filter(|&next| next <= self.max_id)
            .and_then(VertexId::new)
            .ok_or_else(|| RegistryError::IdSpaceExhausted {
                label: label.to_string(),
                max: self.max_id,
            })?;

        self.last_id = id.value();
        self.ids.insert(label.into(), id);
        Ok(id)
    }

    /// Look up a label without allocating.
    pub fn get(&self, label: &str) -> Option<VertexId> {
        self.ids.get(label).copied()
    }

    /// All registered `(label, id)` pairs.
    pub fn snapshot(&self) -> Vec<(&str, VertexId)> {
        self.ids.iter().map(|(label, &id)| (&**label, id)).collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Forget every label; the next allocated id is 1 again.
    pub fn reset(&mut self) {
        self.ids.clear();
        self.last_id = 0;
    }
}
