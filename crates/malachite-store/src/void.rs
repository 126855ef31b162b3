//! Void registrar: records a historical loss of knowledge.

use crate::engine::{Layer, Tint};
use crate::error::Result;
use crate::node::{LOST_KNOWLEDGE_MARKER, VOID_INTEGRITY};
use crate::{Malachite, NodeId, NodeType};
use std::collections::BTreeSet;

/// Content stored for a void with the given description.
pub fn void_content(description: &str) -> String {
    format!("{}: {}", LOST_KNOWLEDGE_MARKER, description)
}

impl Malachite {
    /// Register a loss of knowledge after `parent_id`.
    ///
    /// Coordinates follow a zero-mutation crystallization (one unit out, no
    /// angular drift). The node is built as VOID with integrity 0.1 in one
    /// step; no PETAL version of it is ever stored.
    pub fn create_void(
        &mut self,
        parent_id: impl AsRef<str>,
        description: &str,
    ) -> Result<NodeId> {
        let id = self.grow_layer(Layer {
            content: void_content(description),
            parent_id: NodeId::new(parent_id.as_ref()),
            mutation_degree: 0.0,
            node_type: NodeType::Void,
            integrity: VOID_INTEGRITY,
            tint: Tint::Inherit,
            tags: BTreeSet::new(),
        })?;
        tracing::info!(id = %id, parent = parent_id.as_ref(), "void registered");
        Ok(id)
    }
}
