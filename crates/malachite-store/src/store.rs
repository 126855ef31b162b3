//! Node store: the single source of truth.

use crate::error::{Error, Result};
use crate::{Node, NodeId};
use std::collections::HashMap;

/// Identifier → node mapping.
///
/// Pure data holder. It enforces id uniqueness and nothing else; every
/// derivation rule lives in the [`Malachite`](crate::Malachite) engine.
/// There is no removal and no mutable access to stored nodes.
#[derive(Debug, Default, Clone)]
pub struct NodeStore {
    nodes: HashMap<NodeId, Node>,
}

impl NodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Get a node by id.
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Check whether an id is taken.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Insert a fully constructed node.
    ///
    /// Fails with [`Error::DuplicateId`] rather than overwriting.
    pub fn insert(&mut self, node: Node) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(Error::DuplicateId(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// All nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Direct children of a node.
    /// Note: This is O(n) - use sparingly.
    pub fn children<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = &'a Node> + 'a {
        let id = id.clone();
        self.nodes
            .values()
            .filter(move |n| n.parent_id.as_ref() == Some(&id))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
