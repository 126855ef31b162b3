//! Node types: the single entity of the crystal.

use malachite_topology::{PolarCoord, Sector, Spectrum};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Integrity of a sound layer.
pub const SOUND_INTEGRITY: f64 = 1.0;

/// Integrity sentinel carried by every void.
pub const VOID_INTEGRITY: f64 = 0.1;

/// Below this integrity a layer counts as crumbling.
pub const DEGRADED_THRESHOLD: f64 = 0.5;

/// Marker prefixed to the content of every void.
pub const LOST_KNOWLEDGE_MARKER: &str = "[LOST KNOWLEDGE]";

/// A node identifier.
///
/// Seeds use fixed human-readable ids (`SEED_LOG`); derived layers get ids
/// from the store's [`IdAllocator`](crate::IdAllocator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create an id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// What kind of layer a node is.
///
/// The type is fixed at creation; nodes never move between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeType {
    /// Fundamental axiom at the origin ring. Only genesis plants these.
    Seed,
    /// Linear improvement (mutation degree <= 0.5).
    Petal,
    /// Radical mutation or branching (mutation degree > 0.5).
    Bud,
    /// Lost knowledge. Only the void registrar creates these.
    Void,
}

impl NodeType {
    /// Mutation degree above which a crystallized layer becomes a bud.
    pub const BUD_THRESHOLD: f64 = 0.5;

    /// Classify a crystallized layer by its mutation degree.
    pub fn for_mutation(mutation_degree: f64) -> Self {
        if mutation_degree > Self::BUD_THRESHOLD {
            Self::Bud
        } else {
            Self::Petal
        }
    }

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seed => "SEED",
            Self::Petal => "PETAL",
            Self::Bud => "BUD",
            Self::Void => "VOID",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A layer of knowledge.
///
/// Serializes to the flat persistence record
/// `id, content, radius, angle, parent_id, node_type, spectrum{r,g,b},
/// integrity, tags`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,

    /// The knowledge itself
    pub content: String,

    /// Coordinates on the crystal
    #[serde(flatten)]
    pub position: PolarCoord,

    /// Lineage link; `None` only for seeds
    pub parent_id: Option<NodeId>,

    pub node_type: NodeType,

    pub spectrum: Spectrum,

    /// 1.0 = solid, below 0.5 = crumbling
    pub integrity: f64,

    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Node {
    /// Evolutionary depth.
    pub fn radius(&self) -> f64 {
        self.position.radius
    }

    /// Semantic angle in [0, 360).
    pub fn angle(&self) -> f64 {
        self.position.angle
    }

    /// Sector this node falls in.
    pub fn sector(&self) -> Sector {
        self.position.sector()
    }

    /// True for axiom nodes.
    pub fn is_seed(&self) -> bool {
        self.node_type == NodeType::Seed
    }

    /// True for loss-of-knowledge records.
    pub fn is_void(&self) -> bool {
        self.node_type == NodeType::Void
    }

    /// True if integrity has fallen below the crumbling threshold.
    pub fn is_degraded(&self) -> bool {
        self.integrity < DEGRADED_THRESHOLD
    }

    /// Check whether the node carries a tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
