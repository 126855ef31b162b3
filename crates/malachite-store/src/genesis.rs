//! Genesis: the six fundamental seeds at r = 0.

use crate::node::SOUND_INTEGRITY;
use crate::store::NodeStore;
use crate::{Node, NodeId, NodeType};
use malachite_topology::{PolarCoord, Sector, Spectrum};

/// Tag carried by every seed.
pub const AXIOM_TAG: &str = "AXIOM";

/// Number of seeds planted by genesis.
pub const SEED_COUNT: usize = 6;

/// A fundamental axiom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axiom {
    pub id: &'static str,
    pub content: &'static str,
    pub angle: f64,
    pub sector: Sector,
}

/// The seeds, in planting order.
pub const AXIOMS: [Axiom; SEED_COUNT] = [
    Axiom { id: "SEED_LOG", content: "The Log (Rotation)", angle: 60.0, sector: Sector::Earth },
    Axiom { id: "SEED_STONE", content: "The Stone (Mass)", angle: 30.0, sector: Sector::Earth },
    Axiom { id: "SEED_STICK", content: "The Stick (Leverage)", angle: 90.0, sector: Sector::Earth },
    Axiom { id: "SEED_WATER", content: "The Flow (Energy)", angle: 180.0, sector: Sector::Water },
    Axiom { id: "SEED_ROPE", content: "The Rope (Connection)", angle: 300.0, sector: Sector::Sky },
    Axiom { id: "SEED_WIND", content: "The Wind (Spirit)", angle: 270.0, sector: Sector::Sky },
];

impl Axiom {
    /// Look up an axiom by id.
    pub fn find(id: &str) -> Option<&'static Axiom> {
        AXIOMS.iter().find(|a| a.id == id)
    }

    /// The seed node for this axiom.
    pub fn node(&self) -> Node {
        Node {
            id: NodeId::new(self.id),
            content: self.content.to_string(),
            position: PolarCoord::seed(self.angle),
            parent_id: None,
            node_type: NodeType::Seed,
            spectrum: Spectrum::NEUTRAL,
            integrity: SOUND_INTEGRITY,
            tags: [AXIOM_TAG.to_string(), self.sector.name().to_string()]
                .into_iter()
                .collect(),
        }
    }
}

/// Plant every seed that is not already present.
///
/// Safe to call repeatedly: the store refuses duplicate ids, so seeds that
/// exist are left untouched. Returns the number of seeds planted by this call.
pub(crate) fn plant(store: &mut NodeStore) -> usize {
    let mut planted = 0;
    for axiom in &AXIOMS {
        match store.insert(axiom.node()) {
            Ok(()) => planted += 1,
            Err(_) => tracing::trace!(seed = axiom.id, "seed already present"),
        }
    }
    if planted > 0 {
        tracing::info!(planted, "genesis complete: seeds planted");
    }
    planted
}
