//! Snapshot persistence.
//!
//! The store itself is in-memory. A snapshot is the full node set as flat
//! JSON records; restoring one re-checks every graph invariant before the
//! engine is handed back, so a snapshot either loads whole or not at all.

use crate::engine::MalachiteBuilder;
use crate::error::{Error, Result};
use crate::genesis::{Axiom, SEED_COUNT};
use crate::node::{SOUND_INTEGRITY, VOID_INTEGRITY};
use crate::store::NodeStore;
use crate::{Malachite, Node, NodeType};
use malachite_topology::FULL_TURN;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of a whole store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    /// Ordered by radius, then id.
    pub nodes: Vec<Node>,
}

impl Snapshot {
    /// Read a snapshot from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Write this snapshot to a JSON file.
    ///
    /// The data goes to a sibling `.tmp` file first and is renamed over
    /// `path`, so a failed save never truncates an existing snapshot.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let data = serde_json::to_vec_pretty(self)?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        if let Err(e) = write_synced(&tmp, &data).and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// Rebuild a node store, rejecting anything that violates an invariant.
    pub fn into_store(self) -> Result<NodeStore> {
        if self.version != SNAPSHOT_VERSION {
            return Err(corrupt(format!(
                "unsupported version {} (expected {})",
                self.version, SNAPSHOT_VERSION
            )));
        }

        let mut store = NodeStore::new();
        for node in self.nodes {
            check_fields(&node)?;
            store.insert(node).map_err(|e| match e {
                Error::DuplicateId(id) => corrupt(format!("duplicate id {}", id)),
                other => other,
            })?;
        }

        let mut seeds = 0;
        for node in store.nodes() {
            if node.is_seed() {
                seeds += 1;
                continue;
            }
            let parent_id = node
                .parent_id
                .as_ref()
                .ok_or_else(|| corrupt(format!("{} has no parent", node.id)))?;
            let parent = store
                .get(parent_id)
                .ok_or_else(|| corrupt(format!("{} references missing parent {}", node.id, parent_id)))?;
            if node.radius() <= parent.radius() {
                return Err(corrupt(format!(
                    "{} does not grow outward from {} ({} <= {})",
                    node.id,
                    parent.id,
                    node.radius(),
                    parent.radius()
                )));
            }
        }

        if seeds != SEED_COUNT {
            return Err(corrupt(format!("expected {} seeds, found {}", SEED_COUNT, seeds)));
        }

        Ok(store)
    }
}

fn corrupt(reason: String) -> Error {
    Error::CorruptSnapshot(reason)
}

/// Per-node checks that need no other node.
fn check_fields(node: &Node) -> Result<()> {
    let angle = node.angle();
    if !angle.is_finite() || !(0.0..FULL_TURN).contains(&angle) {
        return Err(corrupt(format!("{} has angle {} outside [0, 360)", node.id, angle)));
    }
    if !node.radius().is_finite() || node.radius() < 0.0 {
        return Err(corrupt(format!("{} has invalid radius {}", node.id, node.radius())));
    }
    if !(0.0..=1.0).contains(&node.integrity) {
        return Err(corrupt(format!("{} has integrity {}", node.id, node.integrity)));
    }
    if !node.spectrum.is_bounded() {
        return Err(corrupt(format!("{} has an unbounded spectrum", node.id)));
    }

    match node.node_type {
        NodeType::Seed => {
            let axiom = Axiom::find(node.id.as_str())
                .ok_or_else(|| corrupt(format!("{} is not an axiom", node.id)))?;
            if *node != axiom.node() {
                return Err(corrupt(format!("axiom {} was altered", node.id)));
            }
        }
        NodeType::Void => {
            if node.integrity != VOID_INTEGRITY {
                return Err(corrupt(format!("void {} has integrity {}", node.id, node.integrity)));
            }
        }
        NodeType::Petal | NodeType::Bud => {
            if node.integrity != SOUND_INTEGRITY {
                return Err(corrupt(format!(
                    "{} {} has integrity {}",
                    node.node_type, node.id, node.integrity
                )));
            }
        }
    }
    Ok(())
}

fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}

impl Malachite {
    /// Capture the full node set.
    pub fn snapshot(&self) -> Snapshot {
        let mut nodes: Vec<Node> = self.store.nodes().cloned().collect();
        nodes.sort_by(|a, b| {
            a.radius()
                .total_cmp(&b.radius())
                .then_with(|| a.id.cmp(&b.id))
        });
        Snapshot {
            version: SNAPSHOT_VERSION,
            nodes,
        }
    }

    /// Write a snapshot of this store to a JSON file.
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.snapshot().save(path)
    }
}

impl MalachiteBuilder {
    /// Build a store from a snapshot instead of running genesis.
    pub fn restore(self, snapshot: Snapshot) -> Result<Malachite> {
        let store = snapshot.into_store()?;
        tracing::info!(nodes = store.len(), "snapshot restored");
        Ok(self.with_store(store))
    }

    /// Load and restore a snapshot file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<Malachite> {
        self.restore(Snapshot::load(path)?)
    }
}
