//! Navigation: lineage rays and sector scans.
//!
//! Read-only. A ray follows parent links, so it is bounded by the depth of
//! the tree. A sector scan ignores lineage and filters the whole node set
//! by angle.

use crate::{Malachite, Node, NodeId};
use malachite_topology::Sector;

impl Malachite {
    /// Lineage of a node, seed first and the node itself last.
    ///
    /// Empty if `node_id` does not resolve. A dangling parent link ends the
    /// walk early instead of failing, in which case the ray starts at the
    /// oldest resolvable ancestor.
    pub fn trace_ray(&self, node_id: impl AsRef<str>) -> Vec<&Node> {
        let mut path = Vec::new();
        let mut current = self.get(node_id);

        while let Some(node) = current {
            path.push(node);
            // terminates: radius strictly decreases towards the seed
            current = node.parent_id.as_ref().and_then(|p| self.store.get(p));
        }

        path.reverse();
        path
    }

    /// Every node whose angle lies in `sector`, in no particular order.
    pub fn scan_sector(&self, sector: Sector) -> Vec<&Node> {
        self.store
            .nodes()
            .filter(|n| sector.contains(n.angle()))
            .collect()
    }

    /// Direct descendants of a node.
    pub fn children(&self, node_id: impl AsRef<str>) -> Vec<&Node> {
        let id = NodeId::new(node_id.as_ref());
        self.store.children(&id).collect()
    }

    /// The seed at the root of a node's tree, if the lineage is intact.
    pub fn seed_of(&self, node_id: impl AsRef<str>) -> Option<&Node> {
        self.trace_ray(node_id)
            .into_iter()
            .next()
            .filter(|n| n.is_seed())
    }

    /// Every loss-of-knowledge record.
    pub fn voids(&self) -> Vec<&Node> {
        self.store.nodes().filter(|n| n.is_void()).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::entropy::{FixedJitter, SequentialIds};
    use crate::{Malachite, NodeType};
    use malachite_topology::Sector;
    use std::collections::HashSet;

    fn engine() -> Malachite {
        Malachite::builder()
            .jitter(FixedJitter(0.5))
            .ids(SequentialIds)
            .build()
    }

    #[test]
    fn ray_runs_seed_to_leaf() {
        let mut db = engine();
        let sledge = db.crystallize("Sledge", "SEED_LOG", 0.2).unwrap();
        let wheel = db.crystallize("Wheel", &sledge, 0.8).unwrap();
        let spoke = db.crystallize("Spoke", &wheel, 0.5).unwrap();

        let ray = db.trace_ray(&spoke);
        let ids: Vec<_> = ray.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["SEED_LOG", sledge.as_str(), wheel.as_str(), spoke.as_str()]);
        assert_eq!(ray[0].node_type, NodeType::Seed);
        assert!(ray.windows(2).all(|w| w[0].radius() < w[1].radius()));
    }

    #[test]
    fn ray_of_seed_is_itself() {
        let db = engine();
        let ray = db.trace_ray("SEED_WIND");
        assert_eq!(ray.len(), 1);
        assert_eq!(ray[0].id.as_str(), "SEED_WIND");
    }

    #[test]
    fn ray_of_unknown_is_empty() {
        let db = engine();
        assert!(db.trace_ray("nope").is_empty());
    }

    #[test]
    fn scan_partitions_seeds() {
        let db = engine();
        let earth: Vec<_> = db.scan_sector(Sector::Earth).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(earth.len(), 3);
        assert!(earth.contains(&"SEED_LOG"));
        assert!(earth.contains(&"SEED_STONE"));
        assert!(earth.contains(&"SEED_STICK"));
        assert_eq!(db.scan_sector(Sector::Water).len(), 1);
        assert_eq!(db.scan_sector(Sector::Sky).len(), 2);
    }

    #[test]
    fn scan_sees_every_node_once() {
        let mut db = engine();
        let mut parent = "SEED_STICK".to_string();
        for i in 0..20 {
            let id = db.crystallize(format!("step {i}"), &parent, 1.0).unwrap();
            parent = id.to_string();
        }

        let mut seen = HashSet::new();
        for sector in Sector::ALL {
            for node in db.scan_sector(sector) {
                assert!(seen.insert(node.id.clone()), "{} in two sectors", node.id);
            }
        }
        assert_eq!(seen.len(), db.len());
    }

    #[test]
    fn drift_moves_layers_across_sectors() {
        let mut db = engine();
        // SEED_STICK at 90; each full-mutation step drifts +5 degrees
        let mut parent = "SEED_STICK".to_string();
        for i in 0..7 {
            parent = db.crystallize(format!("drift {i}"), &parent, 1.0).unwrap().to_string();
        }
        let leaf = db.get(&parent).unwrap();
        assert!((leaf.angle() - 125.0).abs() < 1e-9);
        assert!(db.scan_sector(Sector::Water).iter().any(|n| n.id == leaf.id));
    }

    #[test]
    fn children_and_seed_of() {
        let mut db = engine();
        let a = db.crystallize("a", "SEED_ROPE", 0.1).unwrap();
        let b = db.crystallize("b", "SEED_ROPE", 0.9).unwrap();
        let c = db.crystallize("c", &a, 0.0).unwrap();

        let mut kids: Vec<_> = db.children("SEED_ROPE").iter().map(|n| n.id.clone()).collect();
        kids.sort();
        let mut expected = vec![a.clone(), b];
        expected.sort();
        assert_eq!(kids, expected);

        assert_eq!(db.seed_of(&c).unwrap().id.as_str(), "SEED_ROPE");
        assert!(db.seed_of("missing").is_none());
    }

    #[test]
    fn voids_lists_only_voids() {
        let mut db = engine();
        db.crystallize("fine", "SEED_LOG", 0.0).unwrap();
        let v = db.create_void("SEED_LOG", "gone").unwrap();
        let voids = db.voids();
        assert_eq!(voids.len(), 1);
        assert_eq!(voids[0].id, v);
    }
}
