//! Text rendering of rays and node listings.

use malachite_store::{Node, NodeType};

/// Draw a ray as an indented evolution tree, seed first.
///
/// ```text
/// 🌱 The Log (Rotation) (r=0.0)
/// └─ The Sledge (r=1.4)
///   └─ Solid Disc Wheel + Axle (r=4.0)
/// ```
pub fn render_ray(ray: &[&Node]) -> String {
    let mut out = String::new();
    for (depth, node) in ray.iter().enumerate() {
        let prefix = if node.node_type == NodeType::Seed {
            "🌱".to_string()
        } else {
            format!("{}└─", "  ".repeat(depth.saturating_sub(1)))
        };
        let status = if node.is_void() { " [VOID]" } else { "" };
        out.push_str(&format!(
            "{} {} (r={:.1}){}\n",
            prefix,
            node.content,
            node.radius(),
            status
        ));
    }
    out
}

/// One line per node: id, type, coordinates, integrity, content.
pub fn render_listing(nodes: &[&Node]) -> String {
    let mut sorted: Vec<&Node> = nodes.to_vec();
    sorted.sort_by(|a, b| {
        a.radius()
            .total_cmp(&b.radius())
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut out = String::new();
    for node in sorted {
        out.push_str(&format!(
            "{:<22} {:<5} {} integrity={:.1}  {}\n",
            node.id.as_str(),
            node.node_type.name(),
            node.position,
            node.integrity,
            node.content
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use malachite_store::{FixedJitter, Malachite, SequentialIds};

    fn db() -> Malachite {
        Malachite::builder()
            .jitter(FixedJitter(0.0))
            .ids(SequentialIds)
            .build()
    }

    #[test]
    fn ray_tree_layout() {
        let mut db = db();
        let sledge = db.crystallize("The Sledge", "SEED_LOG", 0.2).unwrap();
        let wheel = db.crystallize("Wheel", &sledge, 0.8).unwrap();
        let void = db.create_void(&wheel, "bronze").unwrap();

        let text = render_ray(&db.trace_ray(&void));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "🌱 The Log (Rotation) (r=0.0)");
        assert_eq!(lines[1], "└─ The Sledge (r=1.4)");
        assert_eq!(lines[2], "  └─ Wheel (r=4.0)");
        assert_eq!(lines[3], "    └─ [LOST KNOWLEDGE]: bronze (r=5.0) [VOID]");
    }

    #[test]
    fn empty_ray_renders_nothing() {
        assert!(render_ray(&[]).is_empty());
    }

    #[test]
    fn listing_is_sorted_by_radius() {
        let mut db = db();
        db.crystallize("Outer", "SEED_WATER", 1.0).unwrap();
        let text = render_listing(&db.scan_sector(malachite_store::Sector::Water));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("SEED_WATER"));
        assert!(lines[1].contains("Outer"));
    }
}
