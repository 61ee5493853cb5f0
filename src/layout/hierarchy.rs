//! Hierarchical mind-map layout: user at the center, one angular sector
//! per category, products on the mid orbit, their tags on the outer ring.
//!
//! Nodes reference each other by ID only (arena + neighbor-ID lists), so
//! the tree stays cycle-free in ownership terms and serialises flat.

use std::f32::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer;
use crate::cellar::Spirit;
use crate::layout::{orbit_position, NodeKind, Vec2};

/// Share of a product's angular slot available to its tag fan (60%).
const TAG_FAN_SHARE: f32 = 0.6;

/// Tags shown per product: first 3 non-empty tokens, positional.
const TAGS_PER_PRODUCT: usize = 3;

const USER_SIZE: f32 = 48.0;
const PRODUCT_SIZE: f32 = 28.0;
const TAG_SIZE: f32 = 16.0;

/// One node of the 3-tier radial graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub position: Vec2,
    /// Neighbor IDs, never embedded nodes. The renderer resolves them
    /// against the full node list when drawing edges.
    pub neighbors: Vec<String>,
    /// Tier-based draw size hint.
    pub size: f32,
    /// Back-reference to the source cellar entry (products only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spirit_id: Option<String>,
}

/// Lay out the full owned collection as a radial tree.
///
/// Categories keep first-seen order and split the circle into equal
/// sectors (sector 0 starts at the top). Item `k` of `n` in a sector
/// sits at `sector_start + sector_width/(n+1)·k`, which keeps a buffer
/// at both sector edges. Deterministic for identical ordered input.
pub fn layout_hierarchy(
    spirits: &[Spirit],
    user_label: &str,
    orbit_radius: f32,
    outer_radius: f32,
) -> Vec<HierarchicalNode> {
    if spirits.is_empty() {
        return Vec::new();
    }

    // Group by category, first-seen order. An empty category still gets
    // a sector here: layout covers every owned item even though the
    // aggregation stats skip uncategorised ones.
    let mut groups: Vec<(String, Vec<&Spirit>)> = Vec::new();
    for spirit in spirits {
        match groups.iter_mut().find(|(c, _)| *c == spirit.category) {
            Some((_, items)) => items.push(spirit),
            None => groups.push((spirit.category.clone(), vec![spirit])),
        }
    }

    let sector_width = TAU / groups.len() as f32;

    let mut nodes: Vec<HierarchicalNode> = Vec::new();
    nodes.push(HierarchicalNode {
        id: "user".to_string(),
        kind: NodeKind::User,
        label: user_label.to_string(),
        category: None,
        position: Vec2 { x: 0.0, y: 0.0 },
        neighbors: Vec::new(),
        size: USER_SIZE,
        spirit_id: None,
    });

    let mut product_ids: Vec<String> = Vec::new();

    for (g, (category, items)) in groups.iter().enumerate() {
        let sector_start = g as f32 * sector_width - FRAC_PI_2;
        let n = items.len() as f32;
        let category_field = if category.is_empty() {
            None
        } else {
            Some(category.clone())
        };

        for (k, spirit) in items.iter().enumerate() {
            // 1-indexed placement reserves a buffer at the sector edges.
            let product_angle = sector_start + (sector_width / (n + 1.0)) * (k as f32 + 1.0);
            let product_id = format!("spirit-{}", spirit.id);

            let tags: Vec<String> = tokenizer::tokens(spirit)
                .into_iter()
                .take(TAGS_PER_PRODUCT)
                .collect();

            // Tag fan: 60% of this product's angular slot, centered on
            // the product's own angle.
            let span = (sector_width / n) * TAG_FAN_SHARE;
            let fan_start = product_angle - span / 2.0;
            let t = tags.len() as f32;

            let mut product = HierarchicalNode {
                id: product_id.clone(),
                kind: NodeKind::Product,
                label: spirit.name.clone(),
                category: category_field.clone(),
                position: orbit_position(product_angle, orbit_radius),
                neighbors: vec!["user".to_string()],
                size: PRODUCT_SIZE,
                spirit_id: Some(spirit.id.clone()),
            };

            let mut tag_nodes: Vec<HierarchicalNode> = Vec::new();
            for (m, tag) in tags.iter().enumerate() {
                let tag_angle = fan_start + (span / (t + 1.0)) * (m as f32 + 1.0);
                let tag_id = format!("tag-{}-{}", spirit.id, m);
                product.neighbors.push(tag_id.clone());
                tag_nodes.push(HierarchicalNode {
                    id: tag_id,
                    kind: NodeKind::Tag,
                    label: tag.clone(),
                    category: category_field.clone(),
                    position: orbit_position(tag_angle, outer_radius),
                    neighbors: vec![product_id.clone()],
                    size: TAG_SIZE,
                    spirit_id: None,
                });
            }

            product_ids.push(product_id);
            nodes.push(product);
            nodes.extend(tag_nodes);
        }
    }

    nodes[0].neighbors = product_ids;
    log::debug!(
        "hierarchy layout: {} sectors, {} nodes",
        groups.len(),
        nodes.len()
    );
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cellar::{SensoryNotes, Spirit};

    fn spirit(id: &str, category: &str, tasting_note: &str) -> Spirit {
        let s = Spirit::new(id, format!("bottle-{}", id), category, 40.0);
        if tasting_note.is_empty() {
            s
        } else {
            s.with_notes(SensoryNotes {
                tasting_note: Some(tasting_note.to_string()),
                ..SensoryNotes::default()
            })
        }
    }

    fn find<'a>(nodes: &'a [HierarchicalNode], id: &str) -> &'a HierarchicalNode {
        nodes.iter().find(|n| n.id == id).unwrap()
    }

    #[test]
    fn single_item_lands_opposite_sector_start() {
        let nodes = layout_hierarchy(&[spirit("1", "위스키", "오크, 바닐라")], "me", 140.0, 230.0);
        // user + product + 2 tags
        assert_eq!(nodes.len(), 4);
        let product = find(&nodes, "spirit-1");
        // One sector of width 2π, item at -π/2 + (2π/2)·1 = π/2.
        assert!(product.position.x.abs() < 1e-3);
        assert!((product.position.y - 140.0).abs() < 1e-3);
    }

    #[test]
    fn tree_properties_hold() {
        let cellar = vec![
            spirit("1", "위스키", "오크, 바닐라"),
            spirit("2", "소주", "깔끔한"),
            spirit("3", "위스키", "스모키"),
        ];
        let nodes = layout_hierarchy(&cellar, "me", 140.0, 230.0);

        let user = find(&nodes, "user");
        let product_ids: Vec<&str> = nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Product)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(
            user.neighbors.iter().map(String::as_str).collect::<Vec<_>>(),
            product_ids
        );

        for node in &nodes {
            match node.kind {
                NodeKind::Product => {
                    assert_eq!(node.neighbors[0], "user");
                    assert!(node.spirit_id.is_some());
                }
                NodeKind::Tag => {
                    // Exactly one neighbor and it is a product.
                    assert_eq!(node.neighbors.len(), 1);
                    assert_eq!(find(&nodes, &node.neighbors[0]).kind, NodeKind::Product);
                }
                NodeKind::User => {}
            }
        }
    }

    #[test]
    fn at_most_three_tags_per_product() {
        let cellar = vec![spirit("1", "위스키", "a, b, c, d, e")];
        let nodes = layout_hierarchy(&cellar, "me", 140.0, 230.0);
        let tags = nodes.iter().filter(|n| n.kind == NodeKind::Tag).count();
        assert_eq!(tags, 3);
        // Positional truncation: first three tokens, not frequency-ranked.
        assert_eq!(find(&nodes, "tag-1-0").label, "a");
        assert_eq!(find(&nodes, "tag-1-2").label, "c");
    }

    #[test]
    fn lone_tag_centers_on_product_angle() {
        let nodes = layout_hierarchy(&[spirit("1", "위스키", "오크")], "me", 140.0, 230.0);
        let product = find(&nodes, "spirit-1");
        let tag = find(&nodes, "tag-1-0");
        let pa = product.position.y.atan2(product.position.x);
        let ta = tag.position.y.atan2(tag.position.x);
        assert!((pa - ta).abs() < 1e-3);
        let tr = (tag.position.x.powi(2) + tag.position.y.powi(2)).sqrt();
        assert!((tr - 230.0).abs() < 1e-3);
    }

    #[test]
    fn sectors_split_evenly_in_first_seen_order() {
        let cellar = vec![spirit("1", "위스키", ""), spirit("2", "소주", "")];
        let nodes = layout_hierarchy(&cellar, "me", 140.0, 230.0);
        // Two sectors of width π. Sector 0 item: -π/2 + π/2 = 0 → (140, 0).
        let first = find(&nodes, "spirit-1");
        assert!((first.position.x - 140.0).abs() < 1e-3);
        assert!(first.position.y.abs() < 1e-3);
        // Sector 1 item: π/2 + π/2 = π → (−140, 0).
        let second = find(&nodes, "spirit-2");
        assert!((second.position.x + 140.0).abs() < 1e-3);
        assert!(second.position.y.abs() < 1e-3);
    }

    #[test]
    fn uncategorised_items_still_get_a_sector() {
        let nodes = layout_hierarchy(&[spirit("1", "", "오크")], "me", 140.0, 230.0);
        let product = find(&nodes, "spirit-1");
        assert_eq!(product.category, None);
        assert_eq!(product.neighbors[0], "user");
    }

    #[test]
    fn empty_collection_yields_no_nodes() {
        assert!(layout_hierarchy(&[], "me", 140.0, 230.0).is_empty());
    }
}
