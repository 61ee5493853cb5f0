//! Flat constellation layout: the top-N keywords on one ring around the
//! user, higher-frequency keywords pulled closer to center.

use std::f32::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::analysis::keywords::KeywordStat;
use crate::analysis::similarity::jaccard;
use crate::layout::{orbit_position, Vec2};

/// How far a maximally frequent keyword is pulled toward center (30%).
const FREQUENCY_PULL: f32 = 0.3;

/// One keyword node of the flat constellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorNode {
    pub id: String,
    pub keyword: String,
    pub count: usize,
    /// IDs of the owned spirits whose token stream contains the keyword.
    pub related_spirits: Vec<String>,
    pub position: Vec2,
    /// Highest Jaccard similarity to any sibling node. Advisory: the
    /// reference behavior computes this without feeding it back into
    /// the coordinates, and that is preserved here.
    pub affinity: f32,
}

/// Place the ranked keywords evenly on the ring, index 0 at the top,
/// proceeding clockwise. Radius shrinks with frequency:
/// `r = R·(1 − (count/max_count)·0.3)`. Deterministic for identical
/// ordered input.
pub fn layout_flavor_nodes(ranked: &[KeywordStat], base_radius: f32) -> Vec<FlavorNode> {
    if ranked.is_empty() {
        return Vec::new();
    }

    let max_count = ranked.iter().map(|s| s.count).max().unwrap_or(1).max(1);

    let mut nodes: Vec<FlavorNode> = ranked
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let angle = i as f32 * (TAU / ranked.len() as f32) - FRAC_PI_2;
            let pull = (stat.count as f32 / max_count as f32) * FREQUENCY_PULL;
            let radius = base_radius * (1.0 - pull);
            FlavorNode {
                id: format!("flavor-{}", i),
                keyword: stat.keyword.clone(),
                count: stat.count,
                related_spirits: stat.spirits.clone(),
                position: orbit_position(angle, radius),
                affinity: 0.0,
            }
        })
        .collect();

    // Pairwise similarity pass. Recorded on the nodes and logged, but
    // the ring coordinates above stay untouched.
    for i in 0..nodes.len() {
        let mut best = 0.0f32;
        for j in 0..nodes.len() {
            if i != j {
                let s = jaccard(&nodes[i].related_spirits, &nodes[j].related_spirits);
                best = best.max(s);
            }
        }
        nodes[i].affinity = best;
    }
    log::debug!(
        "flat layout: {} nodes, max affinity {:.3}",
        nodes.len(),
        nodes.iter().map(|n| n.affinity).fold(0.0f32, f32::max)
    );

    nodes
}
