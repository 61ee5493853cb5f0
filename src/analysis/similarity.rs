//! Jaccard similarity between keyword nodes, based on the spirits they
//! share. Advisory signal only: the flat layout records it but keeps
//! its even-ring coordinates (see `layout::flat`).

use std::collections::HashSet;

/// Jaccard coefficient |A∩B| / |A∪B| over two ID lists, 0.0 when either
/// is empty. Inputs are treated as sets.
pub fn jaccard(a: &[String], b: &[String]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let sa: HashSet<&str> = a.iter().map(String::as_str).collect();
    let sb: HashSet<&str> = b.iter().map(String::as_str).collect();
    let intersection = sa.intersection(&sb).count();
    let union = sa.union(&sb).count();
    intersection as f32 / union as f32
}
