//! Category distribution over the owned collection.

use std::collections::HashMap;

use crate::analysis::CategoryBucket;
use crate::cellar::Spirit;

/// Group owned spirits by exact-match category string.
///
/// Spirits with an empty category are omitted from every bucket (they
/// still count toward the percentage denominator). No synonym folding;
/// that is an upstream data-cleaning concern. Buckets come out sorted
/// by count descending, first-seen order on ties.
pub fn distribution(spirits: &[Spirit]) -> Vec<CategoryBucket> {
    let total = spirits.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for spirit in spirits {
        if spirit.category.is_empty() {
            continue;
        }
        match index.get(&spirit.category) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(spirit.category.clone(), counts.len());
                counts.push((spirit.category.clone(), 1));
            }
        }
    }

    let mut buckets: Vec<CategoryBucket> = counts
        .into_iter()
        .map(|(category, count)| CategoryBucket {
            category,
            count,
            // Rounded per bucket; the column may not sum to exactly 100.
            percentage: ((count as f32 / total as f32) * 100.0).round() as u32,
        })
        .collect();
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}

/// The first bucket's category, or the empty string for no buckets.
pub fn dominant(buckets: &[CategoryBucket]) -> String {
    buckets
        .first()
        .map(|b| b.category.clone())
        .unwrap_or_default()
}
