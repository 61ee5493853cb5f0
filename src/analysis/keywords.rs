//! Keyword frequency ranking across the owned collection.

use std::collections::HashMap;

use crate::analysis::tokenizer;
use crate::cellar::Spirit;

/// Accumulated statistics for one keyword: occurrence count plus the
/// deduplicated IDs of the spirits whose token stream contains it.
/// The vector order of a tally is first-insertion order.
#[derive(Debug, Clone)]
pub struct KeywordStat {
    pub keyword: String,
    pub count: usize,
    pub spirits: Vec<String>,
}

/// Tally every keyword over the collection in order. The caller is
/// expected to have filtered to owned spirits already.
pub fn tally(spirits: &[Spirit]) -> Vec<KeywordStat> {
    let mut stats: Vec<KeywordStat> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for spirit in spirits {
        for token in tokenizer::tokens(spirit) {
            match index.get(&token) {
                Some(&i) => {
                    stats[i].count += 1;
                    if !stats[i].spirits.iter().any(|id| *id == spirit.id) {
                        stats[i].spirits.push(spirit.id.clone());
                    }
                }
                None => {
                    index.insert(token.clone(), stats.len());
                    stats.push(KeywordStat {
                        keyword: token,
                        count: 1,
                        spirits: vec![spirit.id.clone()],
                    });
                }
            }
        }
    }

    stats
}

/// Top-N keywords by count descending. The sort is stable, so equal
/// counts keep their first-insertion order.
pub fn top_n(stats: &[KeywordStat], n: usize) -> Vec<KeywordStat> {
    let mut ranked = stats.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}
