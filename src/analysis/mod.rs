pub mod categories;
pub mod keywords;
pub mod persona;
pub mod similarity;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

use crate::layout::flat::FlavorNode;
use crate::layout::hierarchy::HierarchicalNode;
use persona::Language;

/// One ranked flavor keyword. Ephemeral, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// One category slice of the owned collection.
///
/// Percentages are rounded independently per bucket, so the column may
/// sum to slightly over or under 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBucket {
    pub category: String,
    pub count: usize,
    pub percentage: u32,
}

/// Full result of one cellar analysis, ready to ship to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorAnalysis {
    pub total_spirits: usize,
    pub category_distribution: Vec<CategoryBucket>,
    pub top_keywords: Vec<KeywordCount>,
    pub persona: String,
    /// Top 3 keywords, labels only.
    pub core_flavor_profile: Vec<String>,
    pub dominant_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_nodes: Option<Vec<FlavorNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchical_nodes: Option<Vec<HierarchicalNode>>,
}

impl FlavorAnalysis {
    /// The degenerate result for an empty owned collection.
    pub fn empty(language: Language) -> Self {
        Self {
            total_spirits: 0,
            category_distribution: Vec::new(),
            top_keywords: Vec::new(),
            persona: persona::empty_cellar(language).to_string(),
            core_flavor_profile: Vec::new(),
            dominant_category: String::new(),
            flat_nodes: None,
            hierarchical_nodes: None,
        }
    }
}
