//! The analysis pipeline: Filter → Tally → Rank → Aggregate → Persona →
//! Flat layout → Hierarchical layout.
//!
//! Pure and synchronous: every accumulator is locally scoped, nothing
//! survives between calls, and identical ordered input yields an
//! identical result. The engine never fails; the worst case is the
//! all-empty result shape.

use crate::analysis::persona::{self, Language};
use crate::analysis::{categories, keywords, FlavorAnalysis, KeywordCount};
use crate::cellar::Spirit;
use crate::layout::{flat, hierarchy, ORBIT_RADIUS, OUTER_RADIUS};

/// Keywords shown in the flat constellation by default.
const DEFAULT_TOP_N: usize = 5;

/// Keywords kept in the core flavor profile.
const CORE_PROFILE_LEN: usize = 3;

/// The flavor analysis engine, builder-configurable.
pub struct FlavorEngine {
    top_n: usize,
    orbit_radius: f32,
    outer_radius: f32,
    language: Language,
}

impl FlavorEngine {
    pub fn new() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            orbit_radius: ORBIT_RADIUS,
            outer_radius: OUTER_RADIUS,
            language: Language::default(),
        }
    }

    /// Number of keywords in the flat constellation (default 5).
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Persona table language (default Korean).
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Radii of the mid orbit and outer tag ring, in layout units.
    pub fn with_radii(mut self, orbit: f32, outer: f32) -> Self {
        self.orbit_radius = orbit;
        self.outer_radius = outer;
        self
    }

    /// Analyze a cellar snapshot. The caller's collection order is
    /// significant: it drives tie-breaks and angular placement.
    pub fn analyze(&self, spirits: &[Spirit]) -> FlavorAnalysis {
        // Phase 1: ownership filter. Wishlist entries never reach a statistic.
        let owned: Vec<Spirit> = spirits.iter().filter(|s| !s.is_wishlist).cloned().collect();
        if owned.is_empty() {
            return FlavorAnalysis::empty(self.language);
        }
        log::debug!("analyzing {} owned of {} spirits", owned.len(), spirits.len());

        // Phase 2: keyword tally + ranking
        let stats = keywords::tally(&owned);
        let ranked = keywords::top_n(&stats, self.top_n);
        let top_keywords: Vec<KeywordCount> = ranked
            .iter()
            .map(|s| KeywordCount {
                keyword: s.keyword.clone(),
                count: s.count,
            })
            .collect();
        let core_flavor_profile: Vec<String> = ranked
            .iter()
            .take(CORE_PROFILE_LEN)
            .map(|s| s.keyword.clone())
            .collect();

        // Phase 3: category distribution
        let category_distribution = categories::distribution(&owned);
        let dominant_category = categories::dominant(&category_distribution);

        // Phase 4: persona synthesis
        let persona = persona::synthesize(
            &dominant_category,
            ranked.first().map(|s| s.keyword.as_str()),
            self.language,
        );

        // Phase 5: flat constellation
        let flat_nodes = flat::layout_flavor_nodes(&ranked, self.orbit_radius);

        // Phase 6: hierarchical mind map, persona as the center label
        let hierarchical_nodes =
            hierarchy::layout_hierarchy(&owned, &persona, self.orbit_radius, self.outer_radius);

        FlavorAnalysis {
            total_spirits: owned.len(),
            category_distribution,
            top_keywords,
            persona,
            core_flavor_profile,
            dominant_category,
            flat_nodes: Some(flat_nodes),
            hierarchical_nodes: Some(hierarchical_nodes),
        }
    }
}

impl Default for FlavorEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze with the default engine configuration.
pub fn analyze(spirits: &[Spirit]) -> FlavorAnalysis {
    FlavorEngine::new().analyze(spirits)
}
