pub mod mock;

use serde::{Deserialize, Serialize};

/// Legacy flattened sensory text, as imported from upstream catalogs.
/// Any field may be missing; the tokenizer falls back to whatever is there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensoryNotes {
    #[serde(default)]
    pub tasting_note: Option<String>,
    #[serde(default)]
    pub nose: Option<String>,
    #[serde(default)]
    pub palate: Option<String>,
    #[serde(default)]
    pub finish: Option<String>,
}

impl SensoryNotes {
    /// All present fields joined into one comma-separated string.
    pub fn flattened(&self) -> String {
        [&self.tasting_note, &self.nose, &self.palate, &self.finish]
            .iter()
            .filter_map(|f| f.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A user's tasting review of one spirit. Exists only attached to a
/// cellar entry; created and updated by the reviewing action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating_nose: f32,
    pub rating_palate: f32,
    pub rating_finish: f32,
    pub rating_overall: f32,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub nose_tags: Vec<String>,
    #[serde(default)]
    pub palate_tags: Vec<String>,
    #[serde(default)]
    pub finish_tags: Vec<String>,
    /// ISO-8601 timestamp of the last review edit.
    pub created_at: String,
}

impl Review {
    /// Overall rating derived from the three sub-ratings: plain mean,
    /// rounded to the nearest half star.
    pub fn overall_of(nose: f32, palate: f32, finish: f32) -> f32 {
        ((nose + palate + finish) / 3.0 * 2.0).round() / 2.0
    }

    pub fn new(nose: f32, palate: f32, finish: f32, created_at: impl Into<String>) -> Self {
        Self {
            rating_nose: nose,
            rating_palate: palate,
            rating_finish: finish,
            rating_overall: Self::overall_of(nose, palate, finish),
            comment: String::new(),
            nose_tags: Vec::new(),
            palate_tags: Vec::new(),
            finish_tags: Vec::new(),
            created_at: created_at.into(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_tags(
        mut self,
        nose: &[&str],
        palate: &[&str],
        finish: &[&str],
    ) -> Self {
        self.nose_tags = nose.iter().map(|t| t.to_string()).collect();
        self.palate_tags = palate.iter().map(|t| t.to_string()).collect();
        self.finish_tags = finish.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Whether any structured tag list is present.
    pub fn has_tags(&self) -> bool {
        !self.nose_tags.is_empty()
            || !self.palate_tags.is_empty()
            || !self.finish_tags.is_empty()
    }
}

/// One cellar entry: a bottle the user owns or wishes for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spirit {
    pub id: String,
    pub name: String,
    /// Exact-match category key; empty string means uncategorised.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub abv: f32,
    /// Wishlist entries never participate in any statistic.
    #[serde(default)]
    pub is_wishlist: bool,
    #[serde(default)]
    pub notes: Option<SensoryNotes>,
    #[serde(default)]
    pub review: Option<Review>,
}

impl Spirit {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        abv: f32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            subcategory: None,
            abv,
            is_wishlist: false,
            notes: None,
            review: None,
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_notes(mut self, notes: SensoryNotes) -> Self {
        self.notes = Some(notes);
        self
    }

    pub fn with_review(mut self, review: Review) -> Self {
        self.review = Some(review);
        self
    }

    pub fn wishlist(mut self) -> Self {
        self.is_wishlist = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_rating_rounds_to_half_star() {
        assert_eq!(Review::overall_of(4.0, 4.0, 4.0), 4.0);
        assert_eq!(Review::overall_of(4.0, 4.5, 4.5), 4.5);
        // mean 4.1666 -> 4.0
        assert_eq!(Review::overall_of(4.0, 4.0, 4.5), 4.0);
        assert_eq!(Review::overall_of(0.5, 0.5, 0.5), 0.5);
    }

    #[test]
    fn notes_flattened_skips_missing_fields() {
        let notes = SensoryNotes {
            tasting_note: Some("오크, 바닐라".into()),
            nose: None,
            palate: Some("부드러운".into()),
            finish: None,
        };
        assert_eq!(notes.flattened(), "오크, 바닐라, 부드러운");
    }

    #[test]
    fn review_has_tags() {
        let bare = Review::new(4.0, 4.0, 4.0, "2024-03-01T00:00:00Z");
        assert!(!bare.has_tags());
        let tagged = bare.with_tags(&["오크"], &[], &[]);
        assert!(tagged.has_tags());
    }

    #[test]
    fn spirit_json_uses_camel_case() {
        let s = Spirit::new("1", "화요", "소주", 41.0).wishlist();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"isWishlist\":true"));
        assert!(json.contains("\"category\":\"소주\""));
    }
}
