//! Sensory keyword extraction for one cellar entry.
//!
//! Structured review tags are the preferred source; the legacy flattened
//! note fields are the fallback. Tokens keep their exact spelling (no
//! stemming, no case folding), so distinct spellings stay distinct
//! keywords. Duplicates are kept; the ranker counts them.

use crate::cellar::Spirit;

/// Extract the ordered token multiset from one spirit's sensory text.
///
/// Splits on any run of comma, whitespace, or `#` characters and drops
/// empty fragments. A spirit with no sensory text yields no tokens.
pub fn tokens(spirit: &Spirit) -> Vec<String> {
    split_tokens(&sensory_text(spirit))
}

/// Split free-form sensory text into trimmed, non-empty tokens.
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c == '#' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Pick the sensory source for one spirit.
///
/// Review tag lists win when any is non-empty: all three are unioned in
/// nose/palate/finish order without de-duplication. Otherwise the legacy
/// flattened note fields are joined as one string.
fn sensory_text(spirit: &Spirit) -> String {
    if let Some(review) = &spirit.review {
        if review.has_tags() {
            return review
                .nose_tags
                .iter()
                .chain(review.palate_tags.iter())
                .chain(review.finish_tags.iter())
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
        }
    }
    match &spirit.notes {
        Some(notes) => notes.flattened(),
        None => String::new(),
    }
}
