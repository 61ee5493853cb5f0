//! Taste persona synthesis: fixed rule tables keyed by the dominant
//! category and the single top flavor keyword. Tables exist in Korean
//! and English; anything beyond this two-language lookup is out of scope.

use serde::{Deserialize, Serialize};

/// Persona table language. Category and keyword keys stay in the
/// catalog's source language; only the output phrases switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Korean,
    English,
}

const CATEGORY_BASES_KO: &[(&str, &str)] = &[
    ("소주", "전통 증류주 마니아"),
    ("위스키", "세련된 위스키 애호가"),
    ("전통주", "한국 전통주 수호자"),
    ("일반증류주", "글로벌 스피릿 컬렉터"),
    ("탁주", "전통 발효주 마스터"),
];

const CATEGORY_BASES_EN: &[(&str, &str)] = &[
    ("소주", "distilled soju devotee"),
    ("위스키", "refined whisky connoisseur"),
    ("전통주", "guardian of Korean traditional liquor"),
    ("일반증류주", "global spirits collector"),
    ("탁주", "master of traditional brews"),
];

const FLAVOR_MODIFIERS_KO: &[(&str, &str)] = &[
    ("부드러운", "부드러움을 추구하는"),
    ("깔끔한", "깔끔함을 선호하는"),
    ("곡물향", "곡물향 애호가인"),
    ("과일향", "프루티한 향을 사랑하는"),
    ("스파이시한", "강렬한 맛을 즐기는"),
    ("플로랄", "꽃향기를 좋아하는"),
    ("달콤한", "달콤함을 선호하는"),
    ("강렬한", "진한 풍미를 찾는"),
];

const FLAVOR_MODIFIERS_EN: &[(&str, &str)] = &[
    ("부드러운", "smoothness-seeking"),
    ("깔끔한", "clean-palate"),
    ("곡물향", "grain-loving"),
    ("과일향", "fruit-forward"),
    ("스파이시한", "bold-flavor"),
    ("플로랄", "floral-leaning"),
    ("달콤한", "sweet-toothed"),
    ("강렬한", "intensity-chasing"),
];

const FALLBACK_BASE_KO: &str = "다양한 술을 즐기는 애호가";
const FALLBACK_BASE_EN: &str = "all-round spirits enthusiast";

const EXPLORER_KO: &str = "술을 사랑하는 탐험가";
const EXPLORER_EN: &str = "spirit-loving explorer";

const EMPTY_CELLAR_KO: &str = "아직 술장이 비어있습니다";
const EMPTY_CELLAR_EN: &str = "Your cellar is still empty";

fn lookup<'a>(table: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, phrase)| *phrase)
}

/// Fixed message used instead of a persona when nothing is owned.
pub fn empty_cellar(language: Language) -> &'static str {
    match language {
        Language::Korean => EMPTY_CELLAR_KO,
        Language::English => EMPTY_CELLAR_EN,
    }
}

/// Compose the persona label: `"{modifier} {base}"` when the top keyword
/// has a mapped modifier, the base phrase alone otherwise. Unmapped
/// categories fall back to a generic base. A collection that yields no
/// keywords at all gets a fixed explorer message before any lookup runs.
pub fn synthesize(
    dominant_category: &str,
    top_keyword: Option<&str>,
    language: Language,
) -> String {
    let (bases, modifiers, fallback, explorer) = match language {
        Language::Korean => (
            CATEGORY_BASES_KO,
            FLAVOR_MODIFIERS_KO,
            FALLBACK_BASE_KO,
            EXPLORER_KO,
        ),
        Language::English => (
            CATEGORY_BASES_EN,
            FLAVOR_MODIFIERS_EN,
            FALLBACK_BASE_EN,
            EXPLORER_EN,
        ),
    };

    let keyword = match top_keyword {
        Some(k) => k,
        None => return explorer.to_string(),
    };

    let base = lookup(bases, dominant_category).unwrap_or(fallback);
    match lookup(modifiers, keyword) {
        Some(m) => format!("{} {}", m, base),
        None => base.to_string(),
    }
}
