//! Sample cellar used by the demo binary and pipeline tests.

use super::{Review, SensoryNotes, Spirit};

fn notes(tasting_note: &str, nose: &str, palate: &str, finish: &str) -> SensoryNotes {
    let field = |s: &str| {
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    };
    SensoryNotes {
        tasting_note: field(tasting_note),
        nose: field(nose),
        palate: field(palate),
        finish: field(finish),
    }
}

/// A small but varied collection: four categories, one reviewed bottle
/// with structured tags, and one wishlist entry that must never show up
/// in any statistic.
pub fn sample_cellar() -> Vec<Spirit> {
    vec![
        Spirit::new("1", "달홀진주25", "소주", 25.0)
            .with_subcategory("증류식 소주")
            .with_notes(notes(
                "깔끔한, 부드러운, 곡물향",
                "곡물향, 바닐라",
                "부드러운, 깔끔한, 미네랄",
                "긴여운, 곡물향",
            )),
        Spirit::new("2", "화요", "소주", 41.0)
            .with_subcategory("증류식 소주")
            .with_notes(notes(
                "스파이시한, 곡물향, 강렬한",
                "곡물향, 후추",
                "스파이시한, 강렬한",
                "긴여운, 따뜻한",
            )),
        Spirit::new("3", "문배주", "전통주", 40.0)
            .with_subcategory("증류식 소주")
            .with_notes(notes(
                "과일향, 달콤한, 부드러운",
                "배향, 과일향",
                "달콤한, 부드러운",
                "깔끔한",
            )),
        Spirit::new("4", "Hibiki Harmony", "위스키", 43.0)
            .with_subcategory("Japanese Whisky")
            .with_notes(notes(
                "플로랄, 허니, 부드러운",
                "플로랄, 꿀향",
                "부드러운, 달콤한, 복합적",
                "긴여운, 우아한",
            )),
        // Reviewed bottle: structured tags take precedence over the notes.
        Spirit::new("5", "Glenfiddich 12", "위스키", 40.0)
            .with_subcategory("Single Malt Scotch")
            .with_notes(notes(
                "오크, 바닐라, 부드러운",
                "사과, 배향, 오크",
                "바닐라, 부드러운, 크리미한",
                "긴여운, 오크",
            ))
            .with_review(
                Review::new(4.0, 4.5, 4.0, "2024-05-12T09:30:00Z")
                    .with_comment("데일리로 딱 좋은 밸런스")
                    .with_tags(
                        &["오크", "바닐라"],
                        &["부드러운", "바닐라"],
                        &["오크", "긴여운"],
                    ),
            ),
        Spirit::new("6", "Jameson Irish Whiskey", "위스키", 40.0)
            .with_subcategory("Irish Whiskey")
            .with_notes(notes(
                "스무스, 과일향, 부드러운",
                "바닐라, 과일향",
                "스무스, 부드러운, 곡물향",
                "깔끔한, 부드러운",
            )),
        Spirit::new("7", "안동소주", "전통주", 45.0)
            .with_subcategory("증류식 소주")
            .with_notes(notes(
                "전통적인, 강렬한, 곡물향",
                "곡물향, 발효향",
                "강렬한, 깔끔한",
                "긴여운, 따뜻한",
            )),
        Spirit::new("8", "Hendrick's Gin", "일반증류주", 44.0)
            .with_subcategory("Gin")
            .with_notes(notes(
                "큐컴버, 로즈, 플로랄",
                "큐컴버, 장미향",
                "플로랄, 부드러운, 신선한",
                "깔끔한, 상쾌한",
            )),
        // Wishlist only: rich notes, zero statistical weight.
        Spirit::new("9", "Lagavulin 16", "위스키", 43.0)
            .with_subcategory("Islay Single Malt")
            .with_notes(notes(
                "스모키, 피트, 요오드",
                "스모키, 해풍",
                "피트, 달콤한",
                "긴여운, 스모키",
            ))
            .wishlist(),
    ]
}
