//! 학습 단계(스테이지)와 집중 학습 영역
//!
//! 6개 스테이지가 고정되어 있으며 각 스테이지는 레벨과 집중 영역을 가진다.
//! 집중 영역은 이름 목록에서 연습 대상 캐릭터를 고르는 데 쓰인다.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::core::unicode::decompose_syllable;

/// 학습 레벨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Master,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
            Level::Master => "master",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Some(Level::Beginner),
            "intermediate" => Some(Level::Intermediate),
            "advanced" => Some(Level::Advanced),
            "master" => Some(Level::Master),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 집중 영역 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusKind {
    Consonants,
    Vowels,
    Finals,
    SoundChanges,
    Practice,
}

/// 집중 학습 영역
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    pub kind: FocusKind,
    /// 호환용 자모 목록 (예: ㄱ, ㅏ)
    #[serde(default)]
    pub characters: Vec<char>,
    /// 음운 변화 규칙 이름 (SoundChanges 전용)
    #[serde(default)]
    pub rules: Vec<String>,
}

impl FocusArea {
    pub fn new(kind: FocusKind, characters: &[char]) -> Self {
        Self {
            kind,
            characters: characters.to_vec(),
            rules: Vec::new(),
        }
    }

    pub fn with_rules(kind: FocusKind, rules: &[&str]) -> Self {
        Self {
            kind,
            characters: Vec::new(),
            rules: rules.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// 커리큘럼 스테이지
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurriculumStage {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub level: Level,
    pub modules: &'static [&'static str],
    pub prerequisites: &'static [&'static str],
    pub focus_areas: Vec<FocusArea>,
}

lazy_static! {
    static ref CURRICULUM: Vec<CurriculumStage> = vec![
        CurriculumStage {
            id: "stage-1",
            name: "Basic consonants",
            description: "The basic consonants ㄱ ㄴ ㄷ ㄹ ㅁ ㅂ ㅅ",
            level: Level::Beginner,
            modules: &["module-1-1", "module-1-2", "module-1-3"],
            prerequisites: &[],
            focus_areas: vec![FocusArea::new(
                FocusKind::Consonants,
                &['ㄱ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅅ'],
            )],
        },
        CurriculumStage {
            id: "stage-2",
            name: "Basic vowels",
            description: "The basic vowels ㅏ ㅓ ㅗ ㅜ ㅡ ㅣ",
            level: Level::Beginner,
            modules: &["module-2-1", "module-2-2", "module-2-3"],
            prerequisites: &["stage-1"],
            focus_areas: vec![FocusArea::new(
                FocusKind::Vowels,
                &['ㅏ', 'ㅓ', 'ㅗ', 'ㅜ', 'ㅡ', 'ㅣ'],
            )],
        },
        CurriculumStage {
            id: "stage-3",
            name: "Tense consonants and compound vowels",
            description: "Tense and aspirated consonants plus the compound vowels",
            level: Level::Intermediate,
            modules: &["module-3-1", "module-3-2", "module-3-3", "module-3-4"],
            prerequisites: &["stage-1", "stage-2"],
            focus_areas: vec![
                FocusArea::new(
                    FocusKind::Consonants,
                    &['ㄲ', 'ㄸ', 'ㅃ', 'ㅆ', 'ㅉ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅊ', 'ㅎ'],
                ),
                FocusArea::new(
                    FocusKind::Vowels,
                    &['ㅐ', 'ㅔ', 'ㅒ', 'ㅖ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅢ'],
                ),
            ],
        },
        CurriculumStage {
            id: "stage-4",
            name: "Final consonants (batchim)",
            description: "How syllable-final consonants are pronounced",
            level: Level::Intermediate,
            modules: &["module-4-1", "module-4-2", "module-4-3"],
            prerequisites: &["stage-3"],
            focus_areas: vec![FocusArea::new(
                FocusKind::Finals,
                &['ㄱ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅇ', 'ㄲ', 'ㅆ'],
            )],
        },
        CurriculumStage {
            id: "stage-5",
            name: "Sound change rules",
            description: "Practical sound changes for natural pronunciation",
            level: Level::Advanced,
            modules: &["module-5-1", "module-5-2", "module-5-3", "module-5-4"],
            prerequisites: &["stage-4"],
            focus_areas: vec![FocusArea::with_rules(
                FocusKind::SoundChanges,
                &[
                    "liaison",
                    "aspiration",
                    "tensification",
                    "nasalization",
                    "h-weakening",
                    "palatalization",
                ],
            )],
        },
        CurriculumStage {
            id: "stage-6",
            name: "Applied practice",
            description: "Mixed practice over every character name",
            level: Level::Master,
            modules: &["module-6-1", "module-6-2", "module-6-3"],
            prerequisites: &["stage-5"],
            focus_areas: vec![FocusArea::new(FocusKind::Practice, &[])],
        },
    ];
}

/// 전체 커리큘럼 (스테이지 순서대로)
pub fn curriculum() -> &'static [CurriculumStage] {
    &CURRICULUM
}

/// ID로 스테이지 조회
pub fn stage(id: &str) -> Option<&'static CurriculumStage> {
    CURRICULUM.iter().find(|s| s.id == id)
}

/// 레벨별 연습 문제 수
pub fn practice_count(level: Level) -> usize {
    match level {
        Level::Beginner => 5,
        Level::Intermediate => 8,
        Level::Advanced => 10,
        Level::Master => 12,
    }
}

/// 한글 이름이 집중 영역에 해당하는지 판정
///
/// 자음/모음/받침 영역은 목록의 자모가 하나라도 나오면 해당.
/// 목록이 비었거나 다른 종류의 영역은 항상 해당.
pub fn matches_focus(hangul: &str, area: &FocusArea) -> bool {
    if area.characters.is_empty() {
        return true;
    }

    let parts: Vec<_> = hangul.chars().filter_map(decompose_syllable).collect();
    let listed = |c: Option<char>| c.is_some_and(|c| area.characters.contains(&c));

    match area.kind {
        FocusKind::Consonants => parts.iter().any(|p| listed(p.lead_jamo())),
        FocusKind::Vowels => parts.iter().any(|p| listed(p.vowel_jamo())),
        FocusKind::Finals => parts.iter().any(|p| listed(p.trail_jamo())),
        FocusKind::SoundChanges | FocusKind::Practice => true,
    }
}
