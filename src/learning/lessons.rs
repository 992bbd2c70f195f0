//! 스테이지별 레슨 모듈
//!
//! 스테이지의 `modules` ID를 레슨 내용으로 풀어내고, 스테이지 집중 영역으로
//! 연습 문제를 붙인다. 내용이 준비되지 않은 모듈 ID는 건너뛴다.

use lazy_static::lazy_static;
use rand::Rng;
use serde::Serialize;

use crate::learning::curriculum::{stage, CurriculumStage, Level};
use crate::learning::practice::{generate_practice_items, PracticeItem};
use crate::roster::Roster;

/// 설명에 붙는 예시 이름
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonExample {
    pub korean: &'static str,
    pub romanization: &'static str,
    /// 일본어 표기
    pub meaning: &'static str,
}

/// 레슨 본문 한 토막
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonContent {
    pub title: &'static str,
    pub body: &'static str,
    pub examples: &'static [LessonExample],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonModule {
    pub id: &'static str,
    pub level: Level,
    /// 소속 스테이지 번호 (1부터)
    pub stage: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub objectives: &'static [&'static str],
    pub content: &'static [LessonContent],
    /// 통과 기준 점수 (%)
    pub required_score: u8,
    pub estimated_minutes: u32,
}

/// 연습 문제가 붙은 레슨
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub module: &'static LessonModule,
    pub practice_items: Vec<PracticeItem>,
}

macro_rules! example {
    ($ko:expr, $roman:expr, $ja:expr) => {
        LessonExample {
            korean: $ko,
            romanization: $roman,
            meaning: $ja,
        }
    };
}

lazy_static! {
    // 모듈 ID 순서가 next_lesson의 탐색 순서
    static ref LESSON_MODULES: Vec<LessonModule> = vec![
        LessonModule {
            id: "module-1-1",
            level: Level::Beginner,
            stage: 1,
            title: "Basic consonants: ㄱ ㄴ ㄷ",
            description: "The three most basic consonants",
            objectives: &[
                "Understand the sound of ㄱ (g/k)",
                "Understand the sound of ㄴ (n)",
                "Understand the sound of ㄷ (d/t)",
                "Recognize character names that use these consonants",
            ],
            content: &[
                LessonContent {
                    title: "ㄱ (giyeok)",
                    body: "Close to English g/k. It sounds like \"g\" at the start of a word and \"k\" inside one.",
                    examples: &[
                        example!("가렌", "Garen", "ガレン"),
                        example!("갱플랭크", "Gangplank", "ガングプランク"),
                    ],
                },
                LessonContent {
                    title: "ㄴ (nieun)",
                    body: "The same sound as English \"n\".",
                    examples: &[
                        example!("나미", "Nami", "ナミ"),
                        example!("누누", "Nunu", "ヌヌ"),
                    ],
                },
                LessonContent {
                    title: "ㄷ (digeut)",
                    body: "Close to English d/t. It sounds like \"d\" at the start of a word and \"t\" inside one.",
                    examples: &[
                        example!("다리우스", "Darius", "ダリウス"),
                        example!("드레이븐", "Draven", "ドレイヴン"),
                    ],
                },
            ],
            required_score: 80,
            estimated_minutes: 15,
        },
        LessonModule {
            id: "module-1-2",
            level: Level::Beginner,
            stage: 1,
            title: "Basic consonants: ㄹ ㅁ",
            description: "The liquid and the nasal",
            objectives: &[
                "Understand the sound of ㄹ (r/l)",
                "Understand the sound of ㅁ (m)",
                "Recognize character names that use these consonants",
            ],
            content: &[
                LessonContent {
                    title: "ㄹ (rieul)",
                    body: "Close to the Japanese ra-row. It sounds like \"r\" at the start of a word and \"l\" inside one.",
                    examples: &[
                        example!("럭스", "Lux", "ラックス"),
                        example!("리븐", "Riven", "リヴェン"),
                        example!("렐", "Rell", "レル"),
                    ],
                },
                LessonContent {
                    title: "ㅁ (mieum)",
                    body: "The same sound as English \"m\".",
                    examples: &[
                        example!("마스터 이", "Master Yi", "マスター・イー"),
                        example!("모르가나", "Morgana", "モルガナ"),
                        example!("말파이트", "Malphite", "マルファイト"),
                    ],
                },
            ],
            required_score: 80,
            estimated_minutes: 10,
        },
        LessonModule {
            id: "module-1-3",
            level: Level::Beginner,
            stage: 1,
            title: "Basic consonants: ㅂ ㅅ",
            description: "The labial and the fricative",
            objectives: &[
                "Understand the sound of ㅂ (b/p)",
                "Understand the sound of ㅅ (s)",
                "Recognize character names that use these consonants",
            ],
            content: &[
                LessonContent {
                    title: "ㅂ (bieup)",
                    body: "Close to English b/p. It sounds like \"b\" at the start of a word and \"p\" inside one.",
                    examples: &[
                        example!("브라움", "Braum", "ブラウム"),
                        example!("바이", "Vi", "ヴァイ"),
                        example!("베인", "Vayne", "ヴェイン"),
                    ],
                },
                LessonContent {
                    title: "ㅅ (siot)",
                    body: "The English \"s\" sound. Before the vowel ㅣ it can sound like \"sh\".",
                    examples: &[
                        example!("소나", "Sona", "ソナ"),
                        example!("세트", "Sett", "セト"),
                        example!("시비르", "Sivir", "シヴィア"),
                    ],
                },
            ],
            required_score: 80,
            estimated_minutes: 10,
        },
    ];
}

/// 내용이 준비된 전체 레슨 모듈
pub fn lesson_modules() -> &'static [LessonModule] {
    &LESSON_MODULES
}

/// ID로 레슨 모듈 조회
pub fn lesson_module(id: &str) -> Option<&'static LessonModule> {
    LESSON_MODULES.iter().find(|m| m.id == id)
}

/// 레슨 하나에 붙는 연습 문제 수
fn lesson_practice_count(level: Level) -> usize {
    if level == Level::Beginner {
        5
    } else {
        8
    }
}

/// 스테이지의 레슨 목록 (없는 스테이지면 빈 목록)
pub fn lessons_for_stage<R: Rng + ?Sized>(
    stage_id: &str,
    roster: &Roster,
    rng: &mut R,
) -> Vec<Lesson> {
    match stage(stage_id) {
        Some(s) => build_lessons(s, roster, rng),
        None => {
            log::debug!("알 수 없는 스테이지: {}", stage_id);
            Vec::new()
        }
    }
}

fn build_lessons<R: Rng + ?Sized>(
    stage: &CurriculumStage,
    roster: &Roster,
    rng: &mut R,
) -> Vec<Lesson> {
    stage
        .modules
        .iter()
        .filter_map(|id| {
            let module = lesson_module(id);
            if module.is_none() {
                log::debug!("레슨 내용 없음, 건너뜀: {}", id);
            }
            module
        })
        .map(|module| Lesson {
            module,
            practice_items: generate_practice_items(
                roster,
                &stage.focus_areas,
                module.level,
                lesson_practice_count(module.level),
                rng,
            ),
        })
        .collect()
}

/// 아직 끝내지 않은 같은 레벨의 첫 레슨
pub fn next_lesson(completed: &[&str], level: Level) -> Option<&'static LessonModule> {
    LESSON_MODULES
        .iter()
        .find(|m| m.level == level && !completed.contains(&m.id))
}
