//! 이름 분석 결과에서 학습 포인트 도출

use serde::Serialize;

use crate::core::analyzer::{NameAnalysis, SyllableBreakdown};
use crate::core::components::SyllablePosition;

/// 학습 포인트 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Consonant,
    Vowel,
    Special,
    Pattern,
}

/// 학습 포인트 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPoint {
    pub kind: PointKind,
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

impl LearningPoint {
    fn new(kind: PointKind, title: &str, description: String, example: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description,
            examples: vec![example],
        }
    }
}

/// 학습 포인트 생성
///
/// 음절마다 규칙을 적용해 포인트를 모은 뒤 제목 기준으로 중복을 제거하고
/// `max`개까지만 남긴다. 규칙에 걸린 것이 없으면 일반 포인트 하나로 대신한다.
pub fn generate_learning_points(analysis: &NameAnalysis, max: usize) -> Vec<LearningPoint> {
    let reference = analysis.reference.to_lowercase();
    let mut points = Vec::new();

    for row in &analysis.syllables {
        consonant_points(row, &mut points);
        vowel_points(row, analysis, &reference, &mut points);
        final_points(row, &mut points);
    }

    let mut unique: Vec<LearningPoint> = Vec::with_capacity(points.len());
    for point in points {
        if !unique.iter().any(|p| p.title == point.title) {
            unique.push(point);
        }
    }

    if unique.is_empty() {
        unique.push(LearningPoint::new(
            PointKind::Pattern,
            "Basic sound pattern",
            "This name follows the basic Korean sound rules".to_string(),
            format!("{} → {}", analysis.full_romanization, analysis.reference),
        ));
    }

    unique.truncate(max);
    unique
}

fn example(row: &SyllableBreakdown) -> String {
    format!("{} → {}", row.syllable, row.romanization)
}

/// 초성 ㄱ/ㄷ/ㄹ의 위치별 발음
fn consonant_points(row: &SyllableBreakdown, points: &mut Vec<LearningPoint>) {
    let roman = row.romanization.as_str();

    match row.components.lead_jamo() {
        Some('ㄱ') => {
            if row.position == SyllablePosition::Initial && roman.starts_with('g') {
                points.push(LearningPoint::new(
                    PointKind::Consonant,
                    "ㄱ at the start of a word",
                    format!(
                        "The ㄱ in \"{}\" is pronounced \"g\" at the start of a word",
                        row.syllable
                    ),
                    example(row),
                ));
            } else if row.position == SyllablePosition::Final && roman.contains('k') {
                points.push(LearningPoint::new(
                    PointKind::Consonant,
                    "ㄱ at the end of a word",
                    "ㄱ at the end of a word is pronounced \"k\"".to_string(),
                    example(row),
                ));
            }
        }
        Some('ㄷ') => {
            if row.position == SyllablePosition::Initial && roman.starts_with('d') {
                points.push(LearningPoint::new(
                    PointKind::Consonant,
                    "ㄷ at the start of a word",
                    format!(
                        "The ㄷ in \"{}\" is pronounced \"d\" at the start of a word",
                        row.syllable
                    ),
                    example(row),
                ));
            } else if roman.contains('t') {
                points.push(LearningPoint::new(
                    PointKind::Consonant,
                    "ㄷ at the end of a word",
                    "ㄷ is pronounced \"t\" at the end of a word or before another consonant"
                        .to_string(),
                    example(row),
                ));
            }
        }
        Some('ㄹ') => {
            let description = match row.position {
                SyllablePosition::Initial => format!(
                    "The ㄹ in \"{}\" is pronounced \"r\" at the start of a word",
                    row.syllable
                ),
                SyllablePosition::Final => {
                    "ㄹ at the end of a word is pronounced \"l\"".to_string()
                }
                SyllablePosition::Medial => "ㄹ inside a word is pronounced \"r\"".to_string(),
            };
            points.push(LearningPoint::new(
                PointKind::Special,
                "Where ㄹ sits",
                description,
                example(row),
            ));
        }
        _ => {}
    }
}

/// 모음이 영어 이름에서 어떻게 표기되는지
fn vowel_points(
    row: &SyllableBreakdown,
    analysis: &NameAnalysis,
    reference: &str,
    points: &mut Vec<LearningPoint>,
) {
    match row.components.vowel_jamo() {
        Some('ㅓ') if reference.contains('e') => points.push(LearningPoint::new(
            PointKind::Vowel,
            "ㅓ in English spelling",
            format!(
                "The ㅓ in \"{}\" is often written as a plain \"e\" in the English name",
                row.syllable
            ),
            format!("{} → {}", analysis.full_romanization, analysis.reference),
        )),
        Some('ㅗ') if reference.contains('o') => points.push(LearningPoint::new(
            PointKind::Vowel,
            "Pronouncing ㅗ",
            format!("The ㅗ in \"{}\" is pronounced \"o\"", row.syllable),
            example(row),
        )),
        Some('ㅜ') if reference.contains('u') => points.push(LearningPoint::new(
            PointKind::Vowel,
            "Pronouncing ㅜ",
            format!("The ㅜ in \"{}\" is pronounced \"u\"", row.syllable),
            example(row),
        )),
        _ => {}
    }
}

/// 받침 (음절 끝 자음)
fn final_points(row: &SyllableBreakdown, points: &mut Vec<LearningPoint>) {
    let (title, description) = match row.components.trail_jamo() {
        Some('ㄴ') => (
            "Final ㄴ",
            format!(
                "The syllable-final ㄴ in \"{}\" is pronounced \"n\"; unlike Japanese, a Korean syllable can end in a consonant",
                row.syllable
            ),
        ),
        Some('ㅁ') => (
            "Final ㅁ",
            format!("The syllable-final ㅁ in \"{}\" is pronounced \"m\"", row.syllable),
        ),
        Some('ㄱ') => (
            "Final ㄱ",
            format!("The syllable-final ㄱ in \"{}\" is pronounced \"k\"", row.syllable),
        ),
        Some('ㅇ') => (
            "Final ㅇ",
            format!("The syllable-final ㅇ in \"{}\" is pronounced \"ng\"", row.syllable),
        ),
        _ => return,
    };

    points.push(LearningPoint::new(PointKind::Pattern, title, description, example(row)));
}
