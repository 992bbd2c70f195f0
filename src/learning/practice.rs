//! 캐릭터 이름으로 연습 문제 생성

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::learning::curriculum::{matches_focus, FocusArea, Level};
use crate::roster::{Character, Roster};

/// 문제 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeKind {
    /// 한글 이름을 보고 읽기 고르기
    Recognition,
    /// 한글 이름 소리 내어 읽기
    Pronunciation,
    /// 영어 이름을 한글로 쓰기
    Writing,
    /// 들은 이름 고르기
    Listening,
}

/// 연습 문제 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticeItem {
    pub id: String,
    pub kind: PracticeKind,
    pub question: String,
    /// 문제 대상 한글 이름
    pub character_name: String,
    /// 객관식 보기 (Recognition/Listening만)
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    /// 1 (쉬움) ~ 4 (어려움)
    pub difficulty: u8,
}

/// 레벨별 출제 유형 (순서대로 돌아가며 배정)
pub fn kinds_for_level(level: Level) -> &'static [PracticeKind] {
    use PracticeKind::*;
    match level {
        Level::Beginner => &[Recognition],
        Level::Intermediate => &[Recognition, Pronunciation],
        Level::Advanced => &[Recognition, Pronunciation, Writing],
        Level::Master => &[Recognition, Pronunciation, Writing, Listening],
    }
}

/// 집중 영역 중 하나라도 해당하는 캐릭터 (ID 기준 중복 제거, 처음 순서 유지)
fn candidates<'a>(roster: &'a Roster, focus_areas: &[FocusArea]) -> Vec<&'a Character> {
    let mut seen = HashSet::new();
    focus_areas
        .iter()
        .flat_map(move |area| {
            roster
                .characters()
                .iter()
                .filter(move |c| matches_focus(&c.name_ko, area))
        })
        .filter(|c| seen.insert(c.id.as_str()))
        .collect()
}

/// 연습 문제 생성
///
/// 후보 캐릭터를 `count`개가 될 때까지 반복해 섞은 뒤 유형을 돌아가며 배정한다.
/// 후보가 없으면 빈 목록.
pub fn generate_practice_items<R: Rng + ?Sized>(
    roster: &Roster,
    focus_areas: &[FocusArea],
    level: Level,
    count: usize,
    rng: &mut R,
) -> Vec<PracticeItem> {
    let unique = candidates(roster, focus_areas);
    if unique.is_empty() || count == 0 {
        return Vec::new();
    }

    let times = count.div_ceil(unique.len());
    let mut pool: Vec<&Character> = Vec::with_capacity(times * unique.len());
    for _ in 0..times {
        pool.extend(unique.iter().copied());
    }
    pool.shuffle(rng);
    pool.truncate(count);

    log::debug!(
        "연습 문제 생성: 후보 {}명, {}문제, 레벨 {}",
        unique.len(),
        count,
        level
    );

    let kinds = kinds_for_level(level);
    let mut items: Vec<PracticeItem> = pool
        .iter()
        .enumerate()
        .map(|(i, character)| {
            let kind = kinds[i % kinds.len()];
            build_item(i, kind, character, &unique, level, rng)
        })
        .collect();

    items.shuffle(rng);
    items
}

fn build_item<R: Rng + ?Sized>(
    index: usize,
    kind: PracticeKind,
    character: &Character,
    unique: &[&Character],
    level: Level,
    rng: &mut R,
) -> PracticeItem {
    let id = format!("practice-{}", index);
    let others: Vec<&Character> = unique
        .iter()
        .copied()
        .filter(|c| c.id != character.id)
        .collect();

    match kind {
        PracticeKind::Recognition => {
            let mut wrong: Vec<&Character> = others;
            wrong.shuffle(rng);
            let mut options: Vec<String> = std::iter::once(character.name_ja.clone())
                .chain(wrong.iter().take(3).map(|c| c.name_ja.clone()))
                .collect();
            options.shuffle(rng);

            PracticeItem {
                id,
                kind,
                question: "How is this Korean name read?".to_string(),
                character_name: character.name_ko.clone(),
                options,
                correct_answer: character.name_ja.clone(),
                explanation: format!(
                    "\"{}\" is read \"{}\" ({}).",
                    character.name_ko, character.name_ja, character.name_en
                ),
                difficulty: match level {
                    Level::Beginner => 1,
                    Level::Intermediate => 2,
                    _ => 3,
                },
            }
        }
        PracticeKind::Pronunciation => PracticeItem {
            id,
            kind,
            question: "Pronounce this character name".to_string(),
            character_name: character.name_ko.clone(),
            options: Vec::new(),
            correct_answer: character.name_ja.clone(),
            explanation: format!("The correct pronunciation is \"{}\".", character.name_ja),
            difficulty: if level == Level::Intermediate { 2 } else { 3 },
        },
        PracticeKind::Writing => PracticeItem {
            id,
            kind,
            question: format!("Write \"{}\" in Korean", character.name_en),
            character_name: character.name_ko.clone(),
            options: Vec::new(),
            correct_answer: character.name_ko.clone(),
            explanation: format!(
                "\"{}\" is written \"{}\" in Korean.",
                character.name_en, character.name_ko
            ),
            difficulty: 3,
        },
        PracticeKind::Listening => {
            let mut options: Vec<String> = std::iter::once(character.name_ko.clone())
                .chain(others.iter().take(3).map(|c| c.name_ko.clone()))
                .collect();
            options.shuffle(rng);

            PracticeItem {
                id,
                kind,
                question: "Pick the character name you heard".to_string(),
                character_name: character.name_ko.clone(),
                options,
                correct_answer: character.name_ko.clone(),
                explanation: format!(
                    "The audio was \"{}\" ({} - {}).",
                    character.name_ko, character.name_ja, character.name_en
                ),
                difficulty: 4,
            }
        }
    }
}
