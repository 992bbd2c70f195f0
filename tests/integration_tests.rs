//! 통합 테스트 - 이름 분석부터 연습 문제까지

use std::io::Write;

use hangul_lesson::learning::{
    generate_learning_points, generate_practice_items, lessons_for_stage, next_lesson, stage,
    Level,
};
use hangul_lesson::roster::{Game, Roster, RosterError};
use hangul_lesson::{
    analyze, compose_syllable, decompose_syllable, explain, romanize, PhonemicComponents,
    SyllablePosition,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_decompose_first_syllable() {
    let ga = decompose_syllable('가').unwrap();
    assert_eq!((ga.lead(), ga.vowel(), ga.trail()), (0, 0, 0));
    assert_eq!(ga.lead_jamo(), Some('ㄱ'));
    assert_eq!(ga.vowel_jamo(), Some('ㅏ'));
}

#[test]
fn test_decompose_range_invariant() {
    assert!(decompose_syllable('A').is_none());
    assert!(decompose_syllable('ガ').is_none());
    assert!(decompose_syllable('\u{1100}').is_none()); // 조합형 초성 자모
    for c in ['가', '힣', '렌', '눈'] {
        let parts = decompose_syllable(c).unwrap();
        assert_eq!(compose_syllable(parts.lead(), parts.vowel(), parts.trail()), Some(c));
    }
}

#[test]
fn test_romanize_ga_initial() {
    let ga = PhonemicComponents::new(0, 0, 0).unwrap();
    assert_eq!(romanize(&ga, SyllablePosition::Initial), "ga");
}

#[test]
fn test_analyze_garen() {
    let analysis = analyze("가렌", "Garen");
    assert_eq!(analysis.syllables.len(), 2);
    assert_eq!(analysis.syllables[0].position, SyllablePosition::Initial);
    assert_eq!(analysis.syllables[1].position, SyllablePosition::Final);
    assert_eq!(analysis.full_romanization, "garen");
}

#[test]
fn test_single_syllable_quirk() {
    let analysis = analyze("눈", "Nunu");
    assert_eq!(analysis.syllables[0].position, SyllablePosition::Initial);
    // Initial이므로 받침 ㄴ이 생략됨
    assert_eq!(analysis.full_romanization, "nu");
}

#[test]
fn test_trail_depends_on_position() {
    // 마지막 음절 받침은 포함, 중간 음절 받침은 생략
    assert_eq!(analyze("브라움", "Braum").full_romanization, "beuraum");
    assert_eq!(analyze("말파이트", "Malphite").full_romanization, "mapaiteu");
    assert_eq!(analyze("드레이븐", "Draven").full_romanization, "deureibeun");
}

#[test]
fn test_explain_chain() {
    let analysis = analyze("나미", "Nami");
    let lines: Vec<String> = explain(&analysis).collect();
    assert_eq!(lines[0], "나미 → nami → Nami");
    assert_eq!(lines[1], "나 = ㄴ+ㅏ → na");
    assert_eq!(lines[2], "미 = ㅁ+ㅣ → mi");
}

#[test]
fn test_learning_points_for_name() {
    let points = generate_learning_points(&analyze("럭스", "Lux"), 3);
    assert_eq!(points[0].title, "Where ㄹ sits");
    assert!(points[0].description.contains("\"r\""));
}

#[test]
fn test_roster_file_to_practice() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{ "id": "Garen", "nameKo": "가렌", "nameEn": "Garen", "nameJa": "ガレン", "game": "lol" }},
            {{ "id": "Lux", "nameKo": "럭스", "nameEn": "Lux", "nameJa": "ラックス", "game": "lol" }},
            {{ "id": "Aya", "nameKo": "아야", "nameEn": "Aya", "nameJa": "アヤ", "game": "eternal-return" }}
        ]"#
    )
    .unwrap();

    let roster = Roster::load(file.path()).unwrap();
    assert_eq!(roster.len(), 3);
    assert_eq!(roster.by_game(Game::EternalReturn).len(), 1);

    let stage = stage("stage-1").unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let items = generate_practice_items(&roster, &stage.focus_areas, Level::Beginner, 4, &mut rng);
    assert_eq!(items.len(), 4);
    // 아야는 stage-1 자음이 없음
    assert!(items.iter().all(|i| i.character_name != "아야"));
}

#[test]
fn test_learning_points_zero_max() {
    assert!(generate_learning_points(&analyze("럭스", "Lux"), 0).is_empty());
}

#[test]
fn test_stage_lessons_with_roster_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{ "id": "Nami", "nameKo": "나미", "nameEn": "Nami", "nameJa": "ナミ", "game": "lol" }},
            {{ "id": "Sona", "nameKo": "소나", "nameEn": "Sona", "nameJa": "ソナ", "game": "lol" }}
        ]"#
    )
    .unwrap();
    let roster = Roster::load(file.path()).unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let lessons = lessons_for_stage("stage-1", &roster, &mut rng);
    assert_eq!(lessons.len(), 3);
    assert_eq!(lessons[0].module.title, "Basic consonants: ㄱ ㄴ ㄷ");
    assert!(lessons.iter().all(|l| l.practice_items.len() == 5));

    // 내용이 없는 스테이지와 없는 스테이지
    assert!(lessons_for_stage("stage-3", &roster, &mut rng).is_empty());
    assert!(lessons_for_stage("nope", &roster, &mut rng).is_empty());

    let done: Vec<&str> = lessons.iter().take(2).map(|l| l.module.id).collect();
    assert_eq!(next_lesson(&done, Level::Beginner).map(|m| m.id), Some("module-1-3"));
}

#[test]
fn test_roster_file_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(matches!(Roster::load(file.path()), Err(RosterError::ParseError(_))));
}
