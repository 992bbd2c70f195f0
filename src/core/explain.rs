//! 분석 결과를 사람이 읽는 설명 줄로 변환

use crate::core::analyzer::{NameAnalysis, SyllableBreakdown};

/// 분석 결과 설명 줄 생성
///
/// 첫 줄은 전체 변환 과정 (`가렌 → garen → Garen`),
/// 이후 음절마다 한 줄 (`렌 = ㄹ+ㅔ+ㄴ → ren`)을 순서대로 내놓는다.
pub fn explain(analysis: &NameAnalysis) -> impl Iterator<Item = String> + '_ {
    let overview = format!(
        "{} → {} → {}",
        analysis.hangul, analysis.full_romanization, analysis.reference
    );
    std::iter::once(overview).chain(analysis.syllables.iter().map(describe_syllable))
}

fn describe_syllable(row: &SyllableBreakdown) -> String {
    let parts = &row.components;
    let mut line = String::new();
    line.push(row.syllable);
    line.push_str(" = ");
    if let Some(lead) = parts.lead_jamo() {
        line.push(lead);
    }
    line.push('+');
    if let Some(vowel) = parts.vowel_jamo() {
        line.push(vowel);
    }
    if let Some(trail) = parts.trail_jamo() {
        line.push('+');
        line.push(trail);
    }
    line.push_str(" → ");
    line.push_str(&row.romanization);
    line
}
