//! 캐릭터 이름 전체 분석
//!
//! 한글 이름을 음절 단위로 분해하고, 각 음절의 위치를 판정한 뒤
//! 로마자 조각을 이어 붙여 전체 로마자 표기를 만든다.

use serde::Serialize;

use crate::core::components::{PhonemicComponents, SyllablePosition};
use crate::core::romanizer::romanize;
use crate::core::unicode::decompose_syllable;

/// 음절 하나의 분석 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableBreakdown {
    /// 원래 음절 문자
    pub syllable: char,
    /// 초성/중성/종성
    pub components: PhonemicComponents,
    /// 위치 규칙을 적용한 로마자 조각
    pub romanization: String,
    /// 단어 내 위치
    pub position: SyllablePosition,
}

/// 이름 하나의 분석 결과
///
/// 두 입력 문자열로부터 매번 새로 계산되는 읽기 전용 값이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameAnalysis {
    /// 한글 이름 (예: "가렌")
    pub hangul: String,
    /// 라틴 문자 참조 이름 (예: "Garen")
    pub reference: String,
    /// 한글 음절별 분석 (한글이 아닌 문자는 제외됨)
    pub syllables: Vec<SyllableBreakdown>,
    /// 모든 음절 로마자를 구분자 없이 이어 붙인 문자열
    pub full_romanization: String,
}

impl NameAnalysis {
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// 한글 음절이 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

/// 한글 이름 분석
///
/// 위치는 입력의 모든 문자(공백, 영문 포함)를 기준으로 판정하고,
/// 완성형 한글이 아닌 문자는 행을 만들지 않고 건너뛴다. 실패하지 않는다.
pub fn analyze(hangul: &str, reference: &str) -> NameAnalysis {
    let chars: Vec<char> = hangul.chars().collect();
    let len = chars.len();
    let mut syllables = Vec::with_capacity(len);

    for (index, &c) in chars.iter().enumerate() {
        let Some(components) = decompose_syllable(c) else {
            log::debug!("한글 음절이 아님, 건너뜀: {:?} ({})", c, hangul);
            continue;
        };

        let position = SyllablePosition::classify(index, len);
        let romanization = romanize(&components, position);

        syllables.push(SyllableBreakdown {
            syllable: c,
            components,
            romanization,
            position,
        });
    }

    let full_romanization = syllables
        .iter()
        .map(|s| s.romanization.as_str())
        .collect::<String>();

    NameAnalysis {
        hangul: hangul.to_string(),
        reference: reference.to_string(),
        syllables,
        full_romanization,
    }
}
