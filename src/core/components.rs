//! 음절 구성 요소와 단어 내 위치

use serde::Serialize;

use crate::core::unicode::{
    choseong_to_jamo_char, jongseong_to_jamo_char, jungseong_to_jamo_char, CHOSEONG_COUNT,
    JONGSEONG_COUNT, JUNGSEONG_COUNT,
};

/// 완성형 음절 하나의 초성/중성/종성 인덱스
///
/// 인덱스 순서 (유니코드 표준 자모 순서):
/// - 초성 (19개): ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
///   ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
/// - 중성 (21개): ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
///   ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
/// - 종성 (28개, 0 = 없음): ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
///   ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
///   ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PhonemicComponents {
    lead: u32,
    vowel: u32,
    trail: u32,
}

impl PhonemicComponents {
    /// 인덱스 범위를 검사하여 생성 (범위 밖이면 None)
    pub fn new(lead: u32, vowel: u32, trail: u32) -> Option<Self> {
        if lead >= CHOSEONG_COUNT || vowel >= JUNGSEONG_COUNT || trail >= JONGSEONG_COUNT {
            return None;
        }
        Some(Self { lead, vowel, trail })
    }

    /// 초성 인덱스 (0~18)
    pub fn lead(&self) -> u32 {
        self.lead
    }

    /// 중성 인덱스 (0~20)
    pub fn vowel(&self) -> u32 {
        self.vowel
    }

    /// 종성 인덱스 (0~27, 0 = 없음)
    pub fn trail(&self) -> u32 {
        self.trail
    }

    /// 종성이 있는지 확인
    pub fn has_trail(&self) -> bool {
        self.trail != 0
    }

    pub fn lead_jamo(&self) -> Option<char> {
        choseong_to_jamo_char(self.lead)
    }

    pub fn vowel_jamo(&self) -> Option<char> {
        jungseong_to_jamo_char(self.vowel)
    }

    pub fn trail_jamo(&self) -> Option<char> {
        jongseong_to_jamo_char(self.trail)
    }
}

/// 단어 안에서 음절의 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyllablePosition {
    /// 첫 음절
    Initial,
    /// 첫 음절과 마지막 음절 사이
    Medial,
    /// 마지막 음절
    Final,
}

impl SyllablePosition {
    /// 위치 판정
    ///
    /// 첫 번째 조건이 우선한다: 한 글자 단어의 유일한 음절은 마지막이기도 하지만
    /// `Initial`로 분류된다.
    pub fn classify(index: usize, len: usize) -> Self {
        if index == 0 {
            SyllablePosition::Initial
        } else if index + 1 == len {
            SyllablePosition::Final
        } else {
            SyllablePosition::Medial
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyllablePosition::Initial => "initial",
            SyllablePosition::Medial => "medial",
            SyllablePosition::Final => "final",
        }
    }
}

impl std::fmt::Display for SyllablePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
