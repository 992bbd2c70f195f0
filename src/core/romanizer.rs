//! 음절 구성 요소 -> 로마자 변환
//!
//! 자음은 위치에 따라 소리가 달라지므로 (초성 ㄱ은 `g`, 받침 ㄱ은 `k`)
//! 자음 테이블은 초성형/받침형 두 열을 가진다.

use crate::core::components::{PhonemicComponents, SyllablePosition};
use crate::core::unicode::{cluster_representative, jongseong_to_choseong};

/// 자음 로마자 테이블 (초성 인덱스 순서): (초성형, 받침형)
#[rustfmt::skip]
const CONSONANT_ROMAN: [(&str, &str); 19] = [
    ("g", "k"),   // ㄱ
    ("kk", "k"),  // ㄲ
    ("n", "n"),   // ㄴ
    ("d", "t"),   // ㄷ
    ("tt", "t"),  // ㄸ
    ("r", "l"),   // ㄹ
    ("m", "m"),   // ㅁ
    ("b", "p"),   // ㅂ
    ("pp", "p"),  // ㅃ
    ("s", "t"),   // ㅅ
    ("ss", "t"),  // ㅆ
    ("", "ng"),   // ㅇ
    ("j", "t"),   // ㅈ
    ("jj", "t"),  // ㅉ
    ("ch", "t"),  // ㅊ
    ("k", "k"),   // ㅋ
    ("t", "t"),   // ㅌ
    ("p", "p"),   // ㅍ
    ("h", "t"),   // ㅎ
];

/// 모음 로마자 테이블 (중성 인덱스 순서)
#[rustfmt::skip]
const VOWEL_ROMAN: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa",
    "wae", "oe", "yo", "u", "wo", "we", "wi", "yu", "eu", "ui", "i",
];

/// 초성의 로마자 (초성형)
pub fn lead_roman(lead: u32) -> &'static str {
    CONSONANT_ROMAN
        .get(lead as usize)
        .map(|(initial, _)| *initial)
        .unwrap_or("")
}

/// 중성의 로마자
pub fn vowel_roman(vowel: u32) -> &'static str {
    VOWEL_ROMAN.get(vowel as usize).copied().unwrap_or("")
}

/// 종성의 로마자 (받침형)
///
/// 단일 종성은 같은 자음의 받침형을, 복합 종성은 대표음의 받침형을 쓴다.
/// 종성 없음(0)은 빈 문자열.
pub fn trail_roman(trail: u32) -> &'static str {
    jongseong_to_choseong(trail)
        .or_else(|| cluster_representative(trail))
        .and_then(|cho| CONSONANT_ROMAN.get(cho as usize))
        .map(|(_, fin)| *fin)
        .unwrap_or("")
}

/// 음절 하나를 로마자로 변환
///
/// 종성은 `Final` 위치에서만 붙는다. `Initial`/`Medial` 음절의 받침은
/// 연음을 처리하지 않고 그냥 생략한다 (학습용 근사치).
pub fn romanize(components: &PhonemicComponents, position: SyllablePosition) -> String {
    let mut result = String::with_capacity(6);
    result.push_str(lead_roman(components.lead()));
    result.push_str(vowel_roman(components.vowel()));

    if components.has_trail() && position == SyllablePosition::Final {
        result.push_str(trail_roman(components.trail()));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unicode::{decompose_syllable, HANGUL_SYLLABLE_BASE, HANGUL_SYLLABLE_LAST};

    fn syllable(c: char) -> PhonemicComponents {
        decompose_syllable(c).unwrap()
    }

    #[test]
    fn test_basic_romanization() {
        let ga = PhonemicComponents::new(0, 0, 0).unwrap();
        assert_eq!(romanize(&ga, SyllablePosition::Initial), "ga");
        assert_eq!(romanize(&syllable('나'), SyllablePosition::Initial), "na");
        assert_eq!(romanize(&syllable('미'), SyllablePosition::Final), "mi");
    }

    #[test]
    fn test_silent_ieung_lead() {
        // 초성 ㅇ은 소리 없음
        assert_eq!(romanize(&syllable('아'), SyllablePosition::Initial), "a");
        assert_eq!(romanize(&syllable('요'), SyllablePosition::Final), "yo");
    }

    #[test]
    fn test_trail_only_at_final() {
        let ren = syllable('렌');
        assert_eq!(romanize(&ren, SyllablePosition::Initial), "re");
        assert_eq!(romanize(&ren, SyllablePosition::Medial), "re");
        assert_eq!(romanize(&ren, SyllablePosition::Final), "ren");
    }

    #[test]
    fn test_final_column_differs_from_initial() {
        // ㄱ: 초성 g, 받침 k
        assert_eq!(romanize(&syllable('각'), SyllablePosition::Final), "gak");
        // ㄹ: 초성 r, 받침 l
        assert_eq!(romanize(&syllable('랄'), SyllablePosition::Final), "ral");
        // ㅇ: 초성 무음, 받침 ng
        assert_eq!(romanize(&syllable('앙'), SyllablePosition::Final), "ang");
        // ㅅ/ㅆ/ㅎ 받침은 t
        assert_eq!(romanize(&syllable('옷'), SyllablePosition::Final), "ot");
        assert_eq!(romanize(&syllable('있'), SyllablePosition::Final), "it");
        assert_eq!(romanize(&syllable('힣'), SyllablePosition::Final), "hit");
    }

    #[test]
    fn test_cluster_trail_uses_representative() {
        assert_eq!(romanize(&syllable('읽'), SyllablePosition::Final), "ik");
        assert_eq!(romanize(&syllable('삶'), SyllablePosition::Final), "sam");
        assert_eq!(romanize(&syllable('없'), SyllablePosition::Final), "eop");
        assert_eq!(romanize(&syllable('닭'), SyllablePosition::Final), "dak");
        assert_eq!(romanize(&syllable('덟'), SyllablePosition::Final), "deol");
    }

    #[test]
    fn test_vowels() {
        assert_eq!(vowel_roman(4), "eo");
        assert_eq!(vowel_roman(18), "eu");
        assert_eq!(vowel_roman(19), "ui");
        assert_eq!(vowel_roman(21), "");
    }

    #[test]
    fn test_unmapped_slots_are_empty() {
        assert_eq!(lead_roman(19), "");
        assert_eq!(trail_roman(0), "");
        assert_eq!(trail_roman(28), "");
    }

    #[test]
    fn test_initial_is_strict_prefix_of_final() {
        for code in HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST {
            let parts = decompose_syllable(char::from_u32(code).unwrap()).unwrap();
            let initial = romanize(&parts, SyllablePosition::Initial);
            let fin = romanize(&parts, SyllablePosition::Final);
            if parts.has_trail() {
                assert!(fin.len() > initial.len(), "U+{:04X}", code);
                assert_eq!(fin, format!("{}{}", initial, trail_roman(parts.trail())));
            } else {
                assert_eq!(initial, fin);
            }
        }
    }
}
