//! 유니코드 한글 음절 조합/분해 유틸리티

use crate::core::components::PhonemicComponents;

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 호환용 자모: 초성 순서
#[rustfmt::skip]
const CHOSEONG_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 호환용 자모: 중성 순서
#[rustfmt::skip]
const JUNGSEONG_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 호환용 자모: 종성 순서 (0번은 종성 없음이라 비워둠)
#[rustfmt::skip]
const JONGSEONG_JAMO: [Option<char>; 28] = [
    None,      Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'),
    Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'),
    Some('ㄿ'), Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'),
    Some('ㅇ'), Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 완성형 한글 음절인지 확인 (가 ~ 힣)
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성으로 분해
///
/// 가~힣 범위 밖의 문자(공백, 영문, 낱자모 등)는 None.
/// 호출 측은 None을 "건너뛰기" 신호로 사용한다.
pub fn decompose_syllable(c: char) -> Option<PhonemicComponents> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let jungseong = (offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    PhonemicComponents::new(choseong, jungseong, jongseong)
}

/// 단일 종성을 초성 인덱스로 변환
/// 복합 종성(ㄳ, ㄺ 등)은 대응하는 초성이 없으므로 None
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    match jong {
        1 => Some(0),   // ㄱ
        2 => Some(1),   // ㄲ
        4 => Some(2),   // ㄴ
        7 => Some(3),   // ㄷ
        8 => Some(5),   // ㄹ
        16 => Some(6),  // ㅁ
        17 => Some(7),  // ㅂ
        19 => Some(9),  // ㅅ
        20 => Some(10), // ㅆ
        21 => Some(11), // ㅇ
        22 => Some(12), // ㅈ
        23 => Some(14), // ㅊ
        24 => Some(15), // ㅋ
        25 => Some(16), // ㅌ
        26 => Some(17), // ㅍ
        27 => Some(18), // ㅎ
        _ => None,
    }
}

/// 복합 종성의 대표음 초성 인덱스
///
/// 받침 자리에서 실제로 소리 나는 자음 하나로 줄인다.
/// ㄳ→ㄱ, ㄵ·ㄶ→ㄴ, ㄺ→ㄱ, ㄻ→ㅁ, ㄼ·ㄽ·ㄾ·ㅀ→ㄹ, ㄿ·ㅄ→ㅂ
pub fn cluster_representative(jong: u32) -> Option<u32> {
    match jong {
        3 | 9 => Some(0),             // ㄳ ㄺ
        5 | 6 => Some(2),             // ㄵ ㄶ
        10 => Some(6),                // ㄻ
        11 | 12 | 13 | 15 => Some(5), // ㄼ ㄽ ㄾ ㅀ
        14 | 18 => Some(7),           // ㄿ ㅄ
        _ => None,
    }
}

/// 초성 인덱스 -> 호환용 자모 문자
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 자모 문자
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG_JAMO.get(jung as usize).copied()
}

/// 종성 인덱스 -> 호환용 자모 문자 (0 = 종성 없음이면 None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    JONGSEONG_JAMO.get(jong as usize).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_syllable() {
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(0, 18, 8), Some('글'));
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));

        // 범위 밖 인덱스
        assert_eq!(compose_syllable(19, 0, 0), None);
        assert_eq!(compose_syllable(0, 21, 0), None);
        assert_eq!(compose_syllable(0, 0, 28), None);
    }

    #[test]
    fn test_decompose_syllable() {
        let ga = decompose_syllable('가').unwrap();
        assert_eq!((ga.lead(), ga.vowel(), ga.trail()), (0, 0, 0));

        let han = decompose_syllable('한').unwrap();
        assert_eq!((han.lead(), han.vowel(), han.trail()), (18, 0, 4));

        let geul = decompose_syllable('글').unwrap();
        assert_eq!((geul.lead(), geul.vowel(), geul.trail()), (0, 18, 8));

        // 한글 음절이 아닌 문자
        assert_eq!(decompose_syllable('A'), None);
        assert_eq!(decompose_syllable(' '), None);
        assert_eq!(decompose_syllable('ㄱ'), None); // 낱자모는 음절이 아님
    }

    #[test]
    fn test_block_boundaries() {
        assert!(decompose_syllable('\u{ABFF}').is_none());
        assert!(decompose_syllable('\u{AC00}').is_some());
        assert!(decompose_syllable('\u{D7A3}').is_some());
        assert!(decompose_syllable('\u{D7A4}').is_none());
    }

    #[test]
    fn test_reconstructive_identity() {
        // 블록 전체에 대해 분해 -> 조합이 원래 코드포인트를 돌려줌
        for code in HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST {
            let c = char::from_u32(code).unwrap();
            let parts = decompose_syllable(c).unwrap();
            assert!(parts.lead() < CHOSEONG_COUNT);
            assert!(parts.vowel() < JUNGSEONG_COUNT);
            assert!(parts.trail() < JONGSEONG_COUNT);
            assert_eq!(
                code,
                HANGUL_SYLLABLE_BASE + parts.lead() * 21 * 28 + parts.vowel() * 28 + parts.trail()
            );
            assert_eq!(compose_syllable(parts.lead(), parts.vowel(), parts.trail()), Some(c));
        }
    }

    #[test]
    fn test_jongseong_to_choseong() {
        assert_eq!(jongseong_to_choseong(1), Some(0)); // ㄱ
        assert_eq!(jongseong_to_choseong(4), Some(2)); // ㄴ
        assert_eq!(jongseong_to_choseong(8), Some(5)); // ㄹ
        assert_eq!(jongseong_to_choseong(21), Some(11)); // ㅇ
        assert_eq!(jongseong_to_choseong(27), Some(18)); // ㅎ

        // 복합 종성과 종성 없음
        assert_eq!(jongseong_to_choseong(0), None);
        assert_eq!(jongseong_to_choseong(3), None); // ㄳ
        assert_eq!(jongseong_to_choseong(9), None); // ㄺ
    }

    #[test]
    fn test_every_trail_has_a_sound() {
        for jong in 1..JONGSEONG_COUNT {
            let single = jongseong_to_choseong(jong);
            let cluster = cluster_representative(jong);
            assert!(
                single.is_some() ^ cluster.is_some(),
                "종성 {} 은 단일 또는 복합 중 하나여야 함",
                jong
            );
        }
    }

    #[test]
    fn test_jamo_chars() {
        assert_eq!(choseong_to_jamo_char(0), Some('ㄱ'));
        assert_eq!(choseong_to_jamo_char(18), Some('ㅎ'));
        assert_eq!(choseong_to_jamo_char(19), None);

        assert_eq!(jungseong_to_jamo_char(0), Some('ㅏ'));
        assert_eq!(jungseong_to_jamo_char(8), Some('ㅗ'));
        assert_eq!(jungseong_to_jamo_char(20), Some('ㅣ'));
        assert_eq!(jungseong_to_jamo_char(21), None);

        assert_eq!(jongseong_to_jamo_char(0), None);
        assert_eq!(jongseong_to_jamo_char(4), Some('ㄴ'));
        assert_eq!(jongseong_to_jamo_char(18), Some('ㅄ'));
        assert_eq!(jongseong_to_jamo_char(27), Some('ㅎ'));
        assert_eq!(jongseong_to_jamo_char(28), None);
    }
}
