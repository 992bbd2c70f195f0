//! 히라가나/가타카나 변환 (캐릭터 검색용)

/// 히라가나 범위 (ぁ ~ ゖ)
const HIRAGANA_START: u32 = 0x3041;
const HIRAGANA_END: u32 = 0x3096;
/// 가타카나 범위 (ァ ~ ヶ)
const KATAKANA_START: u32 = 0x30A1;
const KATAKANA_END: u32 = 0x30F6;
/// 히라가나와 가타카나 사이 오프셋
const KANA_OFFSET: u32 = 0x60;

fn is_hiragana(c: char) -> bool {
    (HIRAGANA_START..=HIRAGANA_END).contains(&(c as u32))
}

fn is_katakana(c: char) -> bool {
    (KATAKANA_START..=KATAKANA_END).contains(&(c as u32))
}

/// 히라가나를 가타카나로 변환 (그 외 문자는 그대로)
pub fn hiragana_to_katakana(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if is_hiragana(c) {
                char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// 가타카나를 히라가나로 변환 (그 외 문자는 그대로)
pub fn katakana_to_hiragana(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if is_katakana(c) {
                char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// 히라가나 또는 가타카나가 포함되어 있는지 확인
pub fn contains_kana(input: &str) -> bool {
    input.chars().any(|c| is_hiragana(c) || is_katakana(c))
}

/// 검색용 정규화: 가타카나로 통일
pub fn normalize_kana_for_search(input: &str) -> String {
    hiragana_to_katakana(input)
}
