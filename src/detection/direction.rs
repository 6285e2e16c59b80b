//! 입력 모양으로 변환 방향 판별
//!
//! 숫자와 점만 있으면 숫자 → 단어, 영문자/공백/하이픈만 있으면 단어 → 숫자.

use crate::core::converter::{convert, Direction};
use crate::core::error::ConversionResult;

/// 입력이 어느 방향 변환에 해당하는지 판별
/// 비어 있거나 숫자와 영문자가 섞여 있으면 None
pub fn detect_direction(input: &str) -> Option<Direction> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let is_numeral = trimmed.chars().all(|c| c.is_ascii_digit() || c == '.')
        && trimmed.chars().any(|c| c.is_ascii_digit());
    if is_numeral {
        return Some(Direction::NumberToWords);
    }

    let is_words = trimmed
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-')
        && trimmed.chars().any(|c| c.is_ascii_alphabetic());
    if is_words {
        return Some(Direction::WordsToNumber);
    }

    None
}

/// 감지된 방향으로 변환, 감지 실패 시 fallback 방향 사용
///
/// 숫자 쪽 입력은 앞뒤 공백을 제거한 뒤 변환합니다.
pub fn convert_auto(input: &str, fallback: Direction) -> ConversionResult<String> {
    match detect_direction(input) {
        Some(Direction::NumberToWords) => convert(input.trim(), Direction::NumberToWords),
        Some(direction) => convert(input, direction),
        None => {
            log::debug!("방향 감지 실패, 기본 방향 사용: {:?}", fallback);
            convert(input, fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ConversionError;

    #[test]
    fn test_detect_numeral() {
        assert_eq!(detect_direction("1234567"), Some(Direction::NumberToWords));
        assert_eq!(detect_direction(" 100.05 "), Some(Direction::NumberToWords));
        // 점 여러 개도 숫자 쪽으로 보내고 변환 단계에서 거부
        assert_eq!(detect_direction("1.2.3"), Some(Direction::NumberToWords));
    }

    #[test]
    fn test_detect_words() {
        assert_eq!(
            detect_direction("Thirty-Four thousand"),
            Some(Direction::WordsToNumber)
        );
        assert_eq!(detect_direction("banana"), Some(Direction::WordsToNumber));
    }

    #[test]
    fn test_detect_ambiguous() {
        assert_eq!(detect_direction(""), None);
        assert_eq!(detect_direction("   "), None);
        assert_eq!(detect_direction("."), None);
        assert_eq!(detect_direction("12 lakh"), None);
        assert_eq!(detect_direction("-"), None);
    }

    #[test]
    fn test_convert_auto() {
        assert_eq!(convert_auto(" 7 ", Direction::WordsToNumber).unwrap(), "Seven (7)");
        assert_eq!(
            convert_auto("one lakh", Direction::NumberToWords).unwrap(),
            "1,00,000"
        );
        assert_eq!(
            convert_auto("12 lakh", Direction::WordsToNumber),
            Err(ConversionError::InvalidWord("12".into()))
        );
    }
}
