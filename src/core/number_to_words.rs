//! 숫자 → 영어 단어 변환 (인도식 자리값)

use std::fmt;

use crate::core::error::{ConversionError, ConversionResult};
use crate::core::magnitude::MagnitudeGroups;
use crate::core::numeral::NumericValue;
use crate::core::vocabulary::{digit_name, three_digits, two_digits, POINT};

/// 단어 표기 + 쉼표 표기 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpelledNumber {
    /// "Twelve Lakh Thirty Four Thousand ..." (0이면 빈 문자열)
    pub words: String,
    /// "12,34,567"
    pub numeral: String,
}

/// "{words} ({numeral})"
/// 단어가 비어 있어도 괄호 앞 공백은 유지 (" (0)")
impl fmt::Display for SpelledNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.words, self.numeral)
    }
}

/// 숫자 값을 단어로 읽기
pub fn spell(value: &NumericValue) -> ConversionResult<SpelledNumber> {
    let groups = MagnitudeGroups::decompose(value.integer())?;

    let mut words: Vec<String> = Vec::new();

    // 높은 자리부터, 0인 그룹은 생략
    for (index, group, label) in groups.descending() {
        let word = if index == 0 {
            three_digits(group)
        } else {
            two_digits(group)
        };
        words.push(word);
        if !label.is_empty() {
            words.push(label.to_string());
        }
    }

    if value.has_fraction() {
        words.push(POINT.to_string());
        for c in value.fraction().chars() {
            let name = digit_name(c).ok_or(ConversionError::InvalidNumber)?;
            words.push(name.to_string());
        }
    }

    Ok(SpelledNumber {
        words: words.join(" "),
        numeral: value.to_string(),
    })
}

/// 숫자 문자열을 단어로 변환
///
/// # Examples
/// ```
/// use indian_numeral::number_to_words;
/// let spelled = number_to_words("1234567").unwrap();
/// assert_eq!(spelled.words, "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven");
/// assert_eq!(spelled.numeral, "12,34,567");
/// ```
pub fn number_to_words(input: &str) -> ConversionResult<SpelledNumber> {
    let value = input.parse::<NumericValue>().inspect_err(|e| {
        log::warn!("숫자 파싱 실패: {:?} ({})", input, e);
    })?;

    let spelled = spell(&value)?;
    log::debug!("숫자 → 단어: {:?} → {:?}", input, spelled.words);
    Ok(spelled)
}

/// 문자열 결과 버전: 실패 시 에러 문구를 그대로 반환
pub fn convert_to_indian_words(input: &str) -> String {
    match number_to_words(input) {
        Ok(spelled) => spelled.to_string(),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(convert_to_indian_words("0"), " (0)");
        assert_eq!(number_to_words("0").unwrap().words, "");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(convert_to_indian_words("7"), "Seven (7)");
        assert_eq!(convert_to_indian_words("19"), "Nineteen (19)");
        assert_eq!(convert_to_indian_words("100"), "One Hundred (100)");
        assert_eq!(convert_to_indian_words("1001"), "One Thousand One (1,001)");
    }

    #[test]
    fn test_lakh() {
        assert_eq!(
            convert_to_indian_words("1234567"),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven (12,34,567)"
        );
        assert_eq!(convert_to_indian_words("100000"), "One Lakh (1,00,000)");
    }

    #[test]
    fn test_crore_and_above() {
        assert_eq!(convert_to_indian_words("100000000"), "Ten Crore (10,00,00,000)");
        assert_eq!(
            convert_to_indian_words("999999999999999"),
            "Ninety Nine Kharab Ninety Nine Arab Ninety Nine Crore Ninety Nine Lakh \
             Ninety Nine Thousand Nine Hundred Ninety Nine (99,99,99,99,99,99,999)"
        );
    }

    #[test]
    fn test_fraction() {
        assert_eq!(
            convert_to_indian_words("100.05"),
            "One Hundred Point Zero Five (100.05)"
        );
        assert_eq!(convert_to_indian_words("0.5"), "Point Five (0.5)");
        assert_eq!(convert_to_indian_words("12.00"), "Twelve Point Zero Zero (12.00)");
    }

    #[test]
    fn test_empty_fraction_ignored() {
        assert_eq!(convert_to_indian_words("5."), "Five (5)");
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(convert_to_indian_words("abc"), "Invalid number");
        assert_eq!(convert_to_indian_words(""), "Invalid number");
        assert_eq!(convert_to_indian_words("-5"), "Invalid number");
        assert_eq!(convert_to_indian_words("1.2.3"), "Invalid number");
        assert_eq!(convert_to_indian_words("1.2a"), "Invalid number");
        assert_eq!(
            convert_to_indian_words("99999999999999999999"),
            "Invalid number"
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            number_to_words("1000000000000000"),
            Err(ConversionError::OutOfRange)
        );
    }
}
