//! 정수부 + 소수부 숫자 값

use std::fmt;
use std::str::FromStr;

use crate::core::error::ConversionError;
use crate::core::grouping::format_indian;

/// 변환 중간 값: u64 정수부와 소수부 숫자열
///
/// 소수부는 '0'-'9' 문자만 담습니다. 빈 문자열이면 소수부 없음.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumericValue {
    integer: u64,
    fraction: String,
}

impl NumericValue {
    /// 정수부와 소수부 숫자열로 생성
    /// 소수부에 숫자 외 문자가 있으면 InvalidNumber
    pub fn new(integer: u64, fraction: impl Into<String>) -> Result<Self, ConversionError> {
        let fraction = fraction.into();
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConversionError::InvalidNumber);
        }
        Ok(Self { integer, fraction })
    }

    /// 정수부
    pub fn integer(&self) -> u64 {
        self.integer
    }

    /// 소수부 숫자열 (없으면 빈 문자열)
    pub fn fraction(&self) -> &str {
        &self.fraction
    }

    /// 소수부가 있는지 확인
    pub fn has_fraction(&self) -> bool {
        !self.fraction.is_empty()
    }

    /// 쉼표 없는 표기 ("1234567.89")
    pub fn to_plain_string(&self) -> String {
        if self.has_fraction() {
            format!("{}.{}", self.integer, self.fraction)
        } else {
            self.integer.to_string()
        }
    }
}

impl FromStr for NumericValue {
    type Err = ConversionError;

    /// "{digits}" 또는 "{digits}.{digits}" 파싱
    ///
    /// - 점이 두 개 이상이면 거부
    /// - 부호, 공백, 빈 정수부 거부
    /// - u64 범위를 넘으면 거부
    /// - "5." 처럼 빈 소수부는 소수부 없음으로 취급
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (int_part, frac_part) = match s.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (s, ""),
        };

        if frac_part.contains('.') {
            return Err(ConversionError::InvalidNumber);
        }
        if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConversionError::InvalidNumber);
        }

        let integer = int_part
            .parse::<u64>()
            .map_err(|_| ConversionError::InvalidNumber)?;

        Self::new(integer, frac_part)
    }
}

/// 인도식 쉼표 표기 ("12,34,567.89")
impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_indian(&self.to_plain_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        let value: NumericValue = "1234567".parse().unwrap();
        assert_eq!(value.integer(), 1_234_567);
        assert!(!value.has_fraction());
        assert_eq!(value.to_string(), "12,34,567");
    }

    #[test]
    fn test_parse_fraction() {
        let value: NumericValue = "100.05".parse().unwrap();
        assert_eq!(value.integer(), 100);
        assert_eq!(value.fraction(), "05");
        assert_eq!(value.to_plain_string(), "100.05");
    }

    #[test]
    fn test_empty_fraction_is_absent() {
        let value: NumericValue = "5.".parse().unwrap();
        assert!(!value.has_fraction());
        assert_eq!(value.to_string(), "5");
    }

    #[test]
    fn test_parse_rejects() {
        for input in ["", "abc", ".5", "+5", "-5", " 5", "1.2.3", "12a", "1.2x", "18446744073709551616"] {
            assert_eq!(
                input.parse::<NumericValue>(),
                Err(ConversionError::InvalidNumber),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_u64_max() {
        let value: NumericValue = "18446744073709551615".parse().unwrap();
        assert_eq!(value.integer(), u64::MAX);
    }

    #[test]
    fn test_new_validates_fraction() {
        assert!(NumericValue::new(1, "07").is_ok());
        assert_eq!(NumericValue::new(1, "x"), Err(ConversionError::InvalidNumber));
    }
}
