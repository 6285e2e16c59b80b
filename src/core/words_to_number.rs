//! 영어 단어 → 숫자 변환 (인도식 자리값)

use crate::core::error::{ConversionError, ConversionResult};
use crate::core::numeral::NumericValue;
use crate::core::vocabulary::{classify, WordToken};

/// 토큰을 하나씩 받아 값을 누적하는 상태 기계
///
/// - 숫자 단어는 `current`에 더함
/// - 자리값 단어는 `current`(0이면 1)에 곱한 뒤 `total`로 넘김
/// - "point" 이후로는 숫자 단어의 자릿수를 소수부에 이어 붙임
#[derive(Debug, Default)]
pub struct WordAccumulator {
    total: u64,
    current: u64,
    in_fraction: bool,
    fraction: String,
}

impl WordAccumulator {
    /// 새 누적기 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 소문자 토큰 하나 입력
    pub fn feed(&mut self, token: &str) -> ConversionResult<()> {
        match classify(token) {
            // "point"는 여러 번 나와도 에러 없음
            Some(WordToken::Point) => self.in_fraction = true,
            Some(WordToken::Number(value)) if self.in_fraction => {
                self.fraction.push_str(&value.to_string());
            }
            _ if self.in_fraction => {
                return Err(ConversionError::InvalidDecimalWord(token.to_string()));
            }
            Some(WordToken::Number(value)) => {
                self.current = self
                    .current
                    .checked_add(value)
                    .ok_or(ConversionError::OutOfRange)?;
            }
            Some(WordToken::Multiplier(factor)) => {
                // "hundred" 단독은 100
                let base = if self.current == 0 { 1 } else { self.current };
                let scaled = base.checked_mul(factor).ok_or(ConversionError::OutOfRange)?;
                self.total = self
                    .total
                    .checked_add(scaled)
                    .ok_or(ConversionError::OutOfRange)?;
                self.current = 0;
            }
            None => return Err(ConversionError::InvalidWord(token.to_string())),
        }
        Ok(())
    }

    /// 남은 `current`를 더해 최종 값 반환
    pub fn finish(self) -> ConversionResult<NumericValue> {
        let total = self
            .total
            .checked_add(self.current)
            .ok_or(ConversionError::OutOfRange)?;
        NumericValue::new(total, self.fraction)
    }
}

/// 입력 정규화: 소문자, 하이픈 → 공백, 공백 기준 분리
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// 단어 문자열을 숫자 값으로 파싱
/// 첫 번째 잘못된 토큰에서 즉시 중단
pub fn parse_words(input: &str) -> ConversionResult<NumericValue> {
    let mut acc = WordAccumulator::new();
    for token in tokenize(input) {
        if let Err(e) = acc.feed(&token) {
            log::warn!("단어 파싱 실패: {:?} ({})", input, e);
            return Err(e);
        }
    }
    acc.finish()
}

/// 단어 문자열을 인도식 쉼표 표기로 변환
///
/// # Examples
/// ```
/// use indian_numeral::words_to_number;
/// assert_eq!(words_to_number("twelve lakh thirty-four thousand").unwrap(), "12,34,000");
/// ```
pub fn words_to_number(input: &str) -> ConversionResult<String> {
    let value = parse_words(input)?;
    log::debug!("단어 → 숫자: {:?} → {}", input, value.to_plain_string());
    Ok(value.to_string())
}

/// 문자열 결과 버전: 실패 시 에러 문구를 그대로 반환
pub fn convert_words_to_indian_number(input: &str) -> String {
    match words_to_number(input) {
        Ok(numeral) => numeral,
        Err(e) => e.to_string(),
    }
}
