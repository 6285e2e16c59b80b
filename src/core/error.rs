//! 변환 에러 정의

use std::fmt;

/// 숫자 ↔ 단어 변환 실패 사유
///
/// `Display` 출력은 기존 UI가 그대로 보여주던 문구와 동일합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 정수부를 음이 아닌 정수로 읽을 수 없음 (빈 문자열, 숫자 외 문자, 점 여러 개, u64 초과)
    InvalidNumber,
    /// 소수부 밖에서 사전에 없는 단어
    InvalidWord(String),
    /// "point" 뒤에서 숫자 단어가 아닌 토큰
    InvalidDecimalWord(String),
    /// 지원 범위(10^15 미만) 또는 u64 범위 초과
    OutOfRange,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidNumber => write!(f, "Invalid number"),
            ConversionError::InvalidWord(token) => write!(f, "Invalid word: {}", token),
            ConversionError::InvalidDecimalWord(token) => {
                write!(f, "Invalid word in decimal part: {}", token)
            }
            ConversionError::OutOfRange => write!(f, "Number out of supported range"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 변환 결과 타입
pub type ConversionResult<T> = Result<T, ConversionError>;
