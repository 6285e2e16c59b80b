//! 방향별 통합 변환기

use serde::{Deserialize, Serialize};

use crate::core::error::ConversionResult;
use crate::core::number_to_words::number_to_words;
use crate::core::words_to_number::words_to_number;

/// 변환 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// "1234567" → "Twelve Lakh ... (12,34,567)"
    #[default]
    NumberToWords,
    /// "twelve lakh ..." → "12,34,567"
    WordsToNumber,
}

impl Direction {
    /// 반대 방향
    pub fn toggled(self) -> Self {
        match self {
            Direction::NumberToWords => Direction::WordsToNumber,
            Direction::WordsToNumber => Direction::NumberToWords,
        }
    }

    /// 화면 표시용 이름
    pub fn label(self) -> &'static str {
        match self {
            Direction::NumberToWords => "Number to Words",
            Direction::WordsToNumber => "Words to Number",
        }
    }
}

/// 지정한 방향으로 변환하여 표시 문자열 반환
pub fn convert(input: &str, direction: Direction) -> ConversionResult<String> {
    match direction {
        Direction::NumberToWords => number_to_words(input).map(|spelled| spelled.to_string()),
        Direction::WordsToNumber => words_to_number(input),
    }
}
