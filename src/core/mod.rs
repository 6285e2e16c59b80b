//! 인도식 숫자 ↔ 영어 단어 변환 핵심 로직

pub mod converter;
pub mod error;
pub mod grouping;
pub mod magnitude;
pub mod number_to_words;
pub mod numeral;
pub mod vocabulary;
pub mod words_to_number;
