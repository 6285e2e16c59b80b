pub mod config;
pub mod core;
pub mod detection;

pub use crate::core::converter::{convert, Direction};
pub use crate::core::error::{ConversionError, ConversionResult};
pub use crate::core::grouping::format_indian;
pub use crate::core::number_to_words::{convert_to_indian_words, number_to_words, SpelledNumber};
pub use crate::core::numeral::NumericValue;
pub use crate::core::words_to_number::{convert_words_to_indian_number, parse_words, words_to_number};
pub use crate::detection::{convert_auto, detect_direction};
