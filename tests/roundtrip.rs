//! 속성 기반 테스트 - 숫자 → 단어 → 숫자 왕복

use indian_numeral::{format_indian, number_to_words, words_to_number};
use proptest::prelude::*;

const CEILING: u64 = 1_00_00_00_00_00_00_000;

proptest! {
    #[test]
    fn prop_words_roundtrip(n in 0u64..CEILING) {
        let spelled = number_to_words(&n.to_string()).unwrap();
        let back = words_to_number(&spelled.words).unwrap();
        prop_assert_eq!(back, spelled.numeral);
    }

    #[test]
    fn prop_words_roundtrip_with_fraction(n in 0u64..CEILING, frac in "[0-9]{1,6}") {
        let input = format!("{}.{}", n, frac);
        let spelled = number_to_words(&input).unwrap();
        prop_assert_eq!(&spelled.numeral, &format_indian(&input));
        prop_assert_eq!(words_to_number(&spelled.words).unwrap(), spelled.numeral);
    }

    #[test]
    fn prop_grouping_preserves_digits(digits in "[0-9]{1,20}") {
        let grouped = format_indian(&digits);
        prop_assert_eq!(grouped.replace(',', ""), digits.clone());

        // 마지막 그룹은 세 자리, 그 앞은 두 자리 이하
        let groups: Vec<&str> = grouped.split(',').collect();
        if digits.len() > 3 {
            prop_assert_eq!(groups[groups.len() - 1].len(), 3);
            for g in &groups[1..groups.len() - 1] {
                prop_assert_eq!(g.len(), 2);
            }
            prop_assert!(groups[0].len() <= 2);
        } else {
            prop_assert_eq!(groups.len(), 1);
        }
    }
}
