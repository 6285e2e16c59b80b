//! 인도식 자릿수 구분 (12,34,567)

/// 숫자 문자열에 인도식 쉼표 삽입
///
/// 마지막 세 자리 앞에 쉼표를 두고, 그 앞은 두 자리씩 끊습니다.
/// 첫 번째 "." 뒤는 그대로 붙입니다. 숫자 검증은 하지 않습니다.
///
/// # Examples
/// ```
/// use indian_numeral::format_indian;
/// assert_eq!(format_indian("1234567"), "12,34,567");
/// assert_eq!(format_indian("100.05"), "100.05");
/// ```
pub fn format_indian(numeral: &str) -> String {
    let (int_part, frac_part) = match numeral.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (numeral, None),
    };

    let chars: Vec<char> = int_part.chars().collect();
    let mut result = String::with_capacity(numeral.len() + chars.len() / 2 + 1);

    if chars.len() <= 3 {
        result.push_str(int_part);
    } else {
        let (head, last_three) = chars.split_at(chars.len() - 3);
        for (i, c) in head.iter().enumerate() {
            // 오른쪽 끝에서부터 두 자리씩
            if i > 0 && (head.len() - i) % 2 == 0 {
                result.push(',');
            }
            result.push(*c);
        }
        result.push(',');
        result.extend(last_three);
    }

    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }

    result
}
