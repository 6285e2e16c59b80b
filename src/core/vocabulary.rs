//! 영어 숫자 단어 사전
//!
//! 숫자 → 단어 방향의 이름 표와, 단어 → 숫자 방향의 토큰 분류를 담습니다.
//! 모든 표는 컴파일 타임 상수입니다.

/// 0-19 이름 (0은 빈 문자열: 자리값 조합에서 생략)
pub const UNITS: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

/// 십의 자리 이름 (인덱스 = 십의 자리 숫자)
pub const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// 소수부 숫자 하나씩 읽을 때 쓰는 이름
pub const DIGITS: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// 소수점 단어
pub const POINT: &str = "Point";

/// 토큰 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordToken {
    /// 숫자 단어 (zero..nineteen, twenty..ninety)
    Number(u64),
    /// 자리값 단어 (hundred, thousand, lakh, crore, arab, kharab)
    Multiplier(u64),
    /// 소수점 구분자 "point"
    Point,
}

/// 소문자 토큰 하나를 분류
/// 사전에 없는 단어는 None 반환
pub fn classify(token: &str) -> Option<WordToken> {
    let token = match token {
        "point" => WordToken::Point,

        "zero" => WordToken::Number(0),
        "one" => WordToken::Number(1),
        "two" => WordToken::Number(2),
        "three" => WordToken::Number(3),
        "four" => WordToken::Number(4),
        "five" => WordToken::Number(5),
        "six" => WordToken::Number(6),
        "seven" => WordToken::Number(7),
        "eight" => WordToken::Number(8),
        "nine" => WordToken::Number(9),
        "ten" => WordToken::Number(10),
        "eleven" => WordToken::Number(11),
        "twelve" => WordToken::Number(12),
        "thirteen" => WordToken::Number(13),
        "fourteen" => WordToken::Number(14),
        "fifteen" => WordToken::Number(15),
        "sixteen" => WordToken::Number(16),
        "seventeen" => WordToken::Number(17),
        "eighteen" => WordToken::Number(18),
        "nineteen" => WordToken::Number(19),
        "twenty" => WordToken::Number(20),
        "thirty" => WordToken::Number(30),
        "forty" => WordToken::Number(40),
        "fifty" => WordToken::Number(50),
        "sixty" => WordToken::Number(60),
        "seventy" => WordToken::Number(70),
        "eighty" => WordToken::Number(80),
        "ninety" => WordToken::Number(90),

        "hundred" => WordToken::Multiplier(100),
        "thousand" => WordToken::Multiplier(1_000),
        "lakh" => WordToken::Multiplier(1_00_000),
        "crore" => WordToken::Multiplier(1_00_00_000),
        "arab" => WordToken::Multiplier(1_00_00_00_000),
        "kharab" => WordToken::Multiplier(1_00_00_00_00_000),

        _ => return None,
    };
    Some(token)
}

/// 0-99 를 단어로 (0은 빈 문자열)
pub fn two_digits(num: u64) -> String {
    let num = num % 100;
    if num < 20 {
        return UNITS[num as usize].to_string();
    }

    let tens = TENS[(num / 10) as usize];
    match num % 10 {
        0 => tens.to_string(),
        ones => format!("{} {}", tens, UNITS[ones as usize]),
    }
}

/// 0-999 를 단어로 (0은 빈 문자열)
pub fn three_digits(num: u64) -> String {
    let num = num % 1000;
    if num < 100 {
        return two_digits(num);
    }

    let hundreds = format!("{} Hundred", UNITS[(num / 100) as usize]);
    match num % 100 {
        0 => hundreds,
        rest => format!("{} {}", hundreds, two_digits(rest)),
    }
}

/// 소수부 숫자 문자 → 이름 (숫자가 아니면 None)
pub fn digit_name(c: char) -> Option<&'static str> {
    c.to_digit(10).map(|d| DIGITS[d as usize])
}
