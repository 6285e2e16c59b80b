//! 인도식 자리값 그룹 분해
//!
//! 정수를 (백 단위, Thousand, Lakh, Crore, Arab, Kharab) 여섯 그룹으로 나눕니다.
//! 가장 낮은 그룹은 0-999, 나머지 다섯 그룹은 0-99 범위입니다.

use crate::core::error::{ConversionError, ConversionResult};

/// 그룹 개수
pub const GROUP_COUNT: usize = 6;

/// 각 그룹의 자리값 (오름차순)
pub const PLACE_VALUES: [u64; GROUP_COUNT] = [
    1,
    1_000,
    1_00_000,
    1_00_00_000,
    1_00_00_00_000,
    1_00_00_00_00_000,
];

/// 각 그룹의 이름 (가장 낮은 그룹은 이름 없음)
pub const LABELS: [&str; GROUP_COUNT] = ["", "Thousand", "Lakh", "Crore", "Arab", "Kharab"];

/// 지원 상한 (이 값 이상은 Kharab 그룹이 두 자리를 넘음)
pub const MAGNITUDE_CEILING: u64 = 1_00_00_00_00_00_00_000;

/// 여섯 개 자리값 그룹
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeGroups {
    groups: [u64; GROUP_COUNT],
}

impl MagnitudeGroups {
    /// 정수를 그룹으로 분해
    /// 상한 이상이면 OutOfRange
    pub fn decompose(n: u64) -> ConversionResult<Self> {
        if n >= MAGNITUDE_CEILING {
            return Err(ConversionError::OutOfRange);
        }

        let mut groups = [0u64; GROUP_COUNT];
        groups[0] = n % 1000;
        for (i, group) in groups.iter_mut().enumerate().skip(1) {
            *group = (n / PLACE_VALUES[i]) % 100;
        }

        Ok(Self { groups })
    }

    /// 그룹 값 (0 = 백 단위, 5 = Kharab)
    pub fn group(&self, index: usize) -> u64 {
        self.groups[index]
    }

    /// 그룹으로부터 원래 값 복원
    pub fn value(&self) -> u64 {
        self.groups
            .iter()
            .zip(PLACE_VALUES.iter())
            .map(|(g, p)| g * p)
            .sum()
    }

    /// 모든 그룹이 0인지 확인
    pub fn is_zero(&self) -> bool {
        self.groups.iter().all(|&g| g == 0)
    }

    /// 0이 아닌 그룹을 높은 자리부터 (인덱스, 값, 이름)으로 순회
    pub fn descending(&self) -> impl Iterator<Item = (usize, u64, &'static str)> + '_ {
        (0..GROUP_COUNT)
            .rev()
            .filter(move |&i| self.groups[i] != 0)
            .map(move |i| (i, self.groups[i], LABELS[i]))
    }
}
