//! 입력 방향 자동 감지 모듈

mod direction;

pub use direction::{convert_auto, detect_direction};
