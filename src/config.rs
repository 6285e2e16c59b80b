//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::converter::Direction;

/// 변환기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// 시작 시 변환 방향
    #[serde(default)]
    pub direction: Direction,
    /// 입력 모양으로 방향 자동 판별
    #[serde(default = "default_auto_detect")]
    pub auto_detect: bool,
    /// 방향 전환 시 설정 파일에 저장
    #[serde(default = "default_remember_direction")]
    pub remember_direction: bool,
}

fn default_auto_detect() -> bool {
    true
}

fn default_remember_direction() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            auto_detect: default_auto_detect(),
            remember_direction: default_remember_direction(),
        }
    }
}

/// 설정 파일 경로: ~/.config/indian-numeral/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("indian-numeral").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

/// 지정 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정 경로에 설정 저장
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
