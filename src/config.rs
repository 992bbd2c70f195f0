//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::learning::Level;

/// 학습 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LessonConfig {
    /// 이름 하나에 보여줄 최대 학습 포인트 수
    #[serde(default = "default_max_learning_points")]
    pub max_learning_points: usize,
    /// 현재 학습 레벨
    #[serde(default = "default_level")]
    pub level: Level,
    /// 캐릭터 목록 JSON 경로
    #[serde(default)]
    pub roster_path: Option<String>,
    /// 분석 시 음절별 설명 출력 여부
    #[serde(default = "default_show_explanation")]
    pub show_explanation: bool,
}

fn default_max_learning_points() -> usize {
    3
}

fn default_level() -> Level {
    Level::Beginner
}

fn default_show_explanation() -> bool {
    true
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            max_learning_points: default_max_learning_points(),
            level: default_level(),
            roster_path: None,
            show_explanation: default_show_explanation(),
        }
    }
}

/// 설정 파일 경로: ~/.config/hangul-lesson/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hangul-lesson").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> LessonConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => parse_config(&content),
        Err(_) => LessonConfig::default(),
    }
}

/// 설정 JSON 파싱 (실패 시 기본값)
pub fn parse_config(content: &str) -> LessonConfig {
    serde_json::from_str(content).unwrap_or_else(|e| {
        log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
        LessonConfig::default()
    })
}

/// 설정 파일 저장
pub fn save_config(config: &LessonConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create config directory: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| format!("failed to serialize config: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("failed to write config file: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LessonConfig::default();
        assert_eq!(config.max_learning_points, 3);
        assert_eq!(config.level, Level::Beginner);
        assert!(config.roster_path.is_none());
        assert!(config.show_explanation);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = LessonConfig {
            max_learning_points: 5,
            level: Level::Advanced,
            roster_path: Some("data/champions.json".to_string()),
            show_explanation: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: LessonConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
        assert!(json.contains("\"advanced\""));
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 일부 필드가 없는 경우 기본값 사용
        let json = r#"{"level": "intermediate"}"#;
        let config: LessonConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.level, Level::Intermediate);
        assert_eq!(config.max_learning_points, 3);
        assert!(config.show_explanation);
    }

    #[test]
    fn test_broken_config_falls_back() {
        assert_eq!(parse_config("{ not json"), LessonConfig::default());
        assert_eq!(parse_config(r#"{"level": "expert"}"#), LessonConfig::default());
    }

    #[test]
    fn test_config_path_file_name() {
        let path = config_path();
        assert!(path.ends_with(".config/hangul-lesson/config.json"));
    }
}
