//! 게임 캐릭터 이름 목록 (JSON)
//!
//! 학습 자료로 쓰는 캐릭터 이름(한국어/영어/일본어)을 JSON 파일에서 읽는다.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::kana::normalize_kana_for_search;
use crate::learning::curriculum::{matches_focus, FocusArea};

/// 캐릭터 목록 로드 에러
#[derive(Debug)]
pub enum RosterError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 목록 내용 오류
    FormatError(String),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::IoError(e) => write!(f, "file read error: {}", e),
            RosterError::ParseError(s) => write!(f, "JSON parse error: {}", s),
            RosterError::FormatError(s) => write!(f, "roster format error: {}", s),
        }
    }
}

impl std::error::Error for RosterError {}

impl From<std::io::Error> for RosterError {
    fn from(e: std::io::Error) -> Self {
        RosterError::IoError(e)
    }
}

/// 캐릭터가 나오는 게임
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    #[serde(rename = "lol")]
    Lol,
    #[serde(rename = "eternal-return")]
    EternalReturn,
}

/// 게임 표시 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub game: Game,
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub theme_color: &'static str,
    pub icon_count: u32,
}

const GAMES: [GameConfig; 2] = [
    GameConfig {
        game: Game::Lol,
        name: "League of Legends",
        short_name: "LoL",
        description: "Learn Hangul with League of Legends champion names",
        theme_color: "#C89B3C",
        icon_count: 168,
    },
    GameConfig {
        game: Game::EternalReturn,
        name: "Eternal Return",
        short_name: "ER",
        description: "Learn Hangul with Eternal Return character names",
        theme_color: "#FF6B6B",
        icon_count: 84,
    },
];

/// 지원하는 게임 목록
pub fn games() -> &'static [GameConfig] {
    &GAMES
}

/// 게임 표시 정보 조회
pub fn game_config(game: Game) -> &'static GameConfig {
    match game {
        Game::Lol => &GAMES[0],
        Game::EternalReturn => &GAMES[1],
    }
}

/// 캐릭터 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    /// 한국어 이름 (예: 가렌)
    pub name_ko: String,
    /// 영어 이름 (예: Garen)
    pub name_en: String,
    /// 일본어 읽기 (예: ガレン)
    pub name_ja: String,
    pub game: Game,
}

/// 캐릭터 목록
#[derive(Debug, Clone, Default)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// JSON 파일에서 목록 로드
    ///
    /// # 파일 형식
    /// ```json
    /// [
    ///   { "id": "Garen", "nameKo": "가렌", "nameEn": "Garen", "nameJa": "ガレン", "game": "lol" }
    /// ]
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let characters: Vec<Character> =
            serde_json::from_reader(reader).map_err(|e| RosterError::ParseError(e.to_string()))?;

        let roster = Self::from_characters(characters)?;
        log::info!("캐릭터 {}명 로드: {}", roster.len(), path.display());
        Ok(roster)
    }

    /// JSON 문자열에서 목록 로드
    pub fn from_json(json_str: &str) -> Result<Self, RosterError> {
        let characters: Vec<Character> =
            serde_json::from_str(json_str).map_err(|e| RosterError::ParseError(e.to_string()))?;
        Self::from_characters(characters)
    }

    /// 캐릭터 목록 검증 후 생성
    pub fn from_characters(characters: Vec<Character>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(characters.len());
        for c in &characters {
            if c.name_ko.trim().is_empty() {
                return Err(RosterError::FormatError(format!(
                    "empty Korean name: {}",
                    c.id
                )));
            }
            if !seen.insert(c.id.as_str()) {
                return Err(RosterError::FormatError(format!("duplicate id: {}", c.id)));
            }
        }
        Ok(Self { characters })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// ID로 조회
    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// 게임별 캐릭터
    pub fn by_game(&self, game: Game) -> Vec<&Character> {
        self.characters.iter().filter(|c| c.game == game).collect()
    }

    /// 이름 검색 (한국어/영어/일본어, 대소문자 무시)
    ///
    /// 히라가나 검색어로 가타카나 이름을 찾을 수 있도록 가나를 정규화한다.
    pub fn search(&self, query: &str) -> Vec<&Character> {
        let needle = normalize_kana_for_search(query.trim()).to_lowercase();
        if needle.is_empty() {
            return self.characters.iter().collect();
        }

        self.characters
            .iter()
            .filter(|c| {
                c.name_ko.contains(&needle)
                    || c.name_en.to_lowercase().contains(&needle)
                    || normalize_kana_for_search(&c.name_ja)
                        .to_lowercase()
                        .contains(&needle)
            })
            .collect()
    }

    /// 집중 영역에 해당하는 캐릭터
    pub fn filter_by_focus(&self, area: &FocusArea) -> Vec<&Character> {
        self.characters
            .iter()
            .filter(|c| matches_focus(&c.name_ko, area))
            .collect()
    }
}
