use crate::error::{FinderError, Result};
use lecture_finder_common::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const LECTURES_ENV: &str = "LECTURE_FINDER_LECTURES";
pub const TEXTBOOKS_ENV: &str = "LECTURE_FINDER_TEXTBOOKS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lecture_path: PathBuf,
    pub lecture_sheet: String,
    pub textbook_path: PathBuf,
    /// 없으면 첫 번째 시트
    pub textbook_sheet: Option<String>,
    pub image_width: u32,
    pub subject_order: Vec<String>,
    pub publisher_order: Vec<String>,
    /// 데스크톱 앱의 한글 글꼴 후보 (앞에서부터 우선)
    pub font_paths: Vec<PathBuf>,
}

fn default_font_paths() -> Vec<PathBuf> {
    [
        r"C:\Windows\Fonts\malgun.ttf",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        let vocab = Vocabulary::default();
        Self {
            lecture_path: PathBuf::from("lecture_data.xlsx"),
            lecture_sheet: "인강".into(),
            textbook_path: PathBuf::from("textbook_data.xlsx"),
            textbook_sheet: None,
            image_width: 400,
            subject_order: vocab.subjects,
            publisher_order: vocab.publishers,
            font_paths: default_font_paths(),
        }
    }
}

impl Config {
    /// 설정 파일 + 환경 변수
    pub fn load() -> Result<Self> {
        let mut config = Self::load_stored()?;
        config.apply_env();
        Ok(config)
    }

    /// 설정 파일만 (없으면 기본값)
    pub fn load_stored() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FinderError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("lecture-finder").join("config.json"))
    }

    /// 환경 변수가 설정 파일보다 우선
    fn apply_env(&mut self) {
        if let Ok(path) = std::env::var(LECTURES_ENV) {
            self.lecture_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var(TEXTBOOKS_ENV) {
            self.textbook_path = PathBuf::from(path);
        }
    }

    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary {
            subjects: self.subject_order.clone(),
            publishers: self.publisher_order.clone(),
        }
    }
}
