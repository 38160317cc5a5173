use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("시트를 찾을 수 없습니다: {sheet} ({path})")]
    SheetNotFound { path: String, sheet: String },

    #[error("필수 컬럼이 없습니다: {column} ({path})")]
    MissingColumn { path: String, column: String },

    #[error("엑셀 파일을 읽을 수 없습니다: {0}")]
    Workbook(String),

    #[error("입력 오류: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] lecture_finder_common::Error),
}

impl FinderError {
    /// 데이터셋 로딩 실패 여부 (해당 탭 기능 전체가 동작할 수 없음)
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            FinderError::FileNotFound(_)
                | FinderError::SheetNotFound { .. }
                | FinderError::MissingColumn { .. }
                | FinderError::Workbook(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
