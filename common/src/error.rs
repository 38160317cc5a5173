//! 에러 타입 정의

use thiserror::Error;

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    #[error("알 수 없는 선택지: {value} (가능한 값: {allowed})")]
    UnknownChoice { value: String, allowed: String },

    #[error("현재 검색 결과에 없는 항목: {0}")]
    NotInResults(String),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;
