//! 인강/교재 카탈로그 검색기
//!
//! 필터/선택 로직은 `lecture_finder_common`에 있고,
//! 이 크레이트는 엑셀 로딩, 이미지 해석, 설정, 터미널 UI를 맡는다.

pub mod asset;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod shell;
