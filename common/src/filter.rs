//! 필터 엔진
//!
//! - 인강: 강사명 부분 문자열 일치 (대소문자 구분)
//! - 교재: 과목 × 출판사 정확 일치, 각각 `All`이면 제한 없음

use crate::types::{LectureRecord, TextbookRecord};
use crate::vocab::Choice;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 강의 목록 한 줄에 놓는 버튼 수
pub const LECTURE_GRID_COLUMNS: usize = 3;

/// 강사명 검색 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LectureMatches {
    /// 검색어 없음: 목록 자체를 보여주지 않는다
    NoQuery,
    /// 검색어는 있지만 일치하는 강의가 없음
    Empty,
    /// 일치한 행 위치 (원본 순서)
    Found(Vec<usize>),
}

impl LectureMatches {
    pub fn rows(&self) -> &[usize] {
        match self {
            LectureMatches::Found(rows) => rows,
            _ => &[],
        }
    }

    pub fn first(&self) -> Option<usize> {
        self.rows().first().copied()
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows().contains(&row)
    }
}

/// 강사명으로 강의 필터링
///
/// 빈 검색어는 "전체"가 아니라 `NoQuery`이다.
pub fn filter_lectures(records: &[LectureRecord], query: &str) -> LectureMatches {
    if query.is_empty() {
        return LectureMatches::NoQuery;
    }

    let rows: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.instructor.contains(query))
        .map(|(i, _)| i)
        .collect();

    if rows.is_empty() {
        LectureMatches::Empty
    } else {
        LectureMatches::Found(rows)
    }
}

/// 교재 필터 조건
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextbookFilter {
    pub subject: Choice,
    pub publisher: Choice,
}

impl TextbookFilter {
    pub fn new(subject: Choice, publisher: Choice) -> Self {
        Self { subject, publisher }
    }

    pub fn matches(&self, record: &TextbookRecord) -> bool {
        self.subject.matches(&record.subject) && self.publisher.matches(&record.publisher)
    }
}

/// 과목/출판사 조건으로 교재 필터링 (원본 순서 유지)
pub fn filter_textbooks<'a>(
    records: &'a [TextbookRecord],
    filter: &TextbookFilter,
) -> Vec<&'a TextbookRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// 선택 목록에 표시할 교재명 (중복은 첫 등장만 남김)
pub fn titles(filtered: &[&TextbookRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    filtered
        .iter()
        .filter(|r| !r.title.trim().is_empty())
        .filter_map(|r| {
            if seen.insert(r.title.as_str()) {
                Some(r.title.clone())
            } else {
                None
            }
        })
        .collect()
}

/// 결과 목록을 한 줄 `per_row`개씩 나눔
pub fn chunk_rows<T>(items: &[T], per_row: usize) -> Vec<&[T]> {
    items.chunks(per_row.max(1)).collect()
}
