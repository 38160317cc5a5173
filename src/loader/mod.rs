//! 카탈로그 로더
//!
//! 인강/교재 워크북을 읽어 레코드 목록으로 만든다.
//! 한 번 읽은 데이터셋은 프로세스가 끝날 때까지 캐시한다.

pub mod sheet;

use crate::error::Result;
use lazy_static::lazy_static;
use lecture_finder_common::columns::{lecture, textbook};
use lecture_finder_common::{LectureRecord, TextbookRecord};
use sheet::{cell, read_table};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

type CacheKey = (PathBuf, Option<String>);
type Cache<T> = Mutex<HashMap<CacheKey, Arc<[T]>>>;

lazy_static! {
    static ref LECTURE_CACHE: Cache<LectureRecord> = Mutex::new(HashMap::new());
    static ref TEXTBOOK_CACHE: Cache<TextbookRecord> = Mutex::new(HashMap::new());
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// 인강 시트 읽기
pub fn load_lectures(path: &Path, sheet_name: &str) -> Result<Vec<LectureRecord>> {
    let table = read_table(path, Some(sheet_name))?;
    table.require(lecture::REQUIRED)?;

    let instructor = table.column(lecture::INSTRUCTOR)?;
    let course_title = table.column(lecture::COURSE_TITLE)?;
    let subject = table.column(lecture::SUBJECT)?;
    let site = table.column(lecture::SITE)?;
    let timing = table.column(lecture::TIMING)?;
    let level = table.column(lecture::LEVEL)?;
    let character = table.column(lecture::CHARACTER)?;
    let image = table.column(lecture::IMAGE)?;
    let runtime = table.column(lecture::RUNTIME)?;
    let curriculum = table.column(lecture::CURRICULUM)?;
    let audience = table.column(lecture::AUDIENCE)?;
    let features = table.column(lecture::FEATURES)?;

    let records: Vec<LectureRecord> = table
        .rows()
        .iter()
        .enumerate()
        .map(|(row, r)| LectureRecord {
            row,
            // 강사명은 셀 값 그대로 (검색은 원문 부분 문자열)
            instructor: cell(r, instructor).to_string(),
            course_title: cell(r, course_title).trim().to_string(),
            subject: cell(r, subject).trim().to_string(),
            site: cell(r, site).trim().to_string(),
            timing: cell(r, timing).trim().to_string(),
            level: cell(r, level).trim().to_string(),
            character: cell(r, character).trim().to_string(),
            image: optional(cell(r, image)),
            runtime: cell(r, runtime).to_string(),
            curriculum: cell(r, curriculum).to_string(),
            audience: cell(r, audience).to_string(),
            features: cell(r, features).to_string(),
        })
        .collect();

    info!(path = %path.display(), count = records.len(), "인강 데이터 로드");
    Ok(records)
}

/// 교재 시트 읽기 (`sheet_name`이 없으면 첫 시트)
pub fn load_textbooks(path: &Path, sheet_name: Option<&str>) -> Result<Vec<TextbookRecord>> {
    let table = read_table(path, sheet_name)?;
    table.require(textbook::REQUIRED)?;

    let subject = table.column(textbook::SUBJECT)?;
    let publisher = table.column(textbook::PUBLISHER)?;
    let title = table.column(textbook::TITLE)?;
    let image = table.column(textbook::IMAGE)?;
    let difficulty = table.column(textbook::DIFFICULTY)?;
    let students = table.column(textbook::STUDENTS)?;
    let features = table.column(textbook::FEATURES)?;
    let timing = table.column(textbook::TIMING)?;
    let grade = table.column(textbook::GRADE)?;
    let character = table.column(textbook::CHARACTER)?;

    let records: Vec<TextbookRecord> = table
        .rows()
        .iter()
        .map(|r| TextbookRecord {
            subject: cell(r, subject).trim().to_string(),
            publisher: cell(r, publisher).trim().to_string(),
            title: cell(r, title).trim().to_string(),
            image: optional(cell(r, image)),
            difficulty: cell(r, difficulty).to_string(),
            students: cell(r, students).to_string(),
            features: cell(r, features).to_string(),
            timing: cell(r, timing).trim().to_string(),
            grade: cell(r, grade).trim().to_string(),
            character: cell(r, character).trim().to_string(),
        })
        .collect();

    info!(path = %path.display(), count = records.len(), "교재 데이터 로드");
    Ok(records)
}

fn cache_key(path: &Path, sheet_name: Option<&str>) -> CacheKey {
    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    (path, sheet_name.map(str::to_string))
}

fn cached<T, F>(cache: &Cache<T>, key: CacheKey, load: F) -> Result<Arc<[T]>>
where
    F: FnOnce() -> Result<Vec<T>>,
{
    let mut cache = cache.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(hit) = cache.get(&key) {
        debug!(path = %key.0.display(), "캐시 사용");
        return Ok(Arc::clone(hit));
    }

    // 실패는 캐시하지 않음
    let records: Arc<[T]> = load()?.into();
    cache.insert(key, Arc::clone(&records));
    Ok(records)
}

/// 캐시를 거쳐 인강 데이터를 얻음
pub fn cached_lectures(path: &Path, sheet_name: &str) -> Result<Arc<[LectureRecord]>> {
    cached(&LECTURE_CACHE, cache_key(path, Some(sheet_name)), || {
        load_lectures(path, sheet_name)
    })
}

/// 캐시를 거쳐 교재 데이터를 얻음
pub fn cached_textbooks(path: &Path, sheet_name: Option<&str>) -> Result<Arc<[TextbookRecord]>> {
    cached(&TEXTBOOK_CACHE, cache_key(path, sheet_name), || {
        load_textbooks(path, sheet_name)
    })
}

/// 캐시 비우기 (다시 읽기용)
pub fn clear_cache() {
    LECTURE_CACHE.lock().unwrap_or_else(|e| e.into_inner()).clear();
    TEXTBOOK_CACHE.lock().unwrap_or_else(|e| e.into_inner()).clear();
}
