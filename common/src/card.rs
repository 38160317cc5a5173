//! 상세 카드 필드 매핑
//!
//! 선택된 레코드를 칩(라벨/값)과 카드(제목 + 줄 목록)로 바꾼다.
//! 화면 스타일은 다루지 않는다.

use crate::types::{ImageRef, LectureRecord, TextbookRecord};
use serde::{Deserialize, Serialize};

/// 라벨/값 표시 단위. 값이 비어도 자리는 유지한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub label: String,
    pub value: String,
}

/// 제목이 있는 줄 목록 블록
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub lines: Vec<String>,
}

/// 상세 보기 한 화면 분량
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub heading: String,
    pub subheading: String,
    pub image: ImageRef,
    pub chips: Vec<Chip>,
    pub cards: Vec<Card>,
}

pub const CURRICULUM_CARD: &str = "📘 강의 구성 및 커리큘럼";
pub const AUDIENCE_CARD: &str = "🎯 추천 학생";
pub const LECTURE_FEATURES_CARD: &str = "📝 강의 내용 및 특징";
pub const DIFFICULTY_CARD: &str = "📊 난이도 구성";
pub const STUDENTS_CARD: &str = "🎯 추천 학생";
pub const TEXTBOOK_FEATURES_CARD: &str = "📝 교재 특징";

/// 줄 단위로 나누고 앞뒤 공백 제거, 빈 줄은 버린다
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn chip(label: &str, value: &str) -> Chip {
    Chip {
        label: label.to_string(),
        value: value.trim().to_string(),
    }
}

fn card(title: &str, text: &str) -> Card {
    Card {
        title: title.to_string(),
        lines: split_lines(text),
    }
}

pub fn lecture_chips(record: &LectureRecord) -> Vec<Chip> {
    vec![
        chip("과목", &record.subject),
        chip("사이트", &record.site),
        chip("추천시기", &record.timing),
        chip("추천레벨", &record.level),
        chip("강의성격", &record.character),
    ]
}

pub fn lecture_cards(record: &LectureRecord) -> Vec<Card> {
    // 총강의수 줄 아래에 커리큘럼을 붙인다 (비어 있어도 줄은 남김)
    let composition = format!("{}\n커리큘럼: {}", record.runtime, record.curriculum);

    vec![
        card(CURRICULUM_CARD, &composition),
        card(AUDIENCE_CARD, &record.audience),
        card(LECTURE_FEATURES_CARD, &record.features),
    ]
}

pub fn lecture_detail(record: &LectureRecord) -> DetailView {
    DetailView {
        heading: record.course_title.clone(),
        subheading: record.instructor.clone(),
        image: record.image_ref(),
        chips: lecture_chips(record),
        cards: lecture_cards(record),
    }
}

pub fn textbook_chips(record: &TextbookRecord) -> Vec<Chip> {
    vec![
        chip("과목", &record.subject),
        chip("출판사", &record.publisher),
        chip("추천시기", &record.timing),
        chip("추천학년", &record.grade),
        chip("교재성격", &record.character),
    ]
}

pub fn textbook_cards(record: &TextbookRecord) -> Vec<Card> {
    vec![
        card(DIFFICULTY_CARD, &record.difficulty),
        card(STUDENTS_CARD, &record.students),
        card(TEXTBOOK_FEATURES_CARD, &record.features),
    ]
}

pub fn textbook_detail(record: &TextbookRecord) -> DetailView {
    DetailView {
        heading: record.title.clone(),
        subheading: record.publisher.clone(),
        image: record.image_ref(),
        chips: textbook_chips(record),
        cards: textbook_cards(record),
    }
}
