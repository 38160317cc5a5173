//! 세션 상태
//!
//! 사용자 한 명의 검색어, 필터, 선택을 담는다. 카탈로그 자체는 밖에서 빌려 받는다.

use crate::error::Result;
use crate::filter::{filter_lectures, filter_textbooks, titles, LectureMatches, TextbookFilter};
use crate::selection::{LectureSelection, TextbookSelection};
use crate::types::{LectureRecord, TextbookRecord};
use crate::vocab::Choice;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    instructor_query: String,
    lecture: LectureSelection,
    textbook_filter: TextbookFilter,
    textbook: TextbookSelection,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instructor_query(&self) -> &str {
        &self.instructor_query
    }

    pub fn lecture_selection(&self) -> LectureSelection {
        self.lecture
    }

    pub fn textbook_filter(&self) -> &TextbookFilter {
        &self.textbook_filter
    }

    pub fn textbook_selection(&self) -> &TextbookSelection {
        &self.textbook
    }

    // ---- 인강 ----

    /// 강사명 입력 처리. 새 검색 결과를 돌려준다.
    pub fn set_instructor_query(&mut self, records: &[LectureRecord], query: &str) -> LectureMatches {
        self.lecture = self
            .lecture
            .after_query_change(records, &self.instructor_query, query);
        self.instructor_query = query.to_string();
        filter_lectures(records, query)
    }

    pub fn lecture_matches(&self, records: &[LectureRecord]) -> LectureMatches {
        filter_lectures(records, &self.instructor_query)
    }

    /// 목록의 강좌 버튼 선택
    pub fn pick_lecture(&mut self, records: &[LectureRecord], row: usize) -> Result<()> {
        let matches = self.lecture_matches(records);
        self.lecture = self.lecture.after_pick(&matches, row)?;
        Ok(())
    }

    pub fn selected_lecture<'a>(&self, records: &'a [LectureRecord]) -> Option<&'a LectureRecord> {
        self.lecture.row().and_then(|row| records.get(row))
    }

    // ---- 교재 ----

    pub fn set_subject(&mut self, records: &[TextbookRecord], subject: Choice) {
        let filter = TextbookFilter::new(subject, self.textbook_filter.publisher.clone());
        self.set_textbook_filter(records, filter);
    }

    pub fn set_publisher(&mut self, records: &[TextbookRecord], publisher: Choice) {
        let filter = TextbookFilter::new(self.textbook_filter.subject.clone(), publisher);
        self.set_textbook_filter(records, filter);
    }

    pub fn set_textbook_filter(&mut self, records: &[TextbookRecord], filter: TextbookFilter) {
        self.textbook_filter = filter;
        let titles = self.textbook_titles(records);
        self.textbook = std::mem::take(&mut self.textbook).after_filter_change(&titles);
    }

    pub fn filtered_textbooks<'a>(&self, records: &'a [TextbookRecord]) -> Vec<&'a TextbookRecord> {
        filter_textbooks(records, &self.textbook_filter)
    }

    pub fn textbook_titles(&self, records: &[TextbookRecord]) -> Vec<String> {
        titles(&self.filtered_textbooks(records))
    }

    pub fn pick_textbook(&mut self, records: &[TextbookRecord], title: &str) -> Result<()> {
        let titles = self.textbook_titles(records);
        self.textbook = self.textbook.clone().after_pick(&titles, title)?;
        Ok(())
    }

    pub fn clear_textbook_pick(&mut self) {
        self.textbook = TextbookSelection::NoSelection;
    }

    /// 선택된 교재명과 일치하는 첫 레코드 (현재 필터 범위 안에서)
    pub fn selected_textbook<'a>(&self, records: &'a [TextbookRecord]) -> Option<&'a TextbookRecord> {
        let title = self.textbook.title()?;
        self.filtered_textbooks(records)
            .into_iter()
            .find(|r| r.title == title)
    }
}
