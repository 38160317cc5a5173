//! 선택 상태 전이
//!
//! 상태 자체는 값 타입이고, 전이는 새 상태를 돌려주는 순수 함수로 둔다.

use crate::error::{Error, Result};
use crate::filter::{filter_lectures, LectureMatches};
use crate::types::LectureRecord;
use serde::{Deserialize, Serialize};

/// 인강 상세 보기 선택 상태
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LectureSelection {
    #[default]
    NoSelection,
    /// 선택된 행 위치
    Selected(usize),
}

impl LectureSelection {
    pub fn row(&self) -> Option<usize> {
        match self {
            LectureSelection::Selected(row) => Some(*row),
            LectureSelection::NoSelection => None,
        }
    }

    /// 강사명 입력이 `previous`에서 `next`로 바뀌었을 때의 다음 상태
    ///
    /// - 빈 입력 → 선택 해제
    /// - 입력이 그대로면 현재 상태 유지
    /// - 현재 선택의 강사명이 새 입력과 같으면 유지
    /// - 그 외에는 새 결과의 첫 행, 결과가 없으면 선택 해제
    pub fn after_query_change(
        self,
        records: &[LectureRecord],
        previous: &str,
        next: &str,
    ) -> LectureSelection {
        if next.is_empty() {
            return LectureSelection::NoSelection;
        }
        if previous == next {
            return self;
        }

        let keeps_current = self
            .row()
            .and_then(|row| records.get(row))
            .is_some_and(|r| r.instructor == next);
        if keeps_current {
            return self;
        }

        match filter_lectures(records, next).first() {
            Some(row) => LectureSelection::Selected(row),
            None => LectureSelection::NoSelection,
        }
    }

    /// 목록에서 강좌를 직접 고른 경우
    ///
    /// 현재 검색 결과에 없는 행은 거부하고 상태를 바꾸지 않는다.
    pub fn after_pick(self, matches: &LectureMatches, row: usize) -> Result<LectureSelection> {
        if matches.contains(row) {
            Ok(LectureSelection::Selected(row))
        } else {
            Err(Error::NotInResults(format!("{}행", row)))
        }
    }
}

/// 교재 상세 보기 선택 상태 (자동 기본값 없음)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextbookSelection {
    #[default]
    NoSelection,
    Selected(String),
}

impl TextbookSelection {
    pub fn title(&self) -> Option<&str> {
        match self {
            TextbookSelection::Selected(title) => Some(title),
            TextbookSelection::NoSelection => None,
        }
    }

    /// 필터가 바뀌어 교재명 목록이 다시 계산된 경우
    pub fn after_filter_change(self, titles: &[String]) -> TextbookSelection {
        match self {
            TextbookSelection::Selected(title) if titles.contains(&title) => {
                TextbookSelection::Selected(title)
            }
            _ => TextbookSelection::NoSelection,
        }
    }

    pub fn after_pick(self, titles: &[String], title: &str) -> Result<TextbookSelection> {
        if titles.iter().any(|t| t == title) {
            Ok(TextbookSelection::Selected(title.to_string()))
        } else {
            Err(Error::NotInResults(title.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::fixtures::lectures;

    #[test]
    fn test_empty_query_clears_selection() {
        let records = lectures();
        let state = LectureSelection::Selected(0).after_query_change(&records, "정승제", "");
        assert_eq!(state, LectureSelection::NoSelection);

        let state = LectureSelection::NoSelection.after_query_change(&records, "", "");
        assert_eq!(state, LectureSelection::NoSelection);
    }

    #[test]
    fn test_query_change_selects_first_row() {
        let records = lectures();
        let state = LectureSelection::NoSelection.after_query_change(&records, "", "정승제");
        assert_eq!(state, LectureSelection::Selected(0));

        let state = state.after_query_change(&records, "정승제", "이명학");
        assert_eq!(state, LectureSelection::Selected(1));
    }

    #[test]
    fn test_query_change_without_match() {
        let records = lectures();
        let state = LectureSelection::Selected(0).after_query_change(&records, "정승제", "정승제학");
        assert_eq!(state, LectureSelection::NoSelection);
    }

    #[test]
    fn test_query_change_keeps_selection_for_same_instructor() {
        let records = lectures();
        // 정승제의 두 번째 강좌를 보던 중 "정승"에서 "정승제"로 입력을 완성
        let state = LectureSelection::Selected(2).after_query_change(&records, "정승", "정승제");
        assert_eq!(state, LectureSelection::Selected(2));
    }

    #[test]
    fn test_unchanged_query_is_noop() {
        let records = lectures();
        let state = LectureSelection::Selected(2).after_query_change(&records, "정", "정");
        assert_eq!(state, LectureSelection::Selected(2));
    }

    #[test]
    fn test_pick_overrides_default() {
        let records = lectures();
        let matches = filter_lectures(&records, "정");
        let state = LectureSelection::Selected(0).after_pick(&matches, 2).unwrap();
        assert_eq!(state, LectureSelection::Selected(2));
    }

    #[test]
    fn test_pick_outside_results_rejected() {
        let records = lectures();
        let matches = filter_lectures(&records, "정승제");
        let err = LectureSelection::Selected(0).after_pick(&matches, 1).unwrap_err();
        assert!(matches!(err, Error::NotInResults(_)));

        let err = LectureSelection::NoSelection
            .after_pick(&LectureMatches::NoQuery, 0)
            .unwrap_err();
        assert!(matches!(err, Error::NotInResults(_)));
    }

    #[test]
    fn test_textbook_filter_change_drops_missing_title() {
        let titles = vec!["수능특강 수학I".to_string(), "수학 N제".to_string()];
        let state = TextbookSelection::Selected("국어 개념서".into()).after_filter_change(&titles);
        assert_eq!(state, TextbookSelection::NoSelection);

        let state = TextbookSelection::Selected("수학 N제".into()).after_filter_change(&titles);
        assert_eq!(state.title(), Some("수학 N제"));
    }

    #[test]
    fn test_textbook_pick() {
        let titles = vec!["수능특강 수학I".to_string()];
        let state = TextbookSelection::NoSelection.after_pick(&titles, "수능특강 수학I").unwrap();
        assert_eq!(state, TextbookSelection::Selected("수능특강 수학I".into()));

        assert!(TextbookSelection::NoSelection.after_pick(&titles, "없는 교재").is_err());
        assert!(TextbookSelection::NoSelection.after_pick(&[], "수능특강 수학I").is_err());
    }
}
