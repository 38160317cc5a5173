//! 카탈로그 로딩 테스트
//!
//! rust_xlsxwriter로 만든 워크북을 calamine으로 다시 읽어 검증

mod support;

use lecture_finder::error::FinderError;
use lecture_finder::loader::{cached_lectures, cached_textbooks, clear_cache, load_lectures, load_textbooks};
use lecture_finder_common::columns::lecture;
use lecture_finder_common::{filter_lectures, LectureMatches};
use rust_xlsxwriter::Workbook;
use std::sync::Arc;
use support::*;
use tempfile::tempdir;

/// 행 순서와 필드 매핑
#[test]
fn test_load_lectures_preserves_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_lectures(dir.path());

    let records = load_lectures(&path, LECTURE_SHEET).expect("로딩 실패");
    assert_eq!(records.len(), 3);

    let instructors: Vec<_> = records.iter().map(|r| r.instructor.as_str()).collect();
    assert_eq!(instructors, vec!["정승제", "이명학", "정승제"]);
    let rows: Vec<_> = records.iter().map(|r| r.row).collect();
    assert_eq!(rows, vec![0, 1, 2]);

    let first = &records[0];
    assert_eq!(first.course_title, "개념때려잡기");
    assert_eq!(first.site, "이투스");
    assert_eq!(first.image.as_deref(), Some("https://cdn.example.com/jung.png"));
    assert_eq!(first.curriculum, "수와 식\n함수");

    // 빈 셀은 빈 문자열, 이미지는 None
    let last = &records[2];
    assert_eq!(last.image, None);
    assert_eq!(last.curriculum, "");
    assert_eq!(last.features, "");
}

/// 빈 행은 건너뛰고 숫자 셀은 문자열로
#[test]
fn test_load_lectures_blank_rows_and_numbers() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("numbers.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(LECTURE_SHEET).unwrap();
    for (col, header) in lecture::REQUIRED.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    worksheet.write_string(1, 0, "정승제").unwrap();
    worksheet.write_number(1, 5, 3).unwrap();
    // 2행은 통째로 비움
    worksheet.write_string(3, 0, "이명학").unwrap();
    worksheet.write_number(3, 5, 2.5).unwrap();
    workbook.save(&path).unwrap();

    let records = load_lectures(&path, LECTURE_SHEET).expect("로딩 실패");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level, "3");
    assert_eq!(records[1].instructor, "이명학");
    assert_eq!(records[1].level, "2.5");
    assert_eq!(records[1].row, 1);
}

/// 강사명은 셀 그대로 보관하고 검색은 그대로의 부분 문자열로
#[test]
fn test_instructor_kept_as_loaded() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("spaces.xlsx");
    let row = vec![
        " 정승제 ", "개념때려잡기", "수학", "이투스", "", "", "", "", "총 30강", "", "", "",
    ];
    write_sheet(&path, LECTURE_SHEET, lecture::REQUIRED, &[row]);

    let records = load_lectures(&path, LECTURE_SHEET).expect("로딩 실패");
    assert_eq!(records[0].instructor, " 정승제 ");
    assert_eq!(filter_lectures(&records, " 정승제"), LectureMatches::Found(vec![0]));
    assert_eq!(filter_lectures(&records, "승제 "), LectureMatches::Found(vec![0]));
}

/// 파일이 없으면 FileNotFound
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = load_lectures(&dir.path().join("없음.xlsx"), LECTURE_SHEET).unwrap_err();

    assert!(matches!(err, FinderError::FileNotFound(_)));
    assert!(err.is_load_error());
}

/// 시트 이름이 다르면 SheetNotFound
#[test]
fn test_load_missing_sheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_lectures(dir.path());

    let err = load_lectures(&path, "강의").unwrap_err();
    match &err {
        FinderError::SheetNotFound { sheet, .. } => assert_eq!(sheet, "강의"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.is_load_error());
}

/// 컬럼 이름이 바뀌면 MissingColumn
#[test]
fn test_load_missing_column() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("renamed.xlsx");

    let headers: Vec<&str> = lecture::REQUIRED
        .iter()
        .map(|h| if *h == lecture::AUDIENCE { "추천대상" } else { *h })
        .collect();
    write_sheet(&path, LECTURE_SHEET, &headers, &lecture_rows());

    let err = load_lectures(&path, LECTURE_SHEET).unwrap_err();
    match &err {
        FinderError::MissingColumn { column, .. } => assert_eq!(column, "수강대상"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.is_load_error());
}

/// 워크북이 아닌 파일
#[test]
fn test_load_not_a_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"not a zip").unwrap();

    let err = load_textbooks(&path, None).unwrap_err();
    assert!(matches!(err, FinderError::Workbook(_)));
}

/// 시트 이름 생략 시 첫 시트
#[test]
fn test_load_textbooks_first_sheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_textbooks(dir.path());

    let records = load_textbooks(&path, None).expect("로딩 실패");
    assert_eq!(records.len(), 5);
    assert_eq!(records[1].title, "수능특강 수학I");
    assert_eq!(records[1].publisher, "EBS");
    assert_eq!(records[0].image, None);
    assert_eq!(records[2].difficulty, "심화 100%");

    let named = load_textbooks(&path, Some("교재")).expect("로딩 실패");
    assert_eq!(named, records);
}

/// 한 번 읽은 데이터셋은 다시 읽지 않음
#[test]
fn test_cache_reuses_loaded_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let lectures = write_lectures(dir.path());
    let textbooks = write_textbooks(dir.path());

    let first = cached_lectures(&lectures, LECTURE_SHEET).unwrap();
    let second = cached_lectures(&lectures, LECTURE_SHEET).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    // 파일을 바꿔도 캐시에서 나옴
    let books = cached_textbooks(&textbooks, None).unwrap();
    write_sheet(
        &textbooks,
        "교재",
        lecture_finder_common::columns::textbook::REQUIRED,
        &textbook_rows()[..1],
    );
    let again = cached_textbooks(&textbooks, None).unwrap();
    assert!(Arc::ptr_eq(&books, &again));
    assert_eq!(again.len(), 5);

    // 실패는 캐시되지 않음
    let missing = dir.path().join("later.xlsx");
    assert!(cached_textbooks(&missing, None).is_err());
    write_sheet(
        &missing,
        "교재",
        lecture_finder_common::columns::textbook::REQUIRED,
        &textbook_rows(),
    );
    assert_eq!(cached_textbooks(&missing, None).unwrap().len(), 5);

    clear_cache();
    let reloaded = cached_lectures(&lectures, LECTURE_SHEET).unwrap();
    assert!(!Arc::ptr_eq(&first, &reloaded));
    assert_eq!(reloaded[..], first[..]);
}
