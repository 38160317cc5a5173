//! 테스트용 워크북 생성
#![allow(dead_code)]

use lecture_finder::config::Config;
use lecture_finder_common::columns::{lecture, textbook};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

pub const LECTURE_SHEET: &str = "인강";

/// 헤더 + 행을 시트 하나로 저장 (빈 문자열 셀은 쓰지 않음)
pub fn write_sheet(path: &Path, sheet: &str, headers: &[&str], rows: &[Vec<&str>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(r as u32 + 1, col as u16, *value).unwrap();
            }
        }
    }

    workbook.save(path).unwrap();
}

/// 정승제 2행, 이명학 1행
pub fn lecture_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec![
            "정승제", "개념때려잡기", "수학", "이투스", "고1~고2", "노베이스", "개념",
            "https://cdn.example.com/jung.png", "총 30강 / 평균 50분", "수와 식\n함수",
            "수학 노베이스\n\n개념부터 다시 시작하는 학생", "쉬운 설명\n  반복 학습  \n",
        ],
        vec![
            "이명학", "Syntax", "영어", "대성마이맥", "고2~고3", "중급", "구문",
            "img/lee.png", "총 20강", "구문 독해", "구문이 약한 학생", "문장 구조 분석",
        ],
        vec![
            "정승제", "50일 수학", "수학", "이투스", "고3", "입문", "속성",
            "", "총 50강", "", "", "",
        ],
    ]
}

/// 국어/수학 × ETOOS/EBS, 5행
pub fn textbook_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["국어", "ETOOS", "국어 개념서", "", "기본 50%\n심화 50%", "국어 기초가 약한 학생", "개념 정리", "고1", "고1", "개념서"],
        vec!["수학", "EBS", "수능특강 수학I", "https://cdn.example.com/ebs1.png", "기본 30%\n실전 70%", "수능 준비생", "연계 교재", "고3", "고3", "연계교재"],
        vec!["수학", "ETOOS", "수학 N제", "", "심화 100%", "1~2등급", "고난도 문항", "고3 여름", "고3", "N제"],
        vec!["국어", "EBS", "수능특강 문학", "", "", "", "", "고3", "고3", "연계교재"],
        vec!["수학", "EBS", "수능완성 수학", "", "실전 100%", "", "", "고3 가을", "고3", "연계교재"],
    ]
}

pub fn write_lectures(dir: &Path) -> PathBuf {
    let path = dir.join("lecture_data.xlsx");
    write_sheet(&path, LECTURE_SHEET, lecture::REQUIRED, &lecture_rows());
    path
}

pub fn write_textbooks(dir: &Path) -> PathBuf {
    let path = dir.join("textbook_data.xlsx");
    write_sheet(&path, "교재", textbook::REQUIRED, &textbook_rows());
    path
}

/// 두 데이터셋을 모두 쓰고 그 경로를 가리키는 설정
pub fn config_for(dir: &Path) -> Config {
    Config {
        lecture_path: write_lectures(dir),
        textbook_path: write_textbooks(dir),
        ..Config::default()
    }
}
