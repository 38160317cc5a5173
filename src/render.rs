//! 터미널 출력용 렌더링
//!
//! 모든 함수는 문자열을 돌려주고, 출력은 호출하는 쪽에서 한다.

use crate::asset::ImageAsset;
use lecture_finder_common::filter::LECTURE_GRID_COLUMNS;
use lecture_finder_common::{chunk_rows, DetailView, LectureMatches, LectureRecord};
use std::fmt::Write;

pub const NO_LECTURE_TEXT: &str = "⚠ 해당 강사의 강의가 없습니다.";
pub const NO_TEXTBOOK_TEXT: &str = "⚠ 조건에 맞는 교재가 없습니다.";

/// 강의 목록 (한 줄 세 개씩). 검색어가 없으면 빈 문자열.
///
/// 대괄호 안 번호는 `--pick`에 넘기는 행 번호.
pub fn lecture_list(query: &str, matched: &[LectureRecord]) -> String {
    if query.is_empty() {
        return String::new();
    }
    if matched.is_empty() {
        return format!("{}\n", NO_LECTURE_TEXT);
    }

    let mut out = String::from("📚 강의 목록\n");
    for chunk in chunk_rows(matched, LECTURE_GRID_COLUMNS) {
        let line = chunk
            .iter()
            .map(|r| format!("[{}] {}", r.row, r.course_title))
            .collect::<Vec<_>>()
            .join("   ");
        let _ = writeln!(out, "  {}", line);
    }
    out
}

/// 검색 결과 행 → 레코드 복사본
pub fn matched_records(records: &[LectureRecord], matches: &LectureMatches) -> Vec<LectureRecord> {
    matches
        .rows()
        .iter()
        .filter_map(|&row| records.get(row).cloned())
        .collect()
}

/// 교재명 목록
pub fn textbook_titles(titles: &[String]) -> String {
    if titles.is_empty() {
        return format!("{}\n", NO_TEXTBOOK_TEXT);
    }
    let mut out = format!("📚 교재 목록 ({}권)\n", titles.len());
    for title in titles {
        let _ = writeln!(out, "  - {}", title);
    }
    out
}

fn image_line(asset: &ImageAsset) -> String {
    match asset {
        ImageAsset::Remote { url } => format!("🖼 {}", url),
        ImageAsset::Inline { mime, data } => format!("🖼 ({}, base64 {}자)", mime, data.len()),
        ImageAsset::Placeholder { text } => text.clone(),
    }
}

/// 상세 카드
pub fn detail(view: &DetailView, asset: &ImageAsset) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "━━ {} ━━", view.heading);
    if !view.subheading.is_empty() {
        let _ = writeln!(out, "{}", view.subheading);
    }
    let _ = writeln!(out, "{}", image_line(asset));

    let chips = view
        .chips
        .iter()
        .map(|c| format!("[{}: {}]", c.label, c.value))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "{}", chips);

    for card in &view.cards {
        let _ = writeln!(out, "\n{}", card.title);
        for line in &card.lines {
            let _ = writeln!(out, "  • {}", line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lecture_finder_common::{filter_lectures, lecture_detail};

    fn records() -> Vec<LectureRecord> {
        ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(row, title)| LectureRecord {
                row,
                instructor: "정승제".into(),
                course_title: title.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_lecture_list_grid() {
        let records = records();
        let matched = matched_records(&records, &filter_lectures(&records, "정승제"));
        let out = lecture_list("정승제", &matched);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "📚 강의 목록");
        assert_eq!(lines[1], "  [0] A   [1] B   [2] C");
        assert_eq!(lines[2], "  [3] D");
    }

    #[test]
    fn test_lecture_list_states() {
        let records = records();
        assert_eq!(lecture_list("", &records), "");
        assert!(lecture_list("정승제학", &[]).contains("해당 강사의 강의가 없습니다"));
    }

    #[test]
    fn test_textbook_titles_empty() {
        assert!(textbook_titles(&[]).contains("조건에 맞는 교재가 없습니다"));
        let out = textbook_titles(&["수능특강 문학".to_string()]);
        assert!(out.contains("(1권)"));
        assert!(out.contains("  - 수능특강 문학"));
    }

    #[test]
    fn test_detail_renders_empty_chips() {
        let record = LectureRecord {
            instructor: "이명학".into(),
            course_title: "Syntax".into(),
            subject: "영어".into(),
            audience: "구문 입문자\n\n".into(),
            ..Default::default()
        };
        let asset = ImageAsset::Placeholder { text: "🖼 강사 이미지 없음".into() };
        let out = detail(&lecture_detail(&record), &asset);

        assert!(out.starts_with("━━ Syntax ━━\n이명학\n🖼 강사 이미지 없음\n"));
        assert!(out.contains("[과목: 영어] [사이트: ] [추천시기: ] [추천레벨: ] [강의성격: ]"));
        assert!(out.contains("🎯 추천 학생\n  • 구문 입문자\n"));
    }
}
