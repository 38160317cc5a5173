//! 서브커맨드 본체
//!
//! 각 함수는 출력용 구조체를 돌려준다. 출력은 main에서.

use crate::asset::{resolve_image, ImageAsset, NO_INSTRUCTOR_IMAGE_TEXT, NO_TEXTBOOK_IMAGE_TEXT};
use crate::config::Config;
use crate::error::Result;
use crate::loader::{cached_lectures, cached_textbooks};
use crate::render;
use lecture_finder_common::{
    available_options, lecture_detail, textbook_detail, Choice, DetailView, LectureRecord,
    Session, TextbookFilter, TextbookRecord,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 상세 보기 + 해석된 이미지
#[derive(Debug, Clone, Serialize)]
pub struct Detail {
    #[serde(flatten)]
    pub view: DetailView,
    pub asset: ImageAsset,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureOutput {
    pub query: String,
    pub matches: Vec<LectureRecord>,
    pub selected: Option<Detail>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextbookOutput {
    pub subject: String,
    pub publisher: String,
    pub titles: Vec<String>,
    pub selected: Option<Detail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionsOutput {
    pub subjects: Vec<String>,
    pub publishers: Vec<String>,
}

pub(crate) fn data_dir(path: &Path) -> Option<PathBuf> {
    path.parent().map(Path::to_path_buf)
}

pub fn lecture_detail_with_image(record: &LectureRecord, config: &Config) -> Detail {
    let view = lecture_detail(record);
    let base = data_dir(&config.lecture_path);
    let asset = resolve_image(&view.image, base.as_deref(), NO_INSTRUCTOR_IMAGE_TEXT);
    Detail { view, asset }
}

pub fn textbook_detail_with_image(record: &TextbookRecord, config: &Config) -> Detail {
    let view = textbook_detail(record);
    let base = data_dir(&config.textbook_path);
    let asset = resolve_image(&view.image, base.as_deref(), NO_TEXTBOOK_IMAGE_TEXT);
    Detail { view, asset }
}

/// 강사명 검색 + 자동/직접 선택
pub fn lecture(config: &Config, query: &str, pick: Option<usize>) -> Result<LectureOutput> {
    let records = cached_lectures(&config.lecture_path, &config.lecture_sheet)?;
    let mut session = Session::new();

    let matches = session.set_instructor_query(&records, query);
    if let Some(row) = pick {
        session.pick_lecture(&records, row)?;
    }

    Ok(LectureOutput {
        query: query.to_string(),
        matches: render::matched_records(&records, &matches),
        selected: session
            .selected_lecture(&records)
            .map(|r| lecture_detail_with_image(r, config)),
    })
}

pub fn render_lecture(output: &LectureOutput) -> String {
    let mut out = render::lecture_list(&output.query, &output.matches);
    if let Some(detail) = &output.selected {
        out.push('\n');
        out.push_str(&render::detail(&detail.view, &detail.asset));
    }
    out
}

/// 과목/출판사 필터 + 교재명 선택
pub fn textbook(
    config: &Config,
    subject: &str,
    publisher: &str,
    title: Option<&str>,
) -> Result<TextbookOutput> {
    let records = cached_textbooks(&config.textbook_path, config.textbook_sheet.as_deref())?;
    let vocab = config.vocabulary();
    let filter = TextbookFilter::new(
        Choice::parse(subject, &vocab.subjects)?,
        Choice::parse(publisher, &vocab.publishers)?,
    );

    let mut session = Session::new();
    session.set_textbook_filter(&records, filter);
    if let Some(title) = title {
        session.pick_textbook(&records, title)?;
    }

    let filter = session.textbook_filter();
    Ok(TextbookOutput {
        subject: filter.subject.to_string(),
        publisher: filter.publisher.to_string(),
        titles: session.textbook_titles(&records),
        selected: session
            .selected_textbook(&records)
            .map(|r| textbook_detail_with_image(r, config)),
    })
}

pub fn render_textbook(output: &TextbookOutput) -> String {
    let mut out = format!("과목: {} / 출판사: {}\n", output.subject, output.publisher);
    out.push_str(&render::textbook_titles(&output.titles));
    if let Some(detail) = &output.selected {
        out.push('\n');
        out.push_str(&render::detail(&detail.view, &detail.asset));
    }
    out
}

/// 데이터에 실제로 있는 과목/출판사 (고정 순서)
pub fn options(config: &Config) -> Result<OptionsOutput> {
    let records = cached_textbooks(&config.textbook_path, config.textbook_sheet.as_deref())?;
    let vocab = config.vocabulary();
    Ok(OptionsOutput {
        subjects: available_options(&vocab.subjects, records.iter().map(|r| r.subject.as_str())),
        publishers: available_options(&vocab.publishers, records.iter().map(|r| r.publisher.as_str())),
    })
}

pub fn render_options(output: &OptionsOutput) -> String {
    let join = |values: &[String]| {
        std::iter::once("All".to_string())
            .chain(values.iter().cloned())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "과목: {}\n출판사: {}\n",
        join(&output.subjects),
        join(&output.publishers)
    )
}
