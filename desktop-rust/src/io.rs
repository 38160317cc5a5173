use anyhow::{Context, Result};
use image::{DynamicImage, ImageReader};
use std::path::PathBuf;
use std::time::Duration;

use lecture_finder::config::Config;
use lecture_finder::loader::{cached_lectures, cached_textbooks};
use lecture_finder_common::{LectureRecord, TextbookRecord, available_options};

use crate::model::{AppState, Dataset};

pub struct DecodedImage {
    pub size: [usize; 2],
    pub pixels: Vec<u8>,
}

pub fn load_lectures(config: &Config) -> Dataset<LectureRecord> {
    match cached_lectures(&config.lecture_path, &config.lecture_sheet) {
        Ok(records) => Dataset::Loaded(records),
        Err(err) => Dataset::Failed(err.to_string()),
    }
}

pub fn load_textbooks(config: &Config) -> Dataset<TextbookRecord> {
    match cached_textbooks(&config.textbook_path, config.textbook_sheet.as_deref()) {
        Ok(records) => Dataset::Loaded(records),
        Err(err) => Dataset::Failed(err.to_string()),
    }
}

/// 교재 데이터에 맞춰 과목/출판사 선택지 갱신
pub fn refresh_options(state: &mut AppState, config: &Config) {
    let vocab = config.vocabulary();
    let records = state.textbooks.records();
    let records = records.as_deref().unwrap_or(&[]);
    state.subject_options =
        available_options(&vocab.subjects, records.iter().map(|r| r.subject.as_str()));
    state.publisher_options =
        available_options(&vocab.publishers, records.iter().map(|r| r.publisher.as_str()));
}

/// 이미지를 가져올 곳
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// 로컬 경로 후보 (앞에서부터)
    Files(Vec<PathBuf>),
    Url(String),
}

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub fn load_image(source: &ImageSource, max_width: u32) -> Result<DecodedImage> {
    match source {
        ImageSource::Files(candidates) => decode_image(candidates, max_width),
        ImageSource::Url(url) => fetch_image(url, max_width),
    }
}

/// 이미지 경로 후보를 차례로 열어 첫 번째로 디코딩되는 것을 사용
pub fn decode_image(candidates: &[PathBuf], max_width: u32) -> Result<DecodedImage> {
    let path = candidates
        .iter()
        .find(|p| p.exists())
        .with_context(|| format!("image not found: {}", display_first(candidates)))?;

    let image = ImageReader::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("guess format {}", path.display()))?
        .decode()
        .with_context(|| format!("decode {}", path.display()))?;

    Ok(fit_width(image, max_width))
}

/// 원격 이미지를 받아 디코딩 (실패하면 호출 측에서 안내 문구)
pub fn fetch_image(url: &str, max_width: u32) -> Result<DecodedImage> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("build http client")?;
    let bytes = client
        .get(url)
        .send()
        .with_context(|| format!("fetch {url}"))?
        .error_for_status()
        .with_context(|| format!("fetch {url}"))?
        .bytes()
        .with_context(|| format!("read body {url}"))?;

    decode_bytes(&bytes, max_width).with_context(|| format!("decode {url}"))
}

pub fn decode_bytes(bytes: &[u8], max_width: u32) -> Result<DecodedImage> {
    let image = image::load_from_memory(bytes).context("unsupported image data")?;
    Ok(fit_width(image, max_width))
}

fn fit_width(image: DynamicImage, max_width: u32) -> DecodedImage {
    let image = if image.width() > max_width {
        image.thumbnail(max_width, u32::MAX)
    } else {
        image
    };
    let size = [image.width() as usize, image.height() as usize];
    DecodedImage {
        size,
        pixels: image.to_rgba8().into_raw(),
    }
}

fn display_first(candidates: &[PathBuf]) -> String {
    candidates
        .first()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}
