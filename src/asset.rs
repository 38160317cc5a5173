//! 이미지 참조 해석
//!
//! - 원격 URL: 그대로 넘김 (표시는 UI 쪽에서 최선 노력)
//! - 로컬 파일: 읽어서 base64 data URL로 인라인
//! - 파일이 없거나 참조가 비어 있으면 안내 문구로 대체
//!
//! 어떤 경우에도 에러를 내지 않는다.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;
use lecture_finder_common::ImageRef;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const FILE_NOT_FOUND_TEXT: &str = "🖼 이미지 파일을 찾을 수 없습니다.";
pub const NO_INSTRUCTOR_IMAGE_TEXT: &str = "🖼 강사 이미지 없음";
pub const NO_TEXTBOOK_IMAGE_TEXT: &str = "🖼 교재 이미지 없음";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ImageAsset {
    Remote { url: String },
    Inline { mime: String, data: String },
    Placeholder { text: String },
}

impl ImageAsset {
    /// `<img src=...>`에 넣을 수 있는 값
    pub fn src(&self) -> Option<String> {
        match self {
            ImageAsset::Remote { url } => Some(url.clone()),
            ImageAsset::Inline { mime, data } => Some(format!("data:{};base64,{}", mime, data)),
            ImageAsset::Placeholder { .. } => None,
        }
    }

    fn placeholder(text: &str) -> Self {
        ImageAsset::Placeholder { text: text.to_string() }
    }
}

/// 로컬 경로 후보: 그대로, 그다음 데이터 파일 기준 상대 경로
pub fn local_candidates(path: &str, base_dir: Option<&Path>) -> Vec<PathBuf> {
    let direct = PathBuf::from(path);
    let mut candidates = vec![direct.clone()];
    if direct.is_relative() {
        if let Some(base) = base_dir {
            candidates.push(base.join(&direct));
        }
    }
    candidates
}

fn mime_for(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|f| f.to_mime_type())
        .unwrap_or("image/png")
}

/// 이미지 참조를 표시용 자산으로 변환
///
/// `missing_text`는 참조 자체가 비어 있을 때의 문구.
pub fn resolve_image(image: &ImageRef, base_dir: Option<&Path>, missing_text: &str) -> ImageAsset {
    match image {
        ImageRef::Remote(url) => ImageAsset::Remote { url: url.clone() },
        ImageRef::Missing => ImageAsset::placeholder(missing_text),
        ImageRef::Local(path) => {
            for candidate in local_candidates(path, base_dir) {
                if let Ok(bytes) = std::fs::read(&candidate) {
                    return ImageAsset::Inline {
                        mime: mime_for(&candidate).to_string(),
                        data: STANDARD.encode(bytes),
                    };
                }
            }
            warn!(path = %path, "이미지 파일 없음");
            ImageAsset::placeholder(FILE_NOT_FOUND_TEXT)
        }
    }
}
