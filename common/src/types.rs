//! 카탈로그 레코드 타입 정의
//!
//! - LectureRecord: 인강 시트의 한 행
//! - TextbookRecord: 교재 시트의 한 행
//!
//! 로딩 이후에는 변경하지 않는다. 빈 셀은 빈 문자열로 들어온다.

use serde::{Deserialize, Serialize};

/// 인강 레코드
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LectureRecord {
    /// 원본 시트의 데이터 행 위치 (0부터, 헤더 제외)
    pub row: usize,
    pub instructor: String,       // 강사명
    pub course_title: String,     // 강좌명
    pub subject: String,          // 과목
    pub site: String,             // 사이트명
    pub timing: String,           // 추천시기
    pub level: String,            // 추천레벨
    pub character: String,        // 강의성격
    pub image: Option<String>,    // 강사 이미지
    pub runtime: String,          // 총강의수/평균런닝타임
    pub curriculum: String,       // 커리큘럼
    pub audience: String,         // 수강대상
    pub features: String,         // 내용/특징
}

/// 교재 레코드
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextbookRecord {
    pub subject: String,          // 과목
    pub publisher: String,        // 출판사
    pub title: String,            // 교재명
    pub image: Option<String>,    // 교재 이미지
    pub difficulty: String,       // 난이도 구성
    pub students: String,         // 추천 학생
    pub features: String,         // 교재 특징
    pub timing: String,           // 추천시기
    pub grade: String,            // 추천학년
    pub character: String,        // 교재성격
}

/// 이미지 참조
///
/// `http`로 시작하면 원격 URL, 그 외에는 로컬 파일 경로로 취급한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "camelCase")]
pub enum ImageRef {
    Remote(String),
    Local(String),
    Missing,
}

impl ImageRef {
    pub fn classify(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.is_empty() => ImageRef::Missing,
            Some(v) if v.starts_with("http") => ImageRef::Remote(v.to_string()),
            Some(v) => ImageRef::Local(v.to_string()),
            None => ImageRef::Missing,
        }
    }
}

impl LectureRecord {
    pub fn image_ref(&self) -> ImageRef {
        ImageRef::classify(self.image.as_deref())
    }
}

impl TextbookRecord {
    pub fn image_ref(&self) -> ImageRef {
        ImageRef::classify(self.image.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_ref_remote() {
        let r = ImageRef::classify(Some("https://cdn.example.com/t.png"));
        assert_eq!(r, ImageRef::Remote("https://cdn.example.com/t.png".to_string()));

        let r = ImageRef::classify(Some("http://cdn.example.com/t.png"));
        assert!(matches!(r, ImageRef::Remote(_)));
    }

    #[test]
    fn test_image_ref_local_and_missing() {
        assert_eq!(
            ImageRef::classify(Some("images/정승제.png")),
            ImageRef::Local("images/정승제.png".to_string())
        );
        assert_eq!(ImageRef::classify(None), ImageRef::Missing);
        assert_eq!(ImageRef::classify(Some("   ")), ImageRef::Missing);
    }

    #[test]
    fn test_lecture_record_serialize() {
        let record = LectureRecord {
            instructor: "정승제".to_string(),
            course_title: "개념때려잡기".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&record).expect("직렬화 실패");
        assert!(json.contains("\"instructor\":\"정승제\""));
        assert!(json.contains("\"courseTitle\":\"개념때려잡기\""));
    }

    #[test]
    fn test_textbook_record_deserialize_missing_fields() {
        let json = r#"{"title": "수능특강 수학I"}"#;
        let record: TextbookRecord = serde_json::from_str(json).expect("역직렬화 실패");
        assert_eq!(record.title, "수능특강 수학I");
        assert_eq!(record.publisher, "");
        assert_eq!(record.image, None);
    }
}
