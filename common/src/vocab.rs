//! 과목/출판사 고정 어휘
//!
//! 선택지 목록은 항상 이 순서를 따른다. 데이터에 실제로 존재하는 값만 남긴다.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// "전체" 선택지 표기
pub const ALL: &str = "All";

pub const SUBJECT_ORDER: &[&str] = &["국어", "수학", "영어", "한국사", "사회", "과학", "제2외국어"];

pub const PUBLISHER_ORDER: &[&str] = &[
    "EBS", "ETOOS", "메가스터디", "대성마이맥", "시대인재", "이투스북", "자체교재",
];

/// 필터 선택값
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    #[default]
    All,
    Value(String),
}

impl Choice {
    /// 문자열을 선택값으로 변환
    ///
    /// `All`/`전체`는 제한 없음. 그 외에는 어휘에 포함된 값이어야 한다.
    pub fn parse(input: &str, allowed: &[String]) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case(ALL) || input == "전체" {
            return Ok(Choice::All);
        }
        if allowed.iter().any(|a| a == input) {
            return Ok(Choice::Value(input.to_string()));
        }
        Err(Error::UnknownChoice {
            value: input.to_string(),
            allowed: std::iter::once(ALL.to_string())
                .chain(allowed.iter().cloned())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Value(v) => v == value,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "{}", ALL),
            Choice::Value(v) => write!(f, "{}", v),
        }
    }
}

/// 과목/출판사 어휘 묶음 (설정으로 덮어쓸 수 있음)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub subjects: Vec<String>,
    pub publishers: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            subjects: SUBJECT_ORDER.iter().map(|s| s.to_string()).collect(),
            publishers: PUBLISHER_ORDER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// 화면에 보여줄 선택지 계산
///
/// 고정 순서 ∩ 데이터에 나타난 값(빈 값 제외). 순서는 고정 순서를 따른다.
pub fn available_options<'a, I>(order: &[String], values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let seen: HashSet<&str> = values
        .into_iter()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    order
        .iter()
        .filter(|o| seen.contains(o.as_str()))
        .cloned()
        .collect()
}
