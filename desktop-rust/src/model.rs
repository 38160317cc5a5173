use std::sync::Arc;

use lecture_finder_common::{LectureRecord, Session, TextbookRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Lecture,
    Textbook,
}

/// 데이터셋 로딩 상태. 실패하면 해당 탭만 막힌다.
#[derive(Debug, Clone)]
pub enum Dataset<T> {
    NotLoaded,
    Loaded(Arc<[T]>),
    Failed(String),
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Dataset::NotLoaded
    }
}

impl<T> Dataset<T> {
    pub fn records(&self) -> Option<Arc<[T]>> {
        match self {
            Dataset::Loaded(records) => Some(Arc::clone(records)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tab: Tab,
    pub session: Session,
    pub lectures: Dataset<LectureRecord>,
    pub textbooks: Dataset<TextbookRecord>,
    pub query_input: String,
    pub subject_options: Vec<String>,
    pub publisher_options: Vec<String>,
}
