//! Lecture Finder Common Library
//!
//! CLI와 데스크톱 앱이 공유하는 타입, 필터, 선택 상태 로직

pub mod types;
pub mod columns;
pub mod vocab;
pub mod error;
pub mod filter;
pub mod selection;
pub mod session;
pub mod card;

pub use types::{LectureRecord, TextbookRecord, ImageRef};
pub use vocab::{Choice, Vocabulary, available_options, SUBJECT_ORDER, PUBLISHER_ORDER};
pub use error::{Error, Result};
pub use filter::{LectureMatches, TextbookFilter, filter_lectures, filter_textbooks, titles, chunk_rows};
pub use selection::{LectureSelection, TextbookSelection};
pub use session::Session;
pub use card::{Card, Chip, DetailView, split_lines, lecture_detail, textbook_detail};
