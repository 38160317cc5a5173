//! 시트 컬럼명 정의
//!
//! 컬럼명은 정확히 일치해야 한다. 원본 시트에서 이름을 바꾸면 로딩이 실패한다.

/// 인강 시트 컬럼
pub mod lecture {
    pub const INSTRUCTOR: &str = "강사명";
    pub const COURSE_TITLE: &str = "강좌명";
    pub const SUBJECT: &str = "과목";
    pub const SITE: &str = "사이트명";
    pub const TIMING: &str = "추천시기";
    pub const LEVEL: &str = "추천레벨";
    pub const CHARACTER: &str = "강의성격";
    pub const IMAGE: &str = "강사 이미지";
    pub const RUNTIME: &str = "총강의수/평균런닝타임";
    pub const CURRICULUM: &str = "커리큘럼";
    pub const AUDIENCE: &str = "수강대상";
    pub const FEATURES: &str = "내용/특징";

    /// 필수 컬럼 (시트 순서와 무관)
    pub const REQUIRED: &[&str] = &[
        INSTRUCTOR, COURSE_TITLE, SUBJECT, SITE, TIMING, LEVEL, CHARACTER,
        IMAGE, RUNTIME, CURRICULUM, AUDIENCE, FEATURES,
    ];
}

/// 교재 시트 컬럼
pub mod textbook {
    pub const SUBJECT: &str = "과목";
    pub const PUBLISHER: &str = "출판사";
    pub const TITLE: &str = "교재명";
    pub const IMAGE: &str = "교재 이미지";
    pub const DIFFICULTY: &str = "난이도 구성";
    pub const STUDENTS: &str = "추천 학생";
    pub const FEATURES: &str = "교재 특징";
    pub const TIMING: &str = "추천시기";
    pub const GRADE: &str = "추천학년";
    pub const CHARACTER: &str = "교재성격";

    pub const REQUIRED: &[&str] = &[
        SUBJECT, PUBLISHER, TITLE, IMAGE, DIFFICULTY, STUDENTS, FEATURES,
        TIMING, GRADE, CHARACTER,
    ];
}
