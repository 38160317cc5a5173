use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lecture-finder")]
#[command(about = "인강/교재 카탈로그 검색기", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 인강 엑셀 파일 (설정값보다 우선)
    #[arg(long, global = true)]
    pub lectures: Option<PathBuf>,

    /// 교재 엑셀 파일 (설정값보다 우선)
    #[arg(long, global = true)]
    pub textbooks: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 강사명으로 인강 검색
    Lecture {
        /// 강사명 (부분 일치, 대소문자 구분)
        #[arg(required = true)]
        query: String,

        /// 목록에서 고를 행 번호 (생략 시 첫 번째 강의)
        #[arg(short, long)]
        pick: Option<usize>,

        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 과목/출판사로 교재 검색
    Textbook {
        /// 과목 (All 또는 과목명)
        #[arg(short, long, default_value = "All")]
        subject: String,

        /// 출판사 (All 또는 출판사명)
        #[arg(short, long, default_value = "All")]
        publisher: String,

        /// 상세 보기할 교재명
        #[arg(short, long)]
        title: Option<String>,

        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 교재 과목/출판사 선택지 표시
    Options,

    /// 대화형 검색
    Browse,

    /// 설정 표시/편집
    Config {
        /// 설정 표시
        #[arg(long)]
        show: bool,

        /// 인강 엑셀 파일 경로 저장
        #[arg(long)]
        set_lectures: Option<PathBuf>,

        /// 교재 엑셀 파일 경로 저장
        #[arg(long)]
        set_textbooks: Option<PathBuf>,

        /// 인강 시트 이름 저장
        #[arg(long)]
        set_lecture_sheet: Option<String>,
    },
}
