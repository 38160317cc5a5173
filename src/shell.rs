//! 대화형 검색
//!
//! 세션 하나를 만들어 두고 입력 이벤트마다 핸들러를 호출한다.

use crate::commands::{lecture_detail_with_image, textbook_detail_with_image};
use crate::config::Config;
use crate::error::Result;
use crate::loader::{cached_lectures, cached_textbooks};
use crate::render;
use dialoguer::{Input, Select};
use lecture_finder_common::vocab::ALL;
use lecture_finder_common::{available_options, Choice, LectureRecord, Session, TextbookRecord};
use tracing::debug;

/// 메뉴 항목
enum MenuAction {
    Lecture,
    Textbook,
    Quit,
}

pub fn run_browse(config: &Config) -> Result<()> {
    let mut session = Session::new();

    loop {
        match prompt_menu()? {
            MenuAction::Lecture => {
                // 로딩 실패는 해당 탭만 막고 화면에 표시
                match cached_lectures(&config.lecture_path, &config.lecture_sheet) {
                    Ok(records) => browse_lectures(config, &mut session, &records)?,
                    Err(e) => eprintln!("✖ 인강 데이터를 불러올 수 없습니다: {}", e),
                }
            }
            MenuAction::Textbook => {
                match cached_textbooks(&config.textbook_path, config.textbook_sheet.as_deref()) {
                    Ok(records) => browse_textbooks(config, &mut session, &records)?,
                    Err(e) => eprintln!("✖ 교재 데이터를 불러올 수 없습니다: {}", e),
                }
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

fn prompt_menu() -> Result<MenuAction> {
    let items = ["🔍 인강 검색", "📚 교재 검색", "종료"];
    let choice = Select::new()
        .with_prompt("메뉴")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(match choice {
        Some(0) => MenuAction::Lecture,
        Some(1) => MenuAction::Textbook,
        _ => MenuAction::Quit,
    })
}

fn browse_lectures(config: &Config, session: &mut Session, records: &[LectureRecord]) -> Result<()> {
    loop {
        let query: String = Input::new()
            .with_prompt("강사명을 입력하세요 (예: 정승제, 빈 입력: 메뉴로)")
            .with_initial_text(session.instructor_query())
            .allow_empty(true)
            .interact_text()?;

        let matches = session.set_instructor_query(records, &query);
        debug!(query = %query, selection = ?session.lecture_selection(), "강사명 변경");
        if query.is_empty() {
            return Ok(());
        }

        let matched = render::matched_records(records, &matches);
        print!("{}", render::lecture_list(&query, &matched));
        if matched.is_empty() {
            continue;
        }

        print_selected_lecture(config, session, records);

        // 다른 강좌를 고르면 기본 선택을 덮어씀
        let mut items: Vec<String> = matched.iter().map(|r| r.course_title.clone()).collect();
        items.push("↩ 다른 강사 검색".to_string());
        loop {
            let choice = Select::new()
                .with_prompt("강좌 선택")
                .items(&items)
                .default(selected_position(session, &matched))
                .interact_opt()?;

            match choice {
                Some(i) if i < matched.len() => {
                    session.pick_lecture(records, matched[i].row)?;
                    print_selected_lecture(config, session, records);
                }
                _ => break,
            }
        }
    }
}

/// 현재 선택된 강좌의 목록 위치 (없으면 맨 앞)
fn selected_position(session: &Session, matched: &[LectureRecord]) -> usize {
    session
        .lecture_selection()
        .row()
        .and_then(|row| matched.iter().position(|r| r.row == row))
        .unwrap_or(0)
}

fn print_selected_lecture(config: &Config, session: &Session, records: &[LectureRecord]) {
    if let Some(record) = session.selected_lecture(records) {
        let detail = lecture_detail_with_image(record, config);
        println!("\n{}", render::detail(&detail.view, &detail.asset));
    }
}

/// `All` + 선택지 중 하나 고르기. 현재 값을 기본으로.
fn prompt_choice(prompt: &str, options: &[String], current: &Choice) -> Result<Option<Choice>> {
    let items: Vec<String> = std::iter::once(ALL.to_string())
        .chain(options.iter().cloned())
        .collect();
    let default = match current {
        Choice::All => 0,
        Choice::Value(v) => options.iter().position(|o| o == v).map(|i| i + 1).unwrap_or(0),
    };

    let choice = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact_opt()?;

    Ok(choice.map(|i| match i {
        0 => Choice::All,
        i => Choice::Value(items[i].clone()),
    }))
}

fn browse_textbooks(config: &Config, session: &mut Session, records: &[TextbookRecord]) -> Result<()> {
    let vocab = config.vocabulary();
    let subjects = available_options(&vocab.subjects, records.iter().map(|r| r.subject.as_str()));
    let publishers = available_options(&vocab.publishers, records.iter().map(|r| r.publisher.as_str()));

    loop {
        let current = session.textbook_filter().clone();
        let Some(subject) = prompt_choice("과목", &subjects, &current.subject)? else {
            return Ok(());
        };
        session.set_subject(records, subject);

        let Some(publisher) = prompt_choice("출판사", &publishers, &current.publisher)? else {
            return Ok(());
        };
        session.set_publisher(records, publisher);

        let titles = session.textbook_titles(records);
        print!("{}", render::textbook_titles(&titles));
        if titles.is_empty() {
            continue;
        }

        let default = session
            .textbook_selection()
            .title()
            .and_then(|t| titles.iter().position(|x| x == t))
            .unwrap_or(0);
        let choice = Select::new()
            .with_prompt("교재 선택 (Esc: 조건 다시 고르기)")
            .items(&titles)
            .default(default)
            .interact_opt()?;

        match choice {
            Some(i) => {
                session.pick_textbook(records, &titles[i])?;
                if let Some(record) = session.selected_textbook(records) {
                    let detail = textbook_detail_with_image(record, config);
                    println!("\n{}", render::detail(&detail.view, &detail.asset));
                }
            }
            None => session.clear_textbook_pick(),
        }
    }
}
