use clap::Parser;
use lecture_finder::{cli, commands, config, error, shell};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load()?;
    if let Some(path) = cli.lectures {
        config.lecture_path = path;
    }
    if let Some(path) = cli.textbooks {
        config.textbook_path = path;
    }

    match cli.command {
        Commands::Lecture { query, pick, json } => {
            let output = commands::lecture(&config, &query, pick)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", commands::render_lecture(&output));
            }
        }

        Commands::Textbook { subject, publisher, title, json } => {
            let output = commands::textbook(&config, &subject, &publisher, title.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", commands::render_textbook(&output));
            }
        }

        Commands::Options => {
            let output = commands::options(&config)?;
            print!("{}", commands::render_options(&output));
        }

        Commands::Browse => {
            println!("🔍 인강 검색기\n");
            shell::run_browse(&config)?;
        }

        Commands::Config { show, set_lectures, set_textbooks, set_lecture_sheet } => {
            // 저장은 환경 변수/CLI 플래그를 반영하지 않은 설정 파일 기준
            let mut stored = Config::load_stored()?;
            let mut changed = false;

            if let Some(path) = set_lectures {
                stored.lecture_path = path;
                changed = true;
            }
            if let Some(path) = set_textbooks {
                stored.textbook_path = path;
                changed = true;
            }
            if let Some(sheet) = set_lecture_sheet {
                stored.lecture_sheet = sheet;
                changed = true;
            }
            if changed {
                stored.save()?;
                println!("✔ 설정을 저장했습니다: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let config = if changed { &stored } else { &config };
                println!("설정:");
                println!("  인강 파일: {}", config.lecture_path.display());
                println!("  인강 시트: {}", config.lecture_sheet);
                println!("  교재 파일: {}", config.textbook_path.display());
                println!(
                    "  교재 시트: {}",
                    config.textbook_sheet.as_deref().unwrap_or("(첫 번째 시트)")
                );
                println!("  이미지 폭: {}px", config.image_width);
                println!("  과목 순서: {}", config.subject_order.join(", "));
                println!("  출판사 순서: {}", config.publisher_order.join(", "));
                println!("  글꼴 후보:");
                for path in &config.font_paths {
                    println!("    {}", path.display());
                }
            }
        }
    }

    Ok(())
}
