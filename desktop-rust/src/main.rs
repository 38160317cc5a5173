mod app;
mod io;
mod model;

use app::{configure_fonts, DesktopApp};
use lecture_finder::config::Config;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "설정을 읽지 못해 기본값 사용");
            Config::default()
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "인강 검색기",
        options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx, &config.font_paths);
            Box::new(DesktopApp::new(config))
        }),
    )
}
