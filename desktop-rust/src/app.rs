use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};
use lecture_finder::asset::{
    FILE_NOT_FOUND_TEXT, NO_INSTRUCTOR_IMAGE_TEXT, NO_TEXTBOOK_IMAGE_TEXT, local_candidates,
};
use lecture_finder::config::Config;
use lecture_finder::loader::clear_cache;
use lecture_finder::render::{NO_LECTURE_TEXT, NO_TEXTBOOK_TEXT};
use lecture_finder_common::filter::LECTURE_GRID_COLUMNS;
use lecture_finder_common::vocab::ALL;
use lecture_finder_common::{
    Choice, DetailView, ImageRef, LectureMatches, LectureRecord, Session, TextbookRecord,
    chunk_rows, lecture_detail, textbook_detail,
};

use crate::io::{
    DecodedImage, ImageSource, load_image, load_lectures, load_textbooks, refresh_options,
};
use crate::model::{AppState, Dataset, Tab};

const ACCENT: Color32 = Color32::from_rgb(196, 245, 0);
const WARN: Color32 = Color32::from_rgb(246, 196, 69);
const ERROR: Color32 = Color32::from_rgb(230, 80, 80);
const TITLE_PLACEHOLDER: &str = "교재를 선택하세요";

pub struct DesktopApp {
    config: Config,
    state: AppState,
    status: String,
    images: HashMap<String, egui::TextureHandle>,
    failed_images: HashSet<String>,
    image_rx: Receiver<ImageMessage>,
    image_tx: Sender<ImageMessage>,
    image_inflight: HashSet<String>,
}

struct ImageMessage {
    key: String,
    image: Option<DecodedImage>,
}

impl DesktopApp {
    pub fn new(config: Config) -> Self {
        let (image_tx, image_rx) = mpsc::channel();
        let mut app = Self {
            config,
            state: AppState::default(),
            status: String::new(),
            images: HashMap::new(),
            failed_images: HashSet::new(),
            image_rx,
            image_tx,
            image_inflight: HashSet::new(),
        };
        app.load_all();
        app
    }

    fn load_all(&mut self) {
        self.state.lectures = load_lectures(&self.config);
        self.state.textbooks = load_textbooks(&self.config);
        refresh_options(&mut self.state, &self.config);
        self.reset_session();
    }

    /// 데이터가 바뀌면 행 위치가 달라지므로 세션도 새로 시작
    fn reset_session(&mut self) {
        self.state.session = Session::new();
        self.state.query_input.clear();
        self.images.clear();
        self.failed_images.clear();
    }

    fn reload(&mut self) {
        clear_cache();
        self.load_all();
        self.status = "Reloaded".to_string();
    }

    fn open_lecture_file(&mut self) {
        if let Some(path) = pick_workbook() {
            self.config.lecture_path = path;
            self.state.lectures = load_lectures(&self.config);
            self.reset_session();
            self.status = format!("Loaded {}", self.config.lecture_path.display());
        }
    }

    fn open_textbook_file(&mut self) {
        if let Some(path) = pick_workbook() {
            self.config.textbook_path = path;
            self.state.textbooks = load_textbooks(&self.config);
            refresh_options(&mut self.state, &self.config);
            self.reset_session();
            self.status = format!("Loaded {}", self.config.textbook_path.display());
        }
    }

    fn request_image(&mut self, key: &str, source: ImageSource) {
        if self.images.contains_key(key) || self.image_inflight.contains(key) {
            return;
        }
        self.image_inflight.insert(key.to_string());
        let sender = self.image_tx.clone();
        let key = key.to_string();
        let max_width = self.config.image_width;

        std::thread::spawn(move || {
            let image = match load_image(&source, max_width) {
                Ok(image) => Some(image),
                Err(err) => {
                    tracing::warn!("{err:#}");
                    None
                }
            };
            let _ = sender.send(ImageMessage { key, image });
        });
    }

    fn poll_images(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.image_rx.try_recv() {
            self.image_inflight.remove(&msg.key);
            match msg.image {
                Some(image) if image.size[0] > 0 && image.size[1] > 0 => {
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied(image.size, &image.pixels);
                    let texture =
                        ctx.load_texture(&msg.key, color_image, egui::TextureOptions::default());
                    self.images.insert(msg.key, texture);
                }
                _ => {
                    self.failed_images.insert(msg.key);
                }
            }
        }
    }

    fn render_lecture_tab(&mut self, ui: &mut egui::Ui) {
        let Some(records) = self.state.lectures.records() else {
            dataset_notice(ui, &self.state.lectures, "인강");
            return;
        };

        ui.vertical_centered(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.state.query_input)
                    .hint_text("강사명을 입력하세요 (예: 정승제)")
                    .desired_width(320.0),
            );
            if response.changed() {
                let query = self.state.query_input.clone();
                self.state.session.set_instructor_query(&records, &query);
            }
        });
        ui.add_space(12.0);

        match self.state.session.lecture_matches(&records) {
            LectureMatches::NoQuery => {}
            LectureMatches::Empty => {
                ui.colored_label(WARN, NO_LECTURE_TEXT);
            }
            LectureMatches::Found(rows) => {
                self.render_lecture_list(ui, &records, &rows);
            }
        }

        if let Some(record) = self.state.session.selected_lecture(&records) {
            let view = lecture_detail(record);
            ui.separator();
            let base = self.config.lecture_path.parent().map(|p| p.to_path_buf());
            self.render_detail(ui, &view, base, NO_INSTRUCTOR_IMAGE_TEXT);
        }
    }

    fn render_lecture_list(&mut self, ui: &mut egui::Ui, records: &Arc<[LectureRecord]>, rows: &[usize]) {
        ui.label(
            RichText::new("📚 강의 목록")
                .strong()
                .size(18.0)
                .color(Color32::BLACK)
                .background_color(ACCENT),
        );
        ui.add_space(6.0);

        let selected = self.state.session.lecture_selection().row();
        let mut picked = None;
        for chunk in chunk_rows(rows, LECTURE_GRID_COLUMNS) {
            ui.horizontal(|ui| {
                for &row in chunk {
                    let title = records[row].course_title.as_str();
                    if ui.selectable_label(selected == Some(row), title).clicked() {
                        picked = Some(row);
                    }
                }
            });
        }

        if let Some(row) = picked {
            if let Err(err) = self.state.session.pick_lecture(records, row) {
                self.status = err.to_string();
            }
        }
    }

    fn render_textbook_tab(&mut self, ui: &mut egui::Ui) {
        let Some(records) = self.state.textbooks.records() else {
            dataset_notice(ui, &self.state.textbooks, "교재");
            return;
        };

        let filter = self.state.session.textbook_filter().clone();
        let mut subject = filter.subject.clone();
        let mut publisher = filter.publisher.clone();

        ui.horizontal(|ui| {
            choice_combo(ui, "과목", &mut subject, &self.state.subject_options);
            choice_combo(ui, "출판사", &mut publisher, &self.state.publisher_options);
        });
        if subject != filter.subject {
            self.state.session.set_subject(&records, subject);
        }
        if publisher != filter.publisher {
            self.state.session.set_publisher(&records, publisher);
        }

        let titles = self.state.session.textbook_titles(&records);
        if titles.is_empty() {
            ui.colored_label(WARN, NO_TEXTBOOK_TEXT);
        }

        let current = self.state.session.textbook_selection().title().map(str::to_string);
        let mut picked = current.clone();
        ui.add_enabled_ui(!titles.is_empty(), |ui| {
            egui::ComboBox::from_label("교재명")
                .width(280.0)
                .selected_text(picked.as_deref().unwrap_or(TITLE_PLACEHOLDER))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut picked, None, TITLE_PLACEHOLDER);
                    for title in &titles {
                        ui.selectable_value(&mut picked, Some(title.clone()), title.as_str());
                    }
                });
        });
        if picked != current {
            match picked {
                Some(title) => {
                    if let Err(err) = self.state.session.pick_textbook(&records, &title) {
                        self.status = err.to_string();
                    }
                }
                None => self.state.session.clear_textbook_pick(),
            }
        }

        let selected: Option<TextbookRecord> =
            self.state.session.selected_textbook(&records).cloned();
        if let Some(record) = selected {
            let view = textbook_detail(&record);
            ui.separator();
            let base = self.config.textbook_path.parent().map(|p| p.to_path_buf());
            self.render_detail(ui, &view, base, NO_TEXTBOOK_IMAGE_TEXT);
        }
    }

    fn render_detail(
        &mut self,
        ui: &mut egui::Ui,
        view: &DetailView,
        base_dir: Option<PathBuf>,
        missing_text: &str,
    ) {
        ui.heading(view.heading.as_str());
        if !view.subheading.is_empty() {
            ui.label(RichText::new(&view.subheading).color(Color32::from_gray(170)));
        }
        ui.add_space(8.0);

        let image_width = self.config.image_width as f32;
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(image_width.min(ui.available_width() / 3.0));
                self.render_image(ui, &view.image, base_dir, missing_text);
                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    for chip in &view.chips {
                        // 값이 비어도 칩 자리는 유지
                        egui::Frame::none()
                            .fill(Color32::from_gray(44))
                            .rounding(egui::Rounding::same(12.0))
                            .inner_margin(egui::Margin::symmetric(10.0, 4.0))
                            .show(ui, |ui| {
                                ui.label(RichText::new(&chip.value).size(13.0));
                            })
                            .response
                            .on_hover_text(chip.label.as_str());
                    }
                });
            });

            ui.vertical(|ui| {
                for card in &view.cards {
                    egui::Frame::none()
                        .fill(Color32::from_gray(30))
                        .rounding(egui::Rounding::same(15.0))
                        .inner_margin(egui::Margin::same(14.0))
                        .show(ui, |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.label(
                                RichText::new(&card.title)
                                    .strong()
                                    .size(16.0)
                                    .color(Color32::BLACK)
                                    .background_color(ACCENT),
                            );
                            ui.add_space(6.0);
                            for line in &card.lines {
                                ui.label(format!("• {}", line));
                            }
                        });
                    ui.add_space(10.0);
                }
            });
        });
    }

    fn render_image(
        &mut self,
        ui: &mut egui::Ui,
        image: &ImageRef,
        base_dir: Option<PathBuf>,
        missing_text: &str,
    ) {
        let (key, source) = match image {
            ImageRef::Missing => {
                ui.label(missing_text);
                return;
            }
            ImageRef::Remote(url) => (url.clone(), ImageSource::Url(url.clone())),
            ImageRef::Local(path) => {
                let candidates = local_candidates(path, base_dir.as_deref());
                let key = candidates
                    .last()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| path.clone());
                (key, ImageSource::Files(candidates))
            }
        };

        if let Some(texture) = self.images.get(&key) {
            ui.add(egui::Image::new(texture).max_width(ui.available_width()));
        } else if self.failed_images.contains(&key) {
            ui.label(FILE_NOT_FOUND_TEXT);
            if let ImageSource::Url(url) = &source {
                ui.hyperlink_to("원본 링크", url.as_str());
            }
        } else {
            self.request_image(&key, source);
            ui.spinner();
        }
    }
}

fn pick_workbook() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Excel", &["xlsx", "xls", "xlsm", "ods"])
        .pick_file()
}

fn dataset_notice<T>(ui: &mut egui::Ui, dataset: &Dataset<T>, name: &str) {
    match dataset {
        Dataset::Failed(message) => {
            ui.colored_label(ERROR, format!("✖ {name} 데이터를 불러올 수 없습니다: {message}"));
        }
        Dataset::NotLoaded => {
            ui.label(format!("{name} 데이터가 없습니다. File 메뉴에서 파일을 여세요."));
        }
        Dataset::Loaded(_) => {}
    }
}

fn choice_combo(ui: &mut egui::Ui, label: &str, value: &mut Choice, options: &[String]) {
    egui::ComboBox::from_label(label)
        .selected_text(value.to_string())
        .show_ui(ui, |ui| {
            ui.selectable_value(value, Choice::All, ALL);
            for option in options {
                ui.selectable_value(value, Choice::Value(option.clone()), option.as_str());
            }
        });
}

/// 읽히는 후보를 모두 한글 폴백으로 등록 (앞 후보가 우선)
pub fn korean_font_definitions(paths: &[PathBuf]) -> (FontDefinitions, Vec<PathBuf>) {
    let mut fonts = FontDefinitions::default();
    let mut loaded = Vec::new();

    for path in paths {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "글꼴 후보 건너뜀");
                continue;
            }
        };
        let name = format!("ko_{}", loaded.len());
        fonts.font_data.insert(name.clone(), FontData::from_owned(data));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .insert(loaded.len(), name.clone());
        }
        loaded.push(path.clone());
    }

    (fonts, loaded)
}

pub fn configure_fonts(ctx: &egui::Context, paths: &[PathBuf]) {
    let (fonts, loaded) = korean_font_definitions(paths);
    if loaded.is_empty() {
        tracing::warn!("한글 글꼴을 찾지 못했습니다. 설정의 font_paths를 확인하세요");
        return;
    }
    tracing::info!(fonts = ?loaded, "한글 글꼴 로드");
    ctx.set_fonts(fonts);
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.image_inflight.is_empty() {
            ctx.request_repaint();
        }
        self.poll_images(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Lecture Workbook").clicked() {
                        self.open_lecture_file();
                        ui.close_menu();
                    }
                    if ui.button("Open Textbook Workbook").clicked() {
                        self.open_textbook_file();
                        ui.close_menu();
                    }
                    if ui.button("Reload").clicked() {
                        self.reload();
                        ui.close_menu();
                    }
                });

                ui.separator();
                ui.selectable_value(&mut self.state.tab, Tab::Lecture, "🔍 인강");
                ui.selectable_value(&mut self.state.tab, Tab::Textbook, "📚 교재");

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.tab {
                    Tab::Lecture => self.render_lecture_tab(ui),
                    Tab::Textbook => self.render_textbook_tab(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_candidates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("NanumGothic.ttf");
        let second = dir.path().join("NotoSansCJK-Regular.ttc");
        std::fs::write(&first, b"font-a").unwrap();
        std::fs::write(&second, b"font-b").unwrap();

        let paths = vec![dir.path().join("malgun.ttf"), first.clone(), second.clone()];
        let (fonts, loaded) = korean_font_definitions(&paths);

        assert_eq!(loaded, vec![first, second]);
        assert!(fonts.font_data.contains_key("ko_0"));
        assert!(fonts.font_data.contains_key("ko_1"));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            let names = &fonts.families[&family];
            assert_eq!(&names[..2], &["ko_0".to_string(), "ko_1".to_string()]);
        }
    }

    #[test]
    fn test_font_candidates_none_found() {
        let dir = tempfile::tempdir().unwrap();
        let (fonts, loaded) = korean_font_definitions(&[dir.path().join("없음.ttf")]);
        assert!(loaded.is_empty());
        assert!(!fonts.font_data.keys().any(|k| k.starts_with("ko_")));
    }
}
