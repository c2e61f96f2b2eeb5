use eframe::egui::{self, Context};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::models::{MetadataReport, Theme};
use crate::navigator::{Activation, Navigator};
use crate::operations;
use crate::selection::SelectionStore;
use crate::settings::{AppSettings, SettingsWindow};
use crate::ui;
use crate::utils;

pub struct InspectorApp {
    pub navigator: Navigator,
    pub report: Option<MetadataReport>,
    pub store: SelectionStore,
    pub settings: AppSettings,
    pub settings_window: SettingsWindow,

    pub error: Option<String>,
    pub status_message: Option<String>,

    // Navigation
    pub path_input: String,
    pub breadcrumbs: Vec<(String, PathBuf)>,
    pub scroll_to_selection: bool,
    window_title: String,

    // Export dialog
    pub show_export_dialog: bool,
    pub export_path_input: String,
}

impl InspectorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings, folder: Option<PathBuf>) -> Self {
        let store = settings.selection_store();
        let mut app = Self {
            navigator: Navigator::new(settings.show_hidden_files),
            report: None,
            store,
            settings,
            settings_window: SettingsWindow::new(),

            error: None,
            status_message: None,

            path_input: String::new(),
            breadcrumbs: Vec::new(),
            scroll_to_selection: false,
            window_title: String::new(),

            show_export_dialog: false,
            export_path_input: String::new(),
        };

        match folder {
            Some(folder) => app.open_folder(folder),
            None if app.settings.remember_selection => app.restore_selection(),
            None => {}
        }
        app
    }

    pub fn restore_selection(&mut self) {
        let state = self.store.restore();
        self.navigator.restore(state);
        self.after_navigation();
        self.report = self.navigator.report();
        self.scroll_to_selection = self.navigator.selected_row().is_some();
    }

    pub fn save_selection(&mut self) {
        if !self.settings.remember_selection {
            return;
        }
        if let Err(e) = self.store.save(self.navigator.state()) {
            warn!(error = %e, "selection was not persisted");
            self.error = Some(e.to_string());
        }
    }

    pub fn open_folder(&mut self, folder: PathBuf) {
        self.navigator.open_folder(folder);
        self.after_navigation();
    }

    pub fn open_typed_path(&mut self) {
        let typed = PathBuf::from(self.path_input.trim());
        let typed = std::path::absolute(&typed).unwrap_or(typed);
        if typed.is_dir() {
            self.open_folder(typed);
        } else {
            self.error = Some(format!("Not a folder: {}", typed.display()));
        }
    }

    fn after_navigation(&mut self) {
        self.error = None;
        self.status_message = None;
        self.report = None;
        self.show_export_dialog = false;
        match self.navigator.current_folder() {
            Some(folder) => {
                self.path_input = folder.display().to_string();
                self.breadcrumbs = utils::path_segments(folder);
            }
            None => {
                self.path_input.clear();
                self.breadcrumbs.clear();
            }
        }
    }

    pub fn select_row(&mut self, index: Option<usize>) {
        self.report = self.navigator.select_item(index);
    }

    pub fn select_relative(&mut self, offset: isize) {
        let count = self.navigator.entries().len();
        if count == 0 {
            return;
        }
        let next = match self.navigator.selected_row() {
            Some(row) => (row as isize + offset).clamp(0, count as isize - 1) as usize,
            None => 0,
        };
        self.select_row(Some(next));
        self.scroll_to_selection = true;
    }

    pub fn move_up(&mut self) {
        if self.navigator.move_up() {
            self.after_navigation();
        }
    }

    pub fn move_down(&mut self) {
        match self.navigator.move_down() {
            Activation::Entered => self.after_navigation(),
            Activation::Open(path) => {
                if let Err(e) = operations::open_item(&path) {
                    self.error = Some(format!("Failed to open {}: {}", path.display(), e));
                }
            }
            Activation::None => {}
        }
    }

    pub fn set_show_hidden(&mut self, show_hidden: bool) {
        self.settings.show_hidden_files = show_hidden;
        self.navigator.set_show_hidden(show_hidden);
        self.report = self.navigator.report();
    }

    pub fn refresh(&mut self) {
        self.navigator.refresh();
        self.report = self.navigator.report();
    }

    pub fn begin_export(&mut self) {
        let Some(item) = self.navigator.current_item() else {
            return;
        };
        let name = operations::suggested_export_name(item);
        let dir = self
            .navigator
            .current_folder()
            .map(|f| f.to_path_buf())
            .or_else(dirs::document_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        self.export_path_input = dir.join(name).display().to_string();
        self.show_export_dialog = true;
    }

    pub fn export_to(&mut self, destination: PathBuf) {
        let Some(item) = self.navigator.current_item().map(|p| p.to_path_buf()) else {
            return;
        };
        match operations::export_report(&item, &destination) {
            Ok(()) => {
                self.status_message = Some(format!("Saved info to {}", destination.display()));
                self.show_export_dialog = false;
                if destination.parent() == self.navigator.current_folder() {
                    self.refresh();
                }
            }
            Err(e) => {
                self.error = Some(format!("Unable to save info: {}", e));
            }
        }
    }

    pub fn handle_keyboard_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (up, down, enter, back) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });

        if up {
            self.select_relative(-1);
        }
        if down {
            self.select_relative(1);
        }
        if enter {
            self.move_down();
        }
        if back {
            self.move_up();
        }
    }

    pub fn apply_theme(&self, ctx: &Context) {
        match self.settings.theme {
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }

        let mut style = (*ctx.style()).clone();
        let size = self.settings.font_size;
        style.text_styles.insert(egui::TextStyle::Body, egui::FontId::proportional(size));
        style.text_styles.insert(egui::TextStyle::Button, egui::FontId::proportional(size));
        style.text_styles.insert(egui::TextStyle::Monospace, egui::FontId::monospace(size));
        ctx.set_style(style);
    }

    fn update_title(&mut self, ctx: &Context) {
        let title = self.navigator.title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }
}

impl eframe::App for InspectorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        self.handle_keyboard_shortcuts(ctx);
        self.update_title(ctx);

        ui::show_top_panel(self, ctx);
        ui::show_status_bar(self, ctx);
        ui::show_file_list(self, ctx);
        ui::show_info_panel(self, ctx);
        ui::show_dialogs(self, ctx);

        let show_hidden = self.settings.show_hidden_files;
        self.settings_window.show_window(ctx, &mut self.settings);
        if self.settings.show_hidden_files != show_hidden {
            self.set_show_hidden(self.settings.show_hidden_files);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_selection();
    }
}

pub fn run(settings: AppSettings, folder: Option<PathBuf>) -> Result<(), eframe::Error> {
    info!("starting {}", crate::navigator::APP_TITLE);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::Vec2::new(1000.0, 640.0))
            .with_title(crate::navigator::APP_TITLE),
        ..Default::default()
    };
    eframe::run_native(
        crate::navigator::APP_TITLE,
        options,
        Box::new(move |cc| Box::new(InspectorApp::new(cc, settings, folder))),
    )
}
