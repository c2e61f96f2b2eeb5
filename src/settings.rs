use eframe::egui::{self, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::models::Theme;
use crate::selection::SelectionStore;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    // Appearance
    pub theme: Theme,
    pub font_size: f32,
    pub info_tab_stop: f32,

    // Behavior
    pub show_hidden_files: bool,
    pub remember_selection: bool,

    // Advanced
    pub log_level: String,
    pub selection_record: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_size: 14.0,
            info_tab_stop: 240.0,

            show_hidden_files: false,
            remember_selection: true,

            log_level: "warn".to_string(),
            selection_record: None,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %config_path.display(), error = %e, "ignoring malformed settings");
                Self::default()
            }),
            Err(e) => {
                debug!(path = %config_path.display(), error = %e, "using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn selection_store(&self) -> SelectionStore {
        match &self.selection_record {
            Some(path) => SelectionStore::new(path),
            None => SelectionStore::default_location(),
        }
    }

    pub fn get_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("file-inspector").join("settings.json")
        } else {
            PathBuf::from(".").join("file-inspector-settings.json")
        }
    }
}

pub struct SettingsWindow {
    pub show: bool,
    pub current_tab: SettingsTab,
    pub status: Option<String>,
}

#[derive(PartialEq)]
pub enum SettingsTab {
    Appearance,
    Behavior,
    Advanced,
}

impl SettingsWindow {
    pub fn new() -> Self {
        Self {
            show: false,
            current_tab: SettingsTab::Appearance,
            status: None,
        }
    }

    pub fn show_window(&mut self, ctx: &Context, settings: &mut AppSettings) {
        if !self.show {
            return;
        }

        let mut open = self.show;
        egui::Window::new("⚙ Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.set_min_width(110.0);
                        ui.selectable_value(&mut self.current_tab, SettingsTab::Appearance, "🎨 Appearance");
                        ui.selectable_value(&mut self.current_tab, SettingsTab::Behavior, "⚙ Behavior");
                        ui.selectable_value(&mut self.current_tab, SettingsTab::Advanced, "🔧 Advanced");
                    });

                    ui.separator();

                    ui.vertical(|ui| match self.current_tab {
                        SettingsTab::Appearance => self.show_appearance_tab(ui, settings),
                        SettingsTab::Behavior => self.show_behavior_tab(ui, settings),
                        SettingsTab::Advanced => self.show_advanced_tab(ui, settings),
                    });
                });

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("💾 Save").clicked() {
                        self.status = Some(match settings.save() {
                            Ok(()) => "Settings saved".to_string(),
                            Err(e) => {
                                warn!(error = %e, "failed to save settings");
                                format!("Failed to save settings: {}", e)
                            }
                        });
                    }

                    if ui.button("🔄 Reset to Defaults").clicked() {
                        *settings = AppSettings::default();
                    }

                    if let Some(status) = &self.status {
                        ui.label(status);
                    }
                });
            });
        self.show = open;
    }

    fn show_appearance_tab(&mut self, ui: &mut egui::Ui, settings: &mut AppSettings) {
        ui.heading("Appearance");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Theme:");
            ui.selectable_value(&mut settings.theme, Theme::Light, "☀ Light");
            ui.selectable_value(&mut settings.theme, Theme::Dark, "🌙 Dark");
        });

        ui.horizontal(|ui| {
            ui.label("Font Size:");
            ui.add(egui::Slider::new(&mut settings.font_size, 10.0..=20.0).suffix(" pt"));
        });

        ui.horizontal(|ui| {
            ui.label("Value Column:");
            ui.add(egui::Slider::new(&mut settings.info_tab_stop, 120.0..=400.0).suffix(" px"));
        });
    }

    fn show_behavior_tab(&mut self, ui: &mut egui::Ui, settings: &mut AppSettings) {
        ui.heading("Behavior");
        ui.separator();

        ui.checkbox(&mut settings.show_hidden_files, "Show hidden files");
        ui.checkbox(&mut settings.remember_selection, "Remember folder and item between launches");
    }

    fn show_advanced_tab(&mut self, ui: &mut egui::Ui, settings: &mut AppSettings) {
        ui.heading("Advanced");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Log level:");
            ui.text_edit_singleline(&mut settings.log_level);
        });
        ui.label("Takes effect on next launch; RUST_LOG overrides it.");

        ui.separator();
        ui.label(format!("Config file: {}", AppSettings::get_config_path().display()));
        ui.label(format!("Selection record: {}", settings.selection_store().path().display()));
    }
}
