use eframe::egui::{self, Color32, Context, RichText, ScrollArea};
use std::path::PathBuf;

use crate::app::InspectorApp;
use crate::utils::{entry_icon, human_size, type_icon};

pub fn show_top_panel(app: &mut InspectorApp, ctx: &Context) {
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.add_enabled(app.navigator.can_move_up(), egui::Button::new("⬆ Up"))
                .clicked()
                .then(|| app.move_up());
            ui.add_enabled(app.navigator.can_export(), egui::Button::new("⬇ Down"))
                .clicked()
                .then(|| app.move_down());

            ui.separator();

            let response = ui.add(
                egui::TextEdit::singleline(&mut app.path_input)
                    .hint_text("Folder path")
                    .desired_width(360.0),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("📂 Open").clicked() || submitted {
                app.open_typed_path();
            }

            let mut show_hidden = app.settings.show_hidden_files;
            if ui.checkbox(&mut show_hidden, "Show hidden").changed() {
                app.set_show_hidden(show_hidden);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙ Settings").clicked() {
                    app.settings_window.show = true;
                }
                ui.add_enabled(app.navigator.can_export(), egui::Button::new("💾 Save Info"))
                    .clicked()
                    .then(|| app.begin_export());
                if ui.button("🔄 Refresh").clicked() {
                    app.refresh();
                }
            });
        });

        if !app.breadcrumbs.is_empty() {
            let breadcrumbs = app.breadcrumbs.clone();
            ui.horizontal_wrapped(|ui| {
                for (i, (name, path)) in breadcrumbs.iter().enumerate() {
                    if i > 1 {
                        ui.label("/");
                    }
                    if ui.link(name).clicked() {
                        app.open_folder(path.clone());
                    }
                }
            });
        }
    });
}

pub fn show_status_bar(app: &mut InspectorApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(error_message) = &app.error {
                ui.colored_label(Color32::RED, error_message);
            } else if let Some(status_message) = &app.status_message {
                ui.colored_label(Color32::from_rgb(0, 150, 0), status_message);
            } else {
                ui.label(format!("{} items", app.navigator.entries().len()));
            }
        });
    });
}

pub fn show_file_list(app: &mut InspectorApp, ctx: &Context) {
    egui::SidePanel::left("entries")
        .resizable(true)
        .default_width(340.0)
        .show(ctx, |ui| {
            if app.navigator.current_folder().is_none() {
                ui.label("Open a folder to inspect its contents.");
                return;
            }

            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let entries = app.navigator.entries().to_vec();
                let selected_row = app.navigator.selected_row();
                let scroll = std::mem::take(&mut app.scroll_to_selection);

                for (i, entry) in entries.iter().enumerate() {
                    let selected = selected_row == Some(i);
                    let label = format!("{} {}", entry_icon(entry), entry.name());
                    let response = ui.selectable_label(selected, label);

                    if selected && scroll {
                        response.scroll_to_me(Some(egui::Align::Center));
                    }
                    if response.clicked() {
                        app.select_row(Some(i));
                    }
                    if response.double_clicked() {
                        app.select_row(Some(i));
                        app.move_down();
                    }
                }
            });
        });
}

pub fn show_info_panel(app: &mut InspectorApp, ctx: &Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(report) = &app.report else {
            ui.label(RichText::new("No item selected").weak());
            return;
        };

        ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
            let icon = type_icon(report.get("type").unwrap_or("unknown"));
            ui.label(RichText::new(format!("{} {}", icon, report.path.display())).strong());
            ui.add_space(12.0);

            if !report.is_available() {
                ui.label(report.to_text());
                return;
            }

            egui::Grid::new("info_grid")
                .num_columns(2)
                .min_col_width(app.settings.info_tab_stop)
                .striped(true)
                .show(ui, |ui| {
                    for (key, value) in report.attributes() {
                        ui.label(format!("{}:", key));
                        ui.label(RichText::new(value).monospace());
                        ui.end_row();
                    }
                });

            if let Some(size) = report.get("size").and_then(|s| s.parse::<u64>().ok()) {
                ui.add_space(8.0);
                ui.label(RichText::new(human_size(size)).weak());
            }
        });
    });
}

pub fn show_dialogs(app: &mut InspectorApp, ctx: &Context) {
    if !app.show_export_dialog {
        return;
    }

    let mut destination = None;
    egui::Window::new("Save Info")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Save metadata report to:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut app.export_path_input).desired_width(420.0),
            );

            ui.horizontal(|ui| {
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (ui.button("Save").clicked() || enter) && !app.export_path_input.trim().is_empty() {
                    destination = Some(PathBuf::from(app.export_path_input.trim()));
                }
                if ui.button("Cancel").clicked() {
                    app.show_export_dialog = false;
                }
            });

            if let Some(error_message) = &app.error {
                ui.colored_label(Color32::RED, error_message);
            }
        });

    if let Some(destination) = destination {
        app.export_to(destination);
    }
}
