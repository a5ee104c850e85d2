use eframe::egui;

use super::MeltApp;

impl MeltApp {
    pub(super) fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New").clicked() {
                        self.new_project();
                        ui.close();
                    }
                    if ui.button("Open...").clicked() {
                        self.open_project_dialog();
                        ui.close();
                    }
                    if ui.button("Save").clicked() {
                        self.save_project();
                        ui.close();
                    }
                    if ui.button("Save As...").clicked() {
                        self.save_project_dialog();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Preferences...").clicked() {
                        self.show_preferences = true;
                        ui.close();
                    }
                });

                ui.menu_button("Edit", |ui| {
                    let undo_text = match self.undo_stack.undo_label() {
                        Some(label) => format!("Undo {label}"),
                        None => "Undo".to_string(),
                    };
                    let enabled = self.undo_stack.undo_label().is_some();
                    if ui
                        .add_enabled(enabled, egui::Button::new(undo_text))
                        .clicked()
                    {
                        self.try_undo();
                        ui.close();
                    }
                    let redo_text = match self.undo_stack.redo_label() {
                        Some(label) => format!("Redo {label}"),
                        None => "Redo".to_string(),
                    };
                    let enabled = self.undo_stack.redo_label().is_some();
                    if ui
                        .add_enabled(enabled, egui::Button::new(redo_text))
                        .clicked()
                    {
                        self.try_redo();
                        ui.close();
                    }
                });

                ui.menu_button("Deformer", |ui| {
                    if ui.button("Add Melt").clicked() {
                        self.add_deformer();
                        ui.close();
                    }
                    let can_remove = !self.project.selection.is_empty();
                    if ui
                        .add_enabled(can_remove, egui::Button::new("Remove Selected"))
                        .clicked()
                    {
                        self.remove_selected_deformers();
                        ui.close();
                    }
                });

                ui.separator();
                ui.label("Melt");
                ui.separator();
                ui.checkbox(
                    &mut self.project.settings.panels.show_inspector,
                    "Parameters",
                );
                ui.checkbox(&mut self.project.settings.panels.show_console, "Console");
            });
        });
    }
}
