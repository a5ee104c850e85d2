use eframe::egui;
use melt_core::{EditorSettings, GuidelineMode};

use super::MeltApp;

const GUIDELINE_MODES: [(GuidelineMode, &str); 4] = [
    (GuidelineMode::Solid, "Solid"),
    (GuidelineMode::Light, "Light"),
    (GuidelineMode::SolidDotted, "Solid Dotted"),
    (GuidelineMode::LightDotted, "Light Dotted"),
];

impl MeltApp {
    pub(super) fn show_preferences_window(&mut self, ctx: &egui::Context) {
        if !self.show_preferences {
            return;
        }

        let mut open = self.show_preferences;
        egui::Window::new("Preferences")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                let settings = &mut self.project.settings.editor;
                ui.label("Handles");
                ui.horizontal(|ui| {
                    ui.label("Solid color");
                    ui.color_edit_button_srgba_unmultiplied(&mut settings.solid_handle_color);
                });
                ui.horizontal(|ui| {
                    ui.label("Light color");
                    ui.color_edit_button_srgba_unmultiplied(&mut settings.light_handle_color);
                });
                ui.horizontal(|ui| {
                    ui.label("Slider cap size");
                    ui.add(
                        egui::DragValue::new(&mut settings.screenspace_slider_handle_cap_size)
                            .speed(0.005)
                            .range(0.0..=1.0),
                    );
                });
                ui.separator();
                ui.label("Guidelines");
                ui.horizontal(|ui| {
                    ui.label("Style");
                    let guideline = &mut settings.guideline;
                    egui::ComboBox::from_id_salt("pref_guideline")
                        .selected_text(guideline_label(*guideline))
                        .show_ui(ui, |ui| {
                            for (mode, label) in GUIDELINE_MODES {
                                if ui.selectable_label(*guideline == mode, label).clicked() {
                                    *guideline = mode;
                                }
                            }
                        });
                });
                ui.horizontal(|ui| {
                    ui.label("Dash length (px)");
                    ui.add(
                        egui::DragValue::new(&mut settings.dotted_line_size)
                            .speed(0.25)
                            .range(1.0..=50.0),
                    );
                });
                ui.separator();
                if ui.button("Reset to defaults").clicked() {
                    *settings = EditorSettings::default();
                }
            });
        self.show_preferences = open;
    }
}

fn guideline_label(mode: GuidelineMode) -> &'static str {
    GUIDELINE_MODES
        .iter()
        .find(|(candidate, _)| *candidate == mode)
        .map(|(_, label)| *label)
        .unwrap_or("Light Dotted")
}
