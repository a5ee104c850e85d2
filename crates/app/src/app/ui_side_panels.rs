use eframe::egui;
use tracing_subscriber::filter::LevelFilter;

use super::MeltApp;

impl MeltApp {
    pub(super) fn show_side_panels(&mut self, ctx: &egui::Context) {
        if !self.project.settings.panels.show_console {
            return;
        }

        egui::SidePanel::right("side_panels")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ComboBox::from_label("Log level")
                    .selected_text(format!("{:?}", self.log_level))
                    .show_ui(ui, |ui| {
                        for level in [
                            LevelFilter::ERROR,
                            LevelFilter::WARN,
                            LevelFilter::INFO,
                            LevelFilter::DEBUG,
                            LevelFilter::TRACE,
                        ] {
                            if ui
                                .selectable_label(self.log_level == level, format!("{:?}", level))
                                .clicked()
                            {
                                self.set_log_level(level);
                            }
                        }
                    });

                if let Some(label) = self.undo_stack.undo_label() {
                    ui.label(format!("Last edit: {label}"));
                }
                ui.separator();

                egui::CollapsingHeader::new("Console")
                    .default_open(true)
                    .show(ui, |ui| {
                        let console_lines = self.console.snapshot();
                        egui::ScrollArea::vertical()
                            .stick_to_bottom(true)
                            .show(ui, |ui| {
                                for line in console_lines {
                                    ui.label(line);
                                }
                            });
                    });
            });
    }
}
