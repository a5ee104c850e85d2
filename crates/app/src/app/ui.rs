use eframe::egui;

use super::MeltApp;

impl eframe::App for MeltApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let pointer_down = ctx.input(|i| i.pointer.button_down(egui::PointerButton::Primary));
        if ctx.input(|i| i.pointer.any_released()) {
            self.undo_stack.flush_pending();
        }
        if !ctx.wants_keyboard_input() {
            let undo_pressed = ctx.input(|i| {
                i.key_pressed(egui::Key::Z) && i.modifiers.command && !i.modifiers.shift
            });
            let redo_pressed = ctx.input(|i| {
                (i.key_pressed(egui::Key::Z) && i.modifiers.command && i.modifiers.shift)
                    || (i.key_pressed(egui::Key::Y) && i.modifiers.command)
            });
            let delete_pressed = ctx.input(|i| i.key_pressed(egui::Key::Delete));
            if undo_pressed {
                self.try_undo();
            } else if redo_pressed {
                self.try_redo();
            } else if delete_pressed {
                self.remove_selected_deformers();
            }
        }

        self.show_top_bar(ctx);
        self.show_inspector(ctx, pointer_down);
        self.show_side_panels(ctx);
        self.show_preferences_window(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.show_viewport(ui, pointer_down);
            });
    }
}
