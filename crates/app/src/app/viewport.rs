use eframe::egui;
use glam::{Mat4, Vec3};
use melt_core::HandleEdit;
use render::{camera_view_proj, paint_draw_list, project_world_to_screen, CameraState};

use super::viewport_handles::{SliderDrag, ViewportHandleRenderer};
use super::MeltApp;

const GRID_HALF_EXTENT: i32 = 5;

impl MeltApp {
    pub(super) fn show_viewport(&mut self, ui: &mut egui::Ui, pointer_down: bool) {
        let available = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(available, egui::Sense::click_and_drag());
        ui.painter()
            .rect_filled(rect, 0.0, egui::Color32::from_rgb(28, 28, 28));

        let view_proj = camera_view_proj(self.camera_state(), rect, ui.ctx().pixels_per_point());
        let mouse = ui.ctx().input(|i| i.pointer.hover_pos());

        self.update_slider_drag(&response, view_proj, rect, mouse);
        if self.slider_drag.is_none() {
            self.handle_camera_input(&response);
        }

        let view_proj = camera_view_proj(self.camera_state(), rect, ui.ctx().pixels_per_point());
        draw_grid(ui.painter(), view_proj, rect);

        let draw_list = self.run_handles(view_proj, rect, mouse, pointer_down);
        self.hovered_slider = match (self.slider_drag, mouse) {
            (Some(drag), _) => Some(drag.id),
            (None, Some(mouse)) if rect.contains(mouse) => {
                render::pick_slider(&draw_list, view_proj, rect, mouse)
            }
            _ => None,
        };
        let style = self.overlay_style();
        paint_draw_list(
            ui.painter(),
            view_proj,
            rect,
            &draw_list,
            &style,
            self.hovered_slider,
        );
        self.last_draw_list = draw_list;
    }

    /// Engages a slider on press using last frame's layout and releases it with the pointer.
    fn update_slider_drag(
        &mut self,
        response: &egui::Response,
        view_proj: Mat4,
        rect: egui::Rect,
        mouse: Option<egui::Pos2>,
    ) {
        let (pressed, released) = response.ctx.input(|i| {
            (
                i.pointer.button_pressed(egui::PointerButton::Primary),
                i.pointer.button_released(egui::PointerButton::Primary),
            )
        });
        if released && self.slider_drag.take().is_some() {
            self.undo_stack.flush_pending();
            tracing::debug!("slider released");
        }
        if !pressed || !response.hovered() {
            return;
        }
        let Some(mouse) = mouse else {
            return;
        };
        let alt_down = response.ctx.input(|i| i.modifiers.alt);
        if alt_down {
            return;
        }
        let Some(id) = render::pick_slider(&self.last_draw_list, view_proj, rect, mouse) else {
            return;
        };
        self.slider_drag = SliderDrag::begin(&self.last_draw_list, id, mouse);
        if self.slider_drag.is_some() {
            tracing::debug!(owner = id.owner, part = ?id.part, "slider engaged");
        }
    }

    fn run_handles(
        &mut self,
        view_proj: Mat4,
        rect: egui::Rect,
        mouse: Option<egui::Pos2>,
        pointer_down: bool,
    ) -> melt_scene::HandleDrawList {
        self.sync_editors();
        let settings = self.project.settings.editor.clone();
        let mut renderer = ViewportHandleRenderer::new(self.slider_drag, view_proj, rect, mouse);
        let mut edits: Vec<HandleEdit> = Vec::new();
        for (id, editor) in &mut self.editors {
            let Some(melt) = self.project.deformer(*id) else {
                continue;
            };
            edits.extend(editor.scene_gui(melt, &settings, &mut renderer));
        }
        for edit in edits {
            self.commit_handle_edit(edit, pointer_down);
        }
        renderer.finish()
    }

    fn commit_handle_edit(&mut self, edit: HandleEdit, pointer_down: bool) {
        if self.project.deformer(edit.deformer).is_none() {
            return;
        }
        self.record_undo(edit.label(), pointer_down);
        if let Some(melt) = self.project.deformer_mut(edit.deformer) {
            edit.apply(melt);
            tracing::debug!(
                deformer = melt.id,
                top = melt.top,
                bottom = melt.bottom,
                radius = melt.radius,
                "{}",
                edit.label()
            );
        }
    }

    fn overlay_style(&self) -> render::OverlayStyle {
        let settings = &self.project.settings.editor;
        render::OverlayStyle {
            solid: render::color32(settings.solid_handle_color),
            light: render::color32(settings.light_handle_color),
            dash_length: settings.dotted_line_size.max(1.0),
            ..render::OverlayStyle::default()
        }
    }

    fn handle_camera_input(&mut self, response: &egui::Response) {
        if !response.hovered() {
            return;
        }

        let camera = &mut self.project.settings.camera;
        let orbit_speed = 0.01;
        let pan_speed = 0.0025 * camera.distance.max(0.1);
        let zoom_speed = 0.1;

        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_motion();
            camera.yaw += delta.x * orbit_speed;
            camera.pitch = (camera.pitch + delta.y * orbit_speed).clamp(-1.54, 1.54);
        }

        if response.dragged_by(egui::PointerButton::Middle) {
            let delta = response.drag_motion();
            let state = CameraState {
                target: camera.target,
                distance: camera.distance,
                yaw: camera.yaw,
                pitch: camera.pitch,
            };
            let forward = render::camera_forward(state);
            let right = forward.cross(Vec3::Y).normalize_or_zero();
            let up = right.cross(forward).normalize_or_zero();
            let pan = right * (-delta.x * pan_speed) + up * (delta.y * pan_speed);
            camera.target = (Vec3::from(camera.target) + pan).to_array();
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_motion();
            if delta.y.abs() > 0.0 {
                let zoom_delta = -delta.y * 3.0;
                let zoom = 1.0 - (zoom_delta * zoom_speed / 100.0);
                camera.distance = (camera.distance * zoom).clamp(0.1, 1000.0);
            }
        }

        let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta.y);
        if scroll_delta.abs() > 0.0 {
            let zoom = 1.0 - (scroll_delta * zoom_speed / 100.0);
            camera.distance = (camera.distance * zoom).clamp(0.1, 1000.0);
        }
    }

    pub(super) fn camera_state(&self) -> CameraState {
        CameraState {
            target: self.project.settings.camera.target,
            distance: self.project.settings.camera.distance,
            yaw: self.project.settings.camera.yaw,
            pitch: self.project.settings.camera.pitch,
        }
    }
}

fn draw_grid(painter: &egui::Painter, view_proj: Mat4, rect: egui::Rect) {
    let line = egui::Stroke::new(1.0, egui::Color32::from_rgb(48, 48, 48));
    let extent = GRID_HALF_EXTENT as f32;
    for i in -GRID_HALF_EXTENT..=GRID_HALF_EXTENT {
        let offset = i as f32;
        for (a, b) in [
            (Vec3::new(offset, 0.0, -extent), Vec3::new(offset, 0.0, extent)),
            (Vec3::new(-extent, 0.0, offset), Vec3::new(extent, 0.0, offset)),
        ] {
            if let (Some(a), Some(b)) = (
                project_world_to_screen(view_proj, rect, a),
                project_world_to_screen(view_proj, rect, b),
            ) {
                painter.line_segment([a, b], line);
            }
        }
    }
}
