use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};
use glam::{Mat4, Vec3};
use melt_scene::{circle_points, HandleDrawList, HandleDrawable, HandleId, LineMode, SceneSlider};

use crate::projection::project_world_to_screen;

/// Pixels per unit of a slider's screen-space size.
pub const SLIDER_CAP_PIXELS: f32 = 100.0;
const CIRCLE_STEPS: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub solid: Color32,
    pub light: Color32,
    pub dash_length: f32,
    pub line_width: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            solid: Color32::from_rgb(255, 180, 60),
            light: Color32::from_rgba_unmultiplied(255, 180, 60, 110),
            dash_length: 5.0,
            line_width: 1.5,
        }
    }
}

impl OverlayStyle {
    fn line_stroke(&self, mode: LineMode) -> Stroke {
        let color = if mode.is_light() { self.light } else { self.solid };
        Stroke::new(self.line_width, color)
    }
}

pub fn color32(rgba: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

pub fn slider_cap_radius(slider: &SceneSlider) -> f32 {
    (slider.screenspace_size * SLIDER_CAP_PIXELS).max(2.0)
}

/// Paints a frame's handle commands. `highlight` marks the hovered or dragged slider.
pub fn paint_draw_list(
    painter: &Painter,
    view_proj: Mat4,
    rect: Rect,
    list: &HandleDrawList,
    style: &OverlayStyle,
    highlight: Option<HandleId>,
) {
    for drawable in &list.drawables {
        match drawable {
            HandleDrawable::Line(line) => {
                let (Some(a), Some(b)) = (
                    project_world_to_screen(view_proj, rect, Vec3::from(line.start)),
                    project_world_to_screen(view_proj, rect, Vec3::from(line.end)),
                ) else {
                    continue;
                };
                if (b - a).length() < 0.5 {
                    continue;
                }
                let stroke = style.line_stroke(line.mode);
                if line.mode.is_dotted() {
                    painter.extend(Shape::dashed_line(
                        &[a, b],
                        stroke,
                        style.dash_length,
                        style.dash_length,
                    ));
                } else {
                    painter.line_segment([a, b], stroke);
                }
            }
            HandleDrawable::Circle(circle) => {
                let points: Vec<Pos2> = circle_points(circle, CIRCLE_STEPS)
                    .into_iter()
                    .filter_map(|world| {
                        project_world_to_screen(view_proj, rect, Vec3::from(world))
                    })
                    .collect();
                if points.len() >= 2 {
                    painter.add(Shape::line(points, style.line_stroke(LineMode::Solid)));
                }
            }
            HandleDrawable::Slider(slider) => {
                let Some(center) =
                    project_world_to_screen(view_proj, rect, Vec3::from(slider.position))
                else {
                    continue;
                };
                let radius = slider_cap_radius(slider);
                painter.circle_filled(center, radius, color32(slider.color));
                if highlight == Some(slider.id) {
                    painter.circle_stroke(center, radius + 2.0, Stroke::new(1.5, Color32::WHITE));
                }
            }
        }
    }
}

/// Slider under `mouse`, nearest first. Sliders issued later win ties.
pub fn pick_slider(
    list: &HandleDrawList,
    view_proj: Mat4,
    rect: Rect,
    mouse: Pos2,
) -> Option<HandleId> {
    let mut best = None;
    let mut best_dist = f32::INFINITY;
    for slider in list.sliders() {
        let Some(center) = project_world_to_screen(view_proj, rect, Vec3::from(slider.position))
        else {
            continue;
        };
        let dist = (mouse - center).length();
        let threshold = slider_cap_radius(slider) + 4.0;
        if dist <= threshold && dist <= best_dist {
            best_dist = dist;
            best = Some(slider.id);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{camera_view_proj, CameraState};
    use melt_scene::HandlePart;

    fn slider(id: HandleId, position: [f32; 3]) -> HandleDrawable {
        HandleDrawable::Slider(SceneSlider {
            id,
            position,
            direction: [0.0, 1.0, 0.0],
            color: [255, 255, 255, 255],
            screenspace_size: 0.06,
        })
    }

    #[test]
    fn picks_slider_under_pointer() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(640.0, 480.0));
        let view_proj = camera_view_proj(CameraState::default(), rect, 1.0);
        let top = HandleId::new(1, HandlePart::Top);
        let bottom = HandleId::new(1, HandlePart::Bottom);
        let mut list = HandleDrawList::default();
        list.push(slider(top, [0.0, 1.0, 0.0]));
        list.push(slider(bottom, [0.0, -1.0, 0.0]));

        let top_screen =
            project_world_to_screen(view_proj, rect, Vec3::new(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(pick_slider(&list, view_proj, rect, top_screen), Some(top));
        assert_eq!(
            pick_slider(&list, view_proj, rect, Pos2::new(5.0, 5.0)),
            None
        );
    }

    #[test]
    fn coincident_sliders_resolve_to_last_issued() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(640.0, 480.0));
        let view_proj = camera_view_proj(CameraState::default(), rect, 1.0);
        let top = HandleId::new(1, HandlePart::Top);
        let bottom = HandleId::new(1, HandlePart::Bottom);
        let mut list = HandleDrawList::default();
        list.push(slider(top, [0.0, 0.0, 0.0]));
        list.push(slider(bottom, [0.0, 0.0, 0.0]));
        assert_eq!(pick_slider(&list, view_proj, rect, rect.center()), Some(bottom));
    }
}
