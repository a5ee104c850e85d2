use egui::{Pos2, Rect};
use glam::{Mat4, Vec3};

pub fn project_world_to_screen(view_proj: Mat4, rect: Rect, world: Vec3) -> Option<Pos2> {
    let clip = view_proj * world.extend(1.0);
    if clip.w.abs() <= 1.0e-6 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !ndc.x.is_finite() || !ndc.y.is_finite() || !ndc.z.is_finite() {
        return None;
    }
    let x = rect.min.x + (ndc.x * 0.5 + 0.5) * rect.width();
    let y = rect.min.y + (0.5 - ndc.y * 0.5) * rect.height();
    Some(Pos2::new(x, y))
}

/// World length that covers roughly `target_px` pixels on screen at `origin`.
pub fn handle_world_size(view_proj: Mat4, rect: Rect, origin: Vec3, target_px: f32) -> f32 {
    let axes = [Vec3::X, Vec3::Y, Vec3::Z];
    for axis in axes {
        if let (Some(o), Some(a)) = (
            project_world_to_screen(view_proj, rect, origin),
            project_world_to_screen(view_proj, rect, origin + axis),
        ) {
            let len = (a - o).length();
            if len > 1.0 {
                return target_px / len;
            }
        }
    }
    1.0
}

/// World distance along `direction` covered by moving the pointer from `start_mouse` to
/// `mouse`, measured on the screen projection of the direction at `origin`.
pub fn axis_drag_delta(
    view_proj: Mat4,
    rect: Rect,
    origin: Vec3,
    direction: Vec3,
    start_mouse: Pos2,
    mouse: Pos2,
) -> Option<f32> {
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }
    let origin_screen = project_world_to_screen(view_proj, rect, origin)?;
    let scale_world = handle_world_size(view_proj, rect, origin, 90.0);
    let axis_end_world = origin + direction * scale_world;
    let axis_end_screen = project_world_to_screen(view_proj, rect, axis_end_world)?;
    let axis_screen = axis_end_screen - origin_screen;
    let axis_screen_len = axis_screen.length();
    if axis_screen_len <= 1.0e-5 {
        return None;
    }
    let axis_screen_dir = axis_screen / axis_screen_len;
    let delta_screen = mouse - start_mouse;
    let delta_along = delta_screen.dot(axis_screen_dir);
    let world_per_pixel = scale_world / axis_screen_len;
    Some(delta_along * world_per_pixel)
}
