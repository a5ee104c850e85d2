mod camera;
mod paint;
mod projection;

pub use camera::{camera_forward, camera_position, camera_view_proj, CameraState};
pub use paint::{
    color32, paint_draw_list, pick_slider, slider_cap_radius, OverlayStyle, SLIDER_CAP_PIXELS,
};
pub use projection::{axis_drag_delta, project_world_to_screen};
