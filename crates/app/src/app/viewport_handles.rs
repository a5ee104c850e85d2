use eframe::egui::{Pos2, Rect};
use glam::{Mat4, Vec3};
use melt_core::{HandleRenderer, HandleStyle, RecordingRenderer};
use melt_scene::{HandleDrawList, HandleId, LineMode};

/// Slider engaged by the pointer. Lives from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SliderDrag {
    pub(super) id: HandleId,
    pub(super) start_mouse: Pos2,
    pub(super) start_world: Vec3,
    pub(super) direction: Vec3,
}

impl SliderDrag {
    pub(super) fn begin(list: &HandleDrawList, id: HandleId, mouse: Pos2) -> Option<Self> {
        let slider = list.slider(id)?;
        Some(Self {
            id,
            start_mouse: mouse,
            start_world: Vec3::from(slider.position),
            direction: Vec3::from(slider.direction).normalize_or_zero(),
        })
    }

    /// World position the dragged slider should move to for the current pointer.
    pub(super) fn target(&self, view_proj: Mat4, rect: Rect, mouse: Pos2) -> Option<Vec3> {
        let delta = render::axis_drag_delta(
            view_proj,
            rect,
            self.start_world,
            self.direction,
            self.start_mouse,
            mouse,
        )?;
        Some(self.start_world + self.direction * delta)
    }
}

/// Handle renderer for the viewport: records draw commands for painting and feeds the active
/// pointer drag back to the slider that owns it.
pub(super) struct ViewportHandleRenderer {
    recorder: RecordingRenderer,
    drag: Option<SliderDrag>,
    view_proj: Mat4,
    rect: Rect,
    mouse: Option<Pos2>,
}

impl ViewportHandleRenderer {
    pub(super) fn new(
        drag: Option<SliderDrag>,
        view_proj: Mat4,
        rect: Rect,
        mouse: Option<Pos2>,
    ) -> Self {
        Self {
            recorder: RecordingRenderer::new(),
            drag,
            view_proj,
            rect,
            mouse,
        }
    }

    pub(super) fn finish(mut self) -> HandleDrawList {
        self.recorder.take_draw_list()
    }
}

impl HandleRenderer for ViewportHandleRenderer {
    fn line(&mut self, start: Vec3, end: Vec3, mode: LineMode) {
        self.recorder.line(start, end, mode);
    }

    fn circle(&mut self, center: Vec3, normal: Vec3, from: Vec3, radius: f32) {
        self.recorder.circle(center, normal, from, radius);
    }

    fn slider(
        &mut self,
        id: HandleId,
        position: Vec3,
        direction: Vec3,
        style: &HandleStyle,
    ) -> Option<Vec3> {
        self.recorder.record_slider(id, position, direction, style);
        let drag = self.drag.filter(|drag| drag.id == id)?;
        let mouse = self.mouse?;
        drag.target(self.view_proj, self.rect, mouse)
    }
}
