use glam::Vec3;
use melt_scene::{HandleId, HandlePart};

use super::{Guideline, HandleRenderer, HandleStyle, LineGuideline};
use crate::axis::{distance_along_axis, Axis, AxisDirection};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsHandleResult {
    pub changed: bool,
    pub top: f32,
    pub bottom: f32,
}

/// Pair of sliders editing a top and a bottom offset along one axis direction.
///
/// The handle reports raw drag results. It does not keep `top >= bottom`; callers that need
/// the ordering clamp on their side.
#[derive(Debug, Clone)]
pub struct VerticalBoundsHandle<G = LineGuideline> {
    pub owner: u64,
    pub style: HandleStyle,
    pub guideline: G,
    pub top: f32,
    pub bottom: f32,
    top_anchor: Vec3,
    bottom_anchor: Vec3,
}

impl Default for VerticalBoundsHandle<LineGuideline> {
    fn default() -> Self {
        Self::new(0, LineGuideline::default())
    }
}

impl<G: Guideline> VerticalBoundsHandle<G> {
    pub fn new(owner: u64, guideline: G) -> Self {
        Self {
            owner,
            style: HandleStyle::default(),
            guideline,
            top: 0.0,
            bottom: 0.0,
            top_anchor: Vec3::ZERO,
            bottom_anchor: Vec3::ZERO,
        }
    }

    pub fn top_id(&self) -> HandleId {
        HandleId::new(self.owner, HandlePart::Top)
    }

    pub fn bottom_id(&self) -> HandleId {
        HandleId::new(self.owner, HandlePart::Bottom)
    }

    /// World anchors computed on the last `draw_handle` call, `(top, bottom)`.
    pub fn anchors(&self) -> (Vec3, Vec3) {
        (self.top_anchor, self.bottom_anchor)
    }

    pub fn draw_handle<R: HandleRenderer + ?Sized>(
        &mut self,
        top: f32,
        bottom: f32,
        axis: &Axis,
        direction: AxisDirection,
        renderer: &mut R,
    ) -> BoundsHandleResult {
        let dir = axis.dir(direction);
        self.top = top;
        self.bottom = bottom;
        self.top_anchor = axis.point_along(direction, top);
        self.bottom_anchor = axis.point_along(direction, bottom);

        self.guideline
            .draw(renderer, self.top_anchor, self.bottom_anchor);

        let mut changed = false;
        if let Some(world) = renderer.slider(self.top_id(), self.top_anchor, dir, &self.style) {
            let new_top = distance_along_axis(axis, axis.position, world, direction);
            if new_top != top {
                self.top = new_top;
                changed = true;
            }
        }
        if let Some(world) =
            renderer.slider(self.bottom_id(), self.bottom_anchor, dir, &self.style)
        {
            let new_bottom = distance_along_axis(axis, axis.position, world, direction);
            if new_bottom != bottom {
                self.bottom = new_bottom;
                changed = true;
            }
        }

        if changed {
            tracing::trace!(
                owner = self.owner,
                top = self.top,
                bottom = self.bottom,
                "bounds handle dragged"
            );
        }

        BoundsHandleResult {
            changed,
            top: self.top,
            bottom: self.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::recording::RecordingRenderer;
    use crate::handles::NoGuideline;
    use melt_scene::LineMode;

    fn handle() -> VerticalBoundsHandle {
        VerticalBoundsHandle::default()
    }

    #[test]
    fn dragging_top_updates_only_top() {
        let axis = Axis::default();
        let mut handle = handle();
        let mut renderer =
            RecordingRenderer::new().with_drag(handle.top_id(), Vec3::new(0.0, 0.0, 3.5));
        let result = handle.draw_handle(2.0, -1.0, &axis, AxisDirection::Forward, &mut renderer);
        assert!(result.changed);
        assert_eq!(result.top, 3.5);
        assert_eq!(result.bottom, -1.0);
    }

    #[test]
    fn dragging_bottom_ignores_off_axis_motion() {
        let axis = Axis::default();
        let mut handle = handle();
        let mut renderer = RecordingRenderer::new()
            .with_drag(handle.bottom_id(), Vec3::new(4.0, -3.0, -2.25));
        let result = handle.draw_handle(2.0, -1.0, &axis, AxisDirection::Forward, &mut renderer);
        assert!(result.changed);
        assert_eq!(result.top, 2.0);
        assert_eq!(result.bottom, -2.25);
    }

    #[test]
    fn no_drag_is_idempotent() {
        let axis = Axis::from_rotation(
            Vec3::new(1.0, 2.0, 3.0),
            glam::Quat::from_rotation_y(0.7),
        );
        let mut handle = handle();

        let mut first = RecordingRenderer::new();
        let a = handle.draw_handle(1.5, 0.25, &axis, AxisDirection::Forward, &mut first);
        let anchors_a = handle.anchors();
        let mut second = RecordingRenderer::new();
        let b = handle.draw_handle(1.5, 0.25, &axis, AxisDirection::Forward, &mut second);
        let anchors_b = handle.anchors();

        assert!(!a.changed);
        assert!(!b.changed);
        assert_eq!(a, b);
        assert_eq!(anchors_a, anchors_b);
        assert_eq!(first.draw_list, second.draw_list);
    }

    #[test]
    fn drag_to_same_position_reports_no_change() {
        let axis = Axis::default();
        let mut handle = handle();
        let mut renderer =
            RecordingRenderer::new().with_drag(handle.top_id(), Vec3::new(0.0, 0.0, 2.0));
        let result = handle.draw_handle(2.0, 0.0, &axis, AxisDirection::Forward, &mut renderer);
        assert!(!result.changed);
        assert_eq!(result.top, 2.0);
    }

    #[test]
    fn coincident_bounds_draw_degenerate_guideline() {
        let axis = Axis::default();
        let mut handle = handle();
        let mut renderer = RecordingRenderer::new();
        let result = handle.draw_handle(5.0, 5.0, &axis, AxisDirection::Forward, &mut renderer);
        assert!(!result.changed);

        let lines: Vec<_> = renderer.draw_list.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].start, lines[0].end);
        assert_eq!(lines[0].mode, LineMode::LightDotted);
        assert!(lines[0].start.iter().all(|v| v.is_finite()));

        let sliders: Vec<_> = renderer.draw_list.sliders().collect();
        assert_eq!(sliders.len(), 2);
        assert_eq!(sliders[0].position, [0.0, 0.0, 5.0]);
        assert_eq!(sliders[0].position, sliders[1].position);
    }

    #[test]
    fn top_may_cross_below_bottom() {
        let axis = Axis::default();
        let mut handle = handle();
        let mut renderer =
            RecordingRenderer::new().with_drag(handle.top_id(), Vec3::new(0.0, 0.0, -4.0));
        let result = handle.draw_handle(1.0, 0.0, &axis, AxisDirection::Forward, &mut renderer);
        assert!(result.changed);
        assert_eq!(result.top, -4.0);
        assert_eq!(result.bottom, 0.0);
    }

    #[test]
    fn sliders_follow_rotated_axis() {
        let axis = Axis::from_rotation(
            Vec3::new(0.0, 1.0, 0.0),
            glam::Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
        );
        let mut handle = VerticalBoundsHandle::new(3, NoGuideline);
        handle.style = HandleStyle {
            color: [10, 20, 30, 255],
            screenspace_size: 0.1,
        };
        let mut renderer = RecordingRenderer::new();
        handle.draw_handle(2.0, 0.0, &axis, AxisDirection::Forward, &mut renderer);

        assert_eq!(renderer.draw_list.lines().count(), 0);
        let top = renderer.draw_list.slider(handle.top_id()).copied();
        let Some(top) = top else {
            panic!("top slider missing");
        };
        let expected = axis.position + axis.forward * 2.0;
        assert!((glam::Vec3::from(top.position) - expected).length() < 1.0e-5);
        assert_eq!(top.color, [10, 20, 30, 255]);
        assert_eq!(top.screenspace_size, 0.1);
        assert!((glam::Vec3::from(top.direction) - axis.forward).length() < 1.0e-6);
    }
}
