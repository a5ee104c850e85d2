use crate::axis::AxisDirection;
use crate::deformer::MeltDeformer;
use crate::handles::bounds::VerticalBoundsHandle;
use crate::handles::radius::RadiusHandle;
use crate::handles::{HandleRenderer, LineGuideline};
use crate::settings::EditorSettings;

pub const CHANGED_BOUNDS: &str = "Changed Bounds";
pub const CHANGED_RADIUS: &str = "Changed Radius";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleEditKind {
    Bounds { top: f32, bottom: f32 },
    Radius(f32),
}

/// A change produced by the viewport handles, ready to be committed by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleEdit {
    pub deformer: u64,
    pub kind: HandleEditKind,
}

impl HandleEdit {
    pub fn label(&self) -> &'static str {
        match self.kind {
            HandleEditKind::Bounds { .. } => CHANGED_BOUNDS,
            HandleEditKind::Radius(_) => CHANGED_RADIUS,
        }
    }

    pub fn apply(&self, melt: &mut MeltDeformer) {
        match self.kind {
            HandleEditKind::Bounds { top, bottom } => melt.set_bounds(top, bottom),
            HandleEditKind::Radius(radius) => melt.set_radius(radius),
        }
    }
}

/// Viewport handles for one melt deformer.
#[derive(Debug, Clone)]
pub struct MeltEditor {
    deformer: u64,
    bounds_handle: VerticalBoundsHandle<LineGuideline>,
    radius_handle: RadiusHandle,
}

impl MeltEditor {
    pub fn new(deformer: u64) -> Self {
        Self {
            deformer,
            bounds_handle: VerticalBoundsHandle::new(deformer, LineGuideline::default()),
            radius_handle: RadiusHandle::new(deformer),
        }
    }

    pub fn deformer(&self) -> u64 {
        self.deformer
    }

    pub fn bounds_handle(&self) -> &VerticalBoundsHandle<LineGuideline> {
        &self.bounds_handle
    }

    pub fn radius_handle(&self) -> &RadiusHandle {
        &self.radius_handle
    }

    /// Draws the radius handle then the bounds handle and returns the edits they produced.
    pub fn scene_gui<R: HandleRenderer + ?Sized>(
        &mut self,
        melt: &MeltDeformer,
        settings: &EditorSettings,
        renderer: &mut R,
    ) -> Vec<HandleEdit> {
        let axis = melt.axis();
        let mut edits = Vec::new();

        self.radius_handle.style = settings.handle_style();
        let radius = self
            .radius_handle
            .draw_handle(&axis, melt.bottom, melt.radius, renderer);
        if radius.changed {
            edits.push(HandleEdit {
                deformer: self.deformer,
                kind: HandleEditKind::Radius(radius.radius),
            });
        }

        self.bounds_handle.style = settings.handle_style();
        self.bounds_handle.guideline = settings.guideline();
        let bounds = self.bounds_handle.draw_handle(
            melt.top,
            melt.bottom,
            &axis,
            AxisDirection::Forward,
            renderer,
        );
        if bounds.changed {
            edits.push(HandleEdit {
                deformer: self.deformer,
                kind: HandleEditKind::Bounds {
                    top: bounds.top,
                    bottom: bounds.bottom,
                },
            });
        }

        edits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::recording::RecordingRenderer;
    use approx::assert_relative_eq;
    use glam::Vec3;
    use melt_scene::{HandleId, HandlePart, LineMode};

    fn melt(top: f32, bottom: f32, radius: f32) -> MeltDeformer {
        MeltDeformer {
            id: 9,
            top,
            bottom,
            radius,
            ..MeltDeformer::default()
        }
    }

    #[test]
    fn idle_frame_produces_no_edits() {
        let mut editor = MeltEditor::new(9);
        let settings = EditorSettings::default();
        let mut renderer = RecordingRenderer::new();
        let edits = editor.scene_gui(&melt(2.0, -1.0, 0.0), &settings, &mut renderer);
        assert!(edits.is_empty());
        assert_eq!(renderer.draw_list.sliders().count(), 3);
        assert_eq!(renderer.draw_list.circles().count(), 1);
        assert_eq!(renderer.draw_list.lines().count(), 1);
    }

    #[test]
    fn top_drag_becomes_bounds_edit() {
        let mut editor = MeltEditor::new(9);
        let settings = EditorSettings::default();
        let mut renderer = RecordingRenderer::new()
            .with_drag(HandleId::new(9, HandlePart::Top), Vec3::new(0.0, 0.0, 3.5));
        let mut model = melt(2.0, -1.0, 0.0);
        let edits = editor.scene_gui(&model, &settings, &mut renderer);
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].label(), CHANGED_BOUNDS);
        edits[0].apply(&mut model);
        assert_eq!(model.top, 3.5);
        assert_eq!(model.bottom, -1.0);
    }

    #[test]
    fn radius_drag_becomes_radius_edit() {
        let mut editor = MeltEditor::new(9);
        let settings = EditorSettings::default();
        let mut renderer = RecordingRenderer::new()
            .with_drag(HandleId::new(9, HandlePart::Radius), Vec3::new(0.0, 0.75, 0.0));
        let mut model = melt(1.0, 0.0, 0.0);
        let edits = editor.scene_gui(&model, &settings, &mut renderer);
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].label(), CHANGED_RADIUS);
        edits[0].apply(&mut model);
        assert_relative_eq!(model.radius, 0.5, epsilon = 1.0e-6);
    }

    #[test]
    fn settings_drive_handle_style() {
        let mut editor = MeltEditor::new(1);
        let settings = EditorSettings {
            solid_handle_color: [1, 2, 3, 4],
            screenspace_slider_handle_cap_size: 0.2,
            guideline: crate::settings::GuidelineMode::Solid,
            ..EditorSettings::default()
        };
        let mut renderer = RecordingRenderer::new();
        editor.scene_gui(&MeltDeformer::new(1), &settings, &mut renderer);
        for slider in renderer.draw_list.sliders() {
            assert_eq!(slider.color, [1, 2, 3, 4]);
            assert_eq!(slider.screenspace_size, 0.2);
        }
        let line = renderer.draw_list.lines().next().copied();
        assert_eq!(line.map(|line| line.mode), Some(LineMode::Solid));
    }

    #[test]
    fn editors_for_different_deformers_ignore_each_other() {
        let settings = EditorSettings::default();
        let mut first = MeltEditor::new(1);
        let mut second = MeltEditor::new(2);
        let mut renderer = RecordingRenderer::new()
            .with_drag(HandleId::new(2, HandlePart::Bottom), Vec3::new(0.0, 0.0, -0.5));
        let a = first.scene_gui(&MeltDeformer::new(1), &settings, &mut renderer);
        let b = second.scene_gui(&MeltDeformer::new(2), &settings, &mut renderer);
        assert!(a.is_empty());
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].deformer, 2);
        assert_eq!(
            b[0].kind,
            HandleEditKind::Bounds {
                top: 1.0,
                bottom: -0.5
            }
        );
    }
}
