mod axis;
mod deformer;
mod editor;
pub mod handles;
mod param_spec;
mod project;
mod settings;
mod undo;

pub use axis::{distance_along_axis, Axis, AxisDirection, AxisTransform};
pub use deformer::{MeltDeformer, ParamValue};
pub use editor::{HandleEdit, HandleEditKind, MeltEditor, CHANGED_BOUNDS, CHANGED_RADIUS};
pub use handles::bounds::{BoundsHandleResult, VerticalBoundsHandle};
pub use handles::radius::{
    radius_to_normalized, radius_to_world, RadiusHandle, RadiusHandleResult,
};
pub use handles::recording::RecordingRenderer;
pub use handles::{Guideline, HandleRenderer, HandleStyle, LineGuideline, NoGuideline};
pub use param_spec::{melt_param_specs, param_spec, ParamKind, ParamRange, ParamSpec, ParamWidget};
pub use project::{
    CameraSettings, PanelSettings, Project, ProjectSettings, ProjectSnapshot, PROJECT_VERSION,
};
pub use settings::{EditorSettings, GuidelineMode};
pub use undo::{UndoEntry, UndoStack};

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use melt_scene::{HandleId, HandlePart};

    // axis at the origin looking down +z, dragged the way an artist would in the viewport
    #[test]
    fn end_to_end_drag_session() {
        let mut project = Project::with_default_deformer();
        let id = project.selection[0];
        let settings = project.settings.editor.clone();
        let mut editor = MeltEditor::new(id);
        let mut undo: UndoStack<ProjectSnapshot> = UndoStack::new();

        let frames = [
            (HandleId::new(id, HandlePart::Top), Vec3::new(0.0, 0.0, 2.0)),
            (HandleId::new(id, HandlePart::Top), Vec3::new(0.0, 0.0, 3.5)),
            (HandleId::new(id, HandlePart::Radius), Vec3::new(0.0, 0.75, 0.0)),
        ];
        for (handle, world) in frames {
            let Some(melt) = project.deformer(id).cloned() else {
                panic!("deformer missing");
            };
            let mut renderer = RecordingRenderer::new().with_drag(handle, world);
            let edits = editor.scene_gui(&melt, &settings, &mut renderer);
            for edit in edits {
                undo.record(edit.label(), project.snapshot(), true);
                if let Some(melt) = project.deformer_mut(edit.deformer) {
                    edit.apply(melt);
                }
            }
        }
        undo.flush_pending();

        let melt = project.deformer(id).cloned().unwrap();
        assert_eq!(melt.top, 3.5);
        assert_eq!(melt.bottom, 0.0);
        assert!((melt.radius - 0.5).abs() < 1.0e-6);
        assert_eq!(undo.len(), 2);

        let entry = undo.undo(project.snapshot()).unwrap();
        assert_eq!(entry.label, CHANGED_RADIUS);
        project.restore(entry.snapshot);
        assert_eq!(project.deformer(id).unwrap().radius, 0.0);
        assert_eq!(project.deformer(id).unwrap().top, 3.5);

        let entry = undo.undo(project.snapshot()).unwrap();
        assert_eq!(entry.label, CHANGED_BOUNDS);
        project.restore(entry.snapshot);
        assert_eq!(project.deformer(id).unwrap().top, 1.0);
    }
}
