use std::collections::BTreeMap;

use glam::Vec3;
use melt_scene::{
    HandleDrawList, HandleDrawable, HandleId, LineMode, SceneCircle, SceneLine, SceneSlider,
};

use super::{HandleRenderer, HandleStyle};

/// Renderer that records every command into a [`HandleDrawList`] and answers slider queries
/// from a set of scripted drags. Each scripted drag is consumed by the first matching slider.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub draw_list: HandleDrawList,
    drags: BTreeMap<HandleId, Vec3>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drag(mut self, id: HandleId, world: Vec3) -> Self {
        self.push_drag(id, world);
        self
    }

    pub fn push_drag(&mut self, id: HandleId, world: Vec3) {
        self.drags.insert(id, world);
    }

    /// Records a slider command without consulting the scripted drags.
    pub fn record_slider(
        &mut self,
        id: HandleId,
        position: Vec3,
        direction: Vec3,
        style: &HandleStyle,
    ) {
        self.draw_list.push(HandleDrawable::Slider(SceneSlider {
            id,
            position: position.to_array(),
            direction: direction.to_array(),
            color: style.color,
            screenspace_size: style.screenspace_size,
        }));
    }

    pub fn take_draw_list(&mut self) -> HandleDrawList {
        std::mem::take(&mut self.draw_list)
    }
}

impl HandleRenderer for RecordingRenderer {
    fn line(&mut self, start: Vec3, end: Vec3, mode: LineMode) {
        self.draw_list.push(HandleDrawable::Line(SceneLine {
            start: start.to_array(),
            end: end.to_array(),
            mode,
        }));
    }

    fn circle(&mut self, center: Vec3, normal: Vec3, from: Vec3, radius: f32) {
        self.draw_list.push(HandleDrawable::Circle(SceneCircle {
            center: center.to_array(),
            normal: normal.to_array(),
            from: from.to_array(),
            radius,
        }));
    }

    fn slider(
        &mut self,
        id: HandleId,
        position: Vec3,
        direction: Vec3,
        style: &HandleStyle,
    ) -> Option<Vec3> {
        self.record_slider(id, position, direction, style);
        self.drags.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use melt_scene::HandlePart;

    #[test]
    fn record_slider_keeps_scripted_drag() {
        let id = HandleId::new(3, HandlePart::Top);
        let mut renderer = RecordingRenderer::new().with_drag(id, Vec3::Z);
        let style = HandleStyle::default();

        renderer.record_slider(id, Vec3::ZERO, Vec3::Z, &style);
        assert_eq!(renderer.draw_list.sliders().count(), 1);

        assert_eq!(renderer.slider(id, Vec3::ZERO, Vec3::Z, &style), Some(Vec3::Z));
        assert_eq!(renderer.slider(id, Vec3::ZERO, Vec3::Z, &style), None);
        assert_eq!(renderer.take_draw_list().sliders().count(), 2);
        assert!(renderer.draw_list.is_empty());
    }
}
