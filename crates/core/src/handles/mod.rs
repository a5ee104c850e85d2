use glam::Vec3;
use melt_scene::{HandleId, LineMode};

pub mod bounds;
pub mod radius;
pub mod recording;

/// Presentation for a draggable slider, supplied fresh each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleStyle {
    pub color: [u8; 4],
    pub screenspace_size: f32,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            color: [255, 255, 255, 255],
            screenspace_size: 0.06,
        }
    }
}

/// Drawing and input surface the handles issue their commands to.
///
/// `slider` draws a cap at `position` that can only travel along `direction`. It returns the
/// dragged world position when the user moved that slider this frame and `None` otherwise;
/// tracking which slider is engaged is up to the implementor.
pub trait HandleRenderer {
    fn line(&mut self, start: Vec3, end: Vec3, mode: LineMode);

    fn circle(&mut self, center: Vec3, normal: Vec3, from: Vec3, radius: f32);

    fn slider(
        &mut self,
        id: HandleId,
        position: Vec3,
        direction: Vec3,
        style: &HandleStyle,
    ) -> Option<Vec3>;
}

/// Strategy for drawing the guide between two handle anchors.
pub trait Guideline {
    fn draw<R: HandleRenderer + ?Sized>(&self, renderer: &mut R, start: Vec3, end: Vec3);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineGuideline {
    pub mode: LineMode,
}

impl Default for LineGuideline {
    fn default() -> Self {
        Self {
            mode: LineMode::LightDotted,
        }
    }
}

impl Guideline for LineGuideline {
    fn draw<R: HandleRenderer + ?Sized>(&self, renderer: &mut R, start: Vec3, end: Vec3) {
        renderer.line(start, end, self.mode);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoGuideline;

impl Guideline for NoGuideline {
    fn draw<R: HandleRenderer + ?Sized>(&self, _renderer: &mut R, _start: Vec3, _end: Vec3) {}
}
