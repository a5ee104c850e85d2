use melt_scene::{HandleId, HandlePart};

use super::{HandleRenderer, HandleStyle};
use crate::axis::{distance_along_axis, Axis, AxisDirection};

const RADIUS_SCALE: f32 = 0.5;
const RADIUS_OFFSET: f32 = 1.0;

/// Maps a normalized radius in [-1, 1] to a world radius in [0, 1].
pub fn radius_to_world(normalized: f32) -> f32 {
    (normalized + RADIUS_OFFSET) * RADIUS_SCALE
}

/// Inverse of [`radius_to_world`].
pub fn radius_to_normalized(world: f32) -> f32 {
    world / RADIUS_SCALE - RADIUS_OFFSET
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusHandleResult {
    pub changed: bool,
    pub radius: f32,
}

/// Circle around the bottom anchor with a slider on its rim along `axis.up`.
#[derive(Debug, Clone, Default)]
pub struct RadiusHandle {
    pub owner: u64,
    pub style: HandleStyle,
}

impl RadiusHandle {
    pub fn new(owner: u64) -> Self {
        Self {
            owner,
            style: HandleStyle::default(),
        }
    }

    pub fn id(&self) -> HandleId {
        HandleId::new(self.owner, HandlePart::Radius)
    }

    pub fn draw_handle<R: HandleRenderer + ?Sized>(
        &self,
        axis: &Axis,
        bottom: f32,
        radius: f32,
        renderer: &mut R,
    ) -> RadiusHandleResult {
        let bottom_anchor = axis.point_along(AxisDirection::Forward, bottom);
        let scaled_radius = radius_to_world(radius);

        renderer.circle(bottom_anchor, axis.forward, axis.right, scaled_radius);

        let slider_anchor = bottom_anchor + axis.up * scaled_radius;
        let Some(world) = renderer.slider(self.id(), slider_anchor, axis.up, &self.style) else {
            return RadiusHandleResult {
                changed: false,
                radius,
            };
        };

        // measured from the axis origin; the bottom offset is orthogonal to up
        let projected = distance_along_axis(axis, axis.position, world, AxisDirection::Up);
        if projected == scaled_radius {
            return RadiusHandleResult {
                changed: false,
                radius,
            };
        }

        let new_radius = radius_to_normalized(projected);
        tracing::trace!(owner = self.owner, radius = new_radius, "radius handle dragged");
        RadiusHandleResult {
            changed: true,
            radius: new_radius,
        }
    }
}
