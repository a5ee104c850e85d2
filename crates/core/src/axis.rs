use glam::{EulerRot, Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Basis direction selector for an [`Axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisDirection {
    Right,
    Up,
    Forward,
}

impl AxisDirection {
    pub const X: AxisDirection = AxisDirection::Right;
    pub const Y: AxisDirection = AxisDirection::Up;
    pub const Z: AxisDirection = AxisDirection::Forward;

    pub fn local(self) -> Vec3 {
        match self {
            AxisDirection::Right => Vec3::X,
            AxisDirection::Up => Vec3::Y,
            AxisDirection::Forward => Vec3::Z,
        }
    }
}

/// Oriented frame the deformer works in: a position and an orthonormal basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub position: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Default for Axis {
    fn default() -> Self {
        Self::from_rotation(Vec3::ZERO, Quat::IDENTITY)
    }
}

impl Axis {
    pub fn from_rotation(position: Vec3, rotation: Quat) -> Self {
        let basis = Mat3::from_quat(rotation.normalize());
        Self {
            position,
            forward: basis * Vec3::Z,
            right: basis * Vec3::X,
            up: basis * Vec3::Y,
        }
    }

    pub fn dir(&self, direction: AxisDirection) -> Vec3 {
        match direction {
            AxisDirection::Right => self.right,
            AxisDirection::Up => self.up,
            AxisDirection::Forward => self.forward,
        }
    }

    pub fn point_along(&self, direction: AxisDirection, distance: f32) -> Vec3 {
        self.position + self.dir(direction) * distance
    }
}

/// Serialized form of an [`Axis`]: translation plus XYZ euler rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTransform {
    pub position: [f32; 3],
    pub rotation_deg: [f32; 3],
}

impl Default for AxisTransform {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation_deg: [0.0, 0.0, 0.0],
        }
    }
}

impl AxisTransform {
    pub fn rotation(&self) -> Quat {
        let rot = Vec3::from(self.rotation_deg) * std::f32::consts::PI / 180.0;
        Quat::from_euler(EulerRot::XYZ, rot.x, rot.y, rot.z)
    }

    pub fn axis(&self) -> Axis {
        Axis::from_rotation(Vec3::from(self.position), self.rotation())
    }
}

/// Signed length of `target - origin` projected onto one of the axis' basis directions.
pub fn distance_along_axis(
    axis: &Axis,
    origin: Vec3,
    target: Vec3,
    direction: AxisDirection,
) -> f32 {
    (target - origin).dot(axis.dir(direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_vec(rng: &mut StdRng, extent: f32) -> Vec3 {
        Vec3::new(
            rng.gen_range(-extent..extent),
            rng.gen_range(-extent..extent),
            rng.gen_range(-extent..extent),
        )
    }

    fn random_axis(rng: &mut StdRng) -> Axis {
        let transform = AxisTransform {
            position: random_vec(rng, 50.0).to_array(),
            rotation_deg: [
                rng.gen_range(-180.0..180.0),
                rng.gen_range(-180.0..180.0),
                rng.gen_range(-180.0..180.0),
            ],
        };
        transform.axis()
    }

    const DIRECTIONS: [AxisDirection; 3] = [
        AxisDirection::Forward,
        AxisDirection::Right,
        AxisDirection::Up,
    ];

    #[test]
    fn default_axis_matches_world_basis() {
        let axis = Axis::default();
        assert_eq!(axis.forward, Vec3::Z);
        assert_eq!(axis.right, Vec3::X);
        assert_eq!(axis.up, Vec3::Y);
        assert_eq!(axis.position, Vec3::ZERO);
    }

    #[test]
    fn transform_basis_is_orthonormal() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let axis = random_axis(&mut rng);
            assert_relative_eq!(axis.forward.length(), 1.0, epsilon = 1.0e-5);
            assert_relative_eq!(axis.right.length(), 1.0, epsilon = 1.0e-5);
            assert_relative_eq!(axis.up.length(), 1.0, epsilon = 1.0e-5);
            assert_relative_eq!(axis.forward.dot(axis.right), 0.0, epsilon = 1.0e-5);
            assert_relative_eq!(axis.forward.dot(axis.up), 0.0, epsilon = 1.0e-5);
            assert_relative_eq!(axis.right.dot(axis.up), 0.0, epsilon = 1.0e-5);
        }
    }

    #[test]
    fn distance_matches_dot_product() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let axis = random_axis(&mut rng);
            let p = random_vec(&mut rng, 100.0);
            let q = random_vec(&mut rng, 100.0);
            for direction in DIRECTIONS {
                let expected = (q - p).dot(axis.dir(direction));
                let actual = distance_along_axis(&axis, p, q, direction);
                assert_relative_eq!(actual, expected, epsilon = 1.0e-4);
            }
        }
    }

    #[test]
    fn distance_is_linear_in_target() {
        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..500 {
            let axis = random_axis(&mut rng);
            let p = random_vec(&mut rng, 20.0);
            let q1 = random_vec(&mut rng, 20.0);
            let q2 = random_vec(&mut rng, 20.0);
            for direction in DIRECTIONS {
                let combined = distance_along_axis(&axis, p, q1 + q2, direction);
                let split = distance_along_axis(&axis, p, q1, direction)
                    + distance_along_axis(&axis, p, q2, direction)
                    - distance_along_axis(&axis, p, p, direction);
                // affine in the target: the split sum subtracts the origin twice
                let expected = split + p.dot(axis.dir(direction));
                assert_relative_eq!(combined, expected, epsilon = 1.0e-3);
            }
        }
    }

    #[test]
    fn distance_is_additive_from_world_origin() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..200 {
            let axis = random_axis(&mut rng);
            let q1 = random_vec(&mut rng, 20.0);
            let q2 = random_vec(&mut rng, 20.0);
            for direction in DIRECTIONS {
                let combined = distance_along_axis(&axis, Vec3::ZERO, q1 + q2, direction);
                let split = distance_along_axis(&axis, Vec3::ZERO, q1, direction)
                    + distance_along_axis(&axis, Vec3::ZERO, q2, direction)
                    - distance_along_axis(&axis, Vec3::ZERO, Vec3::ZERO, direction);
                assert_relative_eq!(combined, split, epsilon = 1.0e-3);
            }
        }
    }

    #[test]
    fn point_along_round_trips_through_projection() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let axis = random_axis(&mut rng);
            let distance = rng.gen_range(-10.0..10.0);
            for direction in DIRECTIONS {
                let world = axis.point_along(direction, distance);
                let back = distance_along_axis(&axis, axis.position, world, direction);
                assert_relative_eq!(back, distance, epsilon = 1.0e-4);
            }
        }
    }

    #[test]
    fn projection_ignores_perpendicular_offsets() {
        let axis = Axis::default();
        let target = Vec3::new(4.0, -2.0, 3.5);
        assert_eq!(
            distance_along_axis(&axis, Vec3::ZERO, target, AxisDirection::Forward),
            3.5
        );
        assert_eq!(
            distance_along_axis(&axis, Vec3::ZERO, target, AxisDirection::Y),
            -2.0
        );
    }
}
