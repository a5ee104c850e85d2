#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    #[default]
    Solid,
    LightDotted,
    SolidDotted,
    Light,
}

impl LineMode {
    pub fn is_dotted(self) -> bool {
        matches!(self, LineMode::LightDotted | LineMode::SolidDotted)
    }

    pub fn is_light(self) -> bool {
        matches!(self, LineMode::Light | LineMode::LightDotted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandlePart {
    Top,
    Bottom,
    Radius,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId {
    pub owner: u64,
    pub part: HandlePart,
}

impl HandleId {
    pub fn new(owner: u64, part: HandlePart) -> Self {
        Self { owner, part }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLine {
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub mode: LineMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCircle {
    pub center: [f32; 3],
    pub normal: [f32; 3],
    pub from: [f32; 3],
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSlider {
    pub id: HandleId,
    pub position: [f32; 3],
    pub direction: [f32; 3],
    pub color: [u8; 4],
    pub screenspace_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HandleDrawable {
    Line(SceneLine),
    Circle(SceneCircle),
    Slider(SceneSlider),
}

/// Draw commands issued by the handles during one frame, in issue order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandleDrawList {
    pub drawables: Vec<HandleDrawable>,
}

impl HandleDrawList {
    pub fn clear(&mut self) {
        self.drawables.clear();
    }

    pub fn push(&mut self, drawable: HandleDrawable) {
        self.drawables.push(drawable);
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &SceneLine> {
        self.drawables.iter().filter_map(|drawable| match drawable {
            HandleDrawable::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &SceneCircle> {
        self.drawables.iter().filter_map(|drawable| match drawable {
            HandleDrawable::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn sliders(&self) -> impl Iterator<Item = &SceneSlider> {
        self.drawables.iter().filter_map(|drawable| match drawable {
            HandleDrawable::Slider(slider) => Some(slider),
            _ => None,
        })
    }

    pub fn slider(&self, id: HandleId) -> Option<&SceneSlider> {
        self.sliders().find(|slider| slider.id == id)
    }
}

/// Line segments approximating a circle, for backends without a native 3D circle primitive.
pub fn circle_points(circle: &SceneCircle, steps: usize) -> Vec<[f32; 3]> {
    let center = glam::Vec3::from(circle.center);
    let normal = glam::Vec3::from(circle.normal).normalize_or_zero();
    let from = glam::Vec3::from(circle.from);
    let u = (from - normal * from.dot(normal)).normalize_or_zero();
    let v = normal.cross(u).normalize_or_zero();
    let steps = steps.max(3);
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let angle = t * std::f32::consts::TAU;
        let world = center + (u * angle.cos() + v * angle.sin()) * circle.radius;
        points.push(world.to_array());
    }
    points
}
