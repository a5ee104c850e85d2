use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisTransform};

pub const NAME: &str = "Melt";

/// Persisted parameters of a melt deformer instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeltDeformer {
    pub id: u64,
    pub name: String,
    pub factor: f32,
    pub falloff: f32,
    pub radius: f32,
    pub use_normals: bool,
    pub clamp_at_bottom: bool,
    pub top: f32,
    pub bottom: f32,
    pub vertical_frequency: f32,
    pub vertical_magnitude: f32,
    pub radial_frequency: f32,
    pub radial_magnitude: f32,
    pub axis: AxisTransform,
}

impl Default for MeltDeformer {
    fn default() -> Self {
        Self {
            id: 0,
            name: NAME.to_string(),
            factor: 0.0,
            falloff: 2.0,
            radius: 0.0,
            use_normals: false,
            clamp_at_bottom: true,
            top: 1.0,
            bottom: 0.0,
            vertical_frequency: 10.0,
            vertical_magnitude: 0.1,
            radial_frequency: 10.0,
            radial_magnitude: 0.1,
            axis: AxisTransform::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Float(f32),
    Bool(bool),
}

impl MeltDeformer {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis.axis()
    }

    /// Editable range of a float field given the current values of its coupled fields.
    pub fn float_limits(&self, key: &str) -> (Option<f32>, Option<f32>) {
        match key {
            "factor" | "falloff" => (Some(0.0), None),
            "top" => (Some(self.bottom), None),
            "bottom" => (None, Some(self.top)),
            "radius" => (Some(-1.0), Some(1.0)),
            _ => (None, None),
        }
    }

    pub fn get(&self, key: &str) -> Option<ParamValue> {
        let value = match key {
            "factor" => ParamValue::Float(self.factor),
            "falloff" => ParamValue::Float(self.falloff),
            "radius" => ParamValue::Float(self.radius),
            "use_normals" => ParamValue::Bool(self.use_normals),
            "clamp_at_bottom" => ParamValue::Bool(self.clamp_at_bottom),
            "top" => ParamValue::Float(self.top),
            "bottom" => ParamValue::Float(self.bottom),
            "vertical_frequency" => ParamValue::Float(self.vertical_frequency),
            "vertical_magnitude" => ParamValue::Float(self.vertical_magnitude),
            "radial_frequency" => ParamValue::Float(self.radial_frequency),
            "radial_magnitude" => ParamValue::Float(self.radial_magnitude),
            _ => return None,
        };
        Some(value)
    }

    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        match self.get(key) {
            Some(ParamValue::Float(value)) => value,
            _ => default,
        }
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(ParamValue::Bool(value)) => value,
            _ => default,
        }
    }

    /// Sets a parameter from the inspector, clamping floats into [`Self::float_limits`].
    /// Returns whether the stored value changed.
    pub fn set_param(&mut self, key: &str, value: ParamValue) -> Result<bool, String> {
        let value = match value {
            ParamValue::Float(value) => {
                if !value.is_finite() {
                    return Err(format!("{key} must be finite"));
                }
                let (min, max) = self.float_limits(key);
                let mut clamped = value;
                if let Some(min) = min {
                    clamped = clamped.max(min);
                }
                if let Some(max) = max {
                    clamped = clamped.min(max);
                }
                ParamValue::Float(clamped)
            }
            other => other,
        };
        let before = self.get(key);
        let slot_changed = match (key, value) {
            ("factor", ParamValue::Float(v)) => replace(&mut self.factor, v),
            ("falloff", ParamValue::Float(v)) => replace(&mut self.falloff, v),
            ("radius", ParamValue::Float(v)) => replace(&mut self.radius, v),
            ("top", ParamValue::Float(v)) => replace(&mut self.top, v),
            ("bottom", ParamValue::Float(v)) => replace(&mut self.bottom, v),
            ("vertical_frequency", ParamValue::Float(v)) => {
                replace(&mut self.vertical_frequency, v)
            }
            ("vertical_magnitude", ParamValue::Float(v)) => {
                replace(&mut self.vertical_magnitude, v)
            }
            ("radial_frequency", ParamValue::Float(v)) => replace(&mut self.radial_frequency, v),
            ("radial_magnitude", ParamValue::Float(v)) => replace(&mut self.radial_magnitude, v),
            ("use_normals", ParamValue::Bool(v)) => replace(&mut self.use_normals, v),
            ("clamp_at_bottom", ParamValue::Bool(v)) => replace(&mut self.clamp_at_bottom, v),
            _ => {
                return match before {
                    Some(_) => Err(format!("wrong value type for {key}")),
                    None => Err(format!("unknown parameter {key}")),
                }
            }
        };
        if slot_changed {
            tracing::debug!(deformer = self.id, key, ?value, "parameter set");
        }
        Ok(slot_changed)
    }

    /// Stores bounds as dragged in the viewport. No ordering is applied.
    pub fn set_bounds(&mut self, top: f32, bottom: f32) {
        self.top = top;
        self.bottom = bottom;
    }

    /// Stores a dragged radius, kept inside the normalized [-1, 1] domain.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.clamp(-1.0, 1.0);
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
