use melt_scene::LineMode;
use serde::{Deserialize, Serialize};

use crate::handles::{HandleStyle, LineGuideline};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuidelineMode {
    Solid,
    Light,
    SolidDotted,
    LightDotted,
}

impl GuidelineMode {
    pub fn line_mode(self) -> LineMode {
        match self {
            GuidelineMode::Solid => LineMode::Solid,
            GuidelineMode::Light => LineMode::Light,
            GuidelineMode::SolidDotted => LineMode::SolidDotted,
            GuidelineMode::LightDotted => LineMode::LightDotted,
        }
    }
}

/// Editor-wide handle appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub solid_handle_color: [u8; 4],
    pub light_handle_color: [u8; 4],
    pub screenspace_slider_handle_cap_size: f32,
    pub guideline: GuidelineMode,
    pub dotted_line_size: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            solid_handle_color: [255, 180, 60, 255],
            light_handle_color: [255, 180, 60, 110],
            screenspace_slider_handle_cap_size: 0.06,
            guideline: GuidelineMode::LightDotted,
            dotted_line_size: 5.0,
        }
    }
}

impl EditorSettings {
    pub fn handle_style(&self) -> HandleStyle {
        HandleStyle {
            color: self.solid_handle_color,
            screenspace_size: self.screenspace_slider_handle_cap_size.max(0.0),
        }
    }

    pub fn guideline(&self) -> LineGuideline {
        LineGuideline {
            mode: self.guideline.line_mode(),
        }
    }

    pub fn line_color(&self, mode: LineMode) -> [u8; 4] {
        if mode.is_light() {
            self.light_handle_color
        } else {
            self.solid_handle_color
        }
    }
}
