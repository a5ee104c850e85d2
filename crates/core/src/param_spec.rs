#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Float,
    Bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamWidget {
    Default,
    Slider,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamRange {
    Float { min: f32, max: f32 },
}

/// Label, tooltip and layout hints for one deformer parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ParamKind,
    pub widget: ParamWidget,
    pub range: Option<ParamRange>,
    pub section: &'static [&'static str],
    pub help: Option<&'static str>,
}

impl ParamSpec {
    pub fn new(key: &'static str, label: &'static str, kind: ParamKind) -> Self {
        Self {
            key,
            label,
            kind,
            widget: ParamWidget::Default,
            range: None,
            section: &[],
            help: None,
        }
    }

    pub fn float(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ParamKind::Float)
    }

    pub fn float_slider(key: &'static str, label: &'static str, min: f32, max: f32) -> Self {
        Self::new(key, label, ParamKind::Float).with_range(ParamRange::Float { min, max }, true)
    }

    pub fn bool(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ParamKind::Bool)
    }

    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    pub fn in_section(mut self, section: &'static [&'static str]) -> Self {
        self.section = section;
        self
    }

    pub fn with_range(mut self, range: ParamRange, slider: bool) -> Self {
        self.range = Some(range);
        if slider {
            self.widget = ParamWidget::Slider;
        }
        self
    }
}

const NOISE_VERTICAL: &[&str] = &["Noise", "Vertical"];
const NOISE_RADIAL: &[&str] = &["Noise", "Radial"];

pub fn melt_param_specs() -> Vec<ParamSpec> {
    vec![
        ParamSpec::float("factor", "Factor").with_help("Strength of the effect."),
        ParamSpec::float("falloff", "Falloff")
            .with_help("Higher values make the effect fade more sharply."),
        ParamSpec::float_slider("radius", "Radius", -1.0, 1.0)
            .with_help("How far the vertices spread as they approach the bottom."),
        ParamSpec::bool("use_normals", "Use Normals").with_help(
            "When true the vertices will spread along the normals' xy plane (relative to the \
             melt axis) which can look better, but can result in a split mesh if you have \
             unsmoothed vertices.",
        ),
        ParamSpec::bool("clamp_at_bottom", "Clamp At Bottom")
            .with_help("When true, vertices won't be allowed below the bottom limit."),
        ParamSpec::float("top", "Top").with_help("Any vertices above this will be unaffected."),
        ParamSpec::float("bottom", "Bottom")
            .with_help("Any vertices below this will have the full effect."),
        ParamSpec::float("vertical_frequency", "Frequency")
            .in_section(NOISE_VERTICAL)
            .with_help(
                "The frequency of the vertical noise. Lower values result in a smoother mesh.",
            ),
        ParamSpec::float("vertical_magnitude", "Magnitude")
            .in_section(NOISE_VERTICAL)
            .with_help("The strength of the vertical noise."),
        ParamSpec::float("radial_frequency", "Frequency")
            .in_section(NOISE_RADIAL)
            .with_help(
                "The frequency of the radial noise. Lower values result in a smoother mesh.",
            ),
        ParamSpec::float("radial_magnitude", "Magnitude")
            .in_section(NOISE_RADIAL)
            .with_help("The strength of the radial noise."),
    ]
}

pub fn param_spec(key: &str) -> Option<ParamSpec> {
    melt_param_specs().into_iter().find(|spec| spec.key == key)
}
