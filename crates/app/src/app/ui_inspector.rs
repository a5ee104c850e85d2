use egui::Ui;
use melt_core::{
    melt_param_specs, AxisTransform, MeltDeformer, ParamKind, ParamRange, ParamSpec, ParamValue,
    ParamWidget,
};

use super::MeltApp;

const CHANGED_PARAMETERS: &str = "Changed Parameters";
const CHANGED_AXIS: &str = "Changed Axis";

enum InspectorEdit {
    Param(&'static str, ParamValue),
    Axis(AxisTransform),
}

impl MeltApp {
    pub(super) fn show_inspector(&mut self, ctx: &egui::Context, pointer_down: bool) {
        if !self.project.settings.panels.show_inspector {
            return;
        }

        let mut select: Option<(u64, bool)> = None;
        let mut edits: Vec<InspectorEdit> = Vec::new();
        let panel = egui::SidePanel::left("inspector")
            .resizable(true)
            .default_width(self.project.settings.inspector_width)
            .show(ctx, |ui| {
                ui.heading("Deformers");
                for melt in &self.project.deformers {
                    let selected = self.project.selection.contains(&melt.id);
                    let text = format!("{} #{}", melt.name, melt.id);
                    if ui.selectable_label(selected, text).clicked() {
                        let additive = ui.input(|i| i.modifiers.shift || i.modifiers.command);
                        select = Some((melt.id, additive));
                    }
                }
                ui.separator();

                let Some(shown) = self.project.selected().next().cloned() else {
                    ui.label("Select a deformer to edit its parameters.");
                    return;
                };
                let count = self.project.selection.len();
                if count > 1 {
                    ui.label(format!("Editing {count} deformers"));
                }
                egui::ScrollArea::vertical().show(ui, |ui| {
                    edits.extend(param_rows(ui, &shown));
                    ui.separator();
                    if let Some(axis) = axis_rows(ui, &shown.axis) {
                        edits.push(InspectorEdit::Axis(axis));
                    }
                });
            });
        self.project.settings.inspector_width = panel.response.rect.width();

        if let Some((id, additive)) = select {
            self.select_deformer(id, additive);
        }
        if !edits.is_empty() {
            self.apply_inspector_edits(edits, pointer_down);
        }
    }

    fn select_deformer(&mut self, id: u64, additive: bool) {
        let selection = &mut self.project.selection;
        if additive {
            if let Some(index) = selection.iter().position(|selected| *selected == id) {
                selection.remove(index);
            } else {
                selection.push(id);
            }
        } else {
            selection.clear();
            selection.push(id);
        }
        self.sync_editors();
    }

    fn apply_inspector_edits(&mut self, edits: Vec<InspectorEdit>, pointer_down: bool) {
        let label = match edits.first() {
            Some(InspectorEdit::Axis(_)) => CHANGED_AXIS,
            _ => CHANGED_PARAMETERS,
        };
        self.record_undo(label, pointer_down);
        let selection = self.project.selection.clone();
        for id in selection {
            let Some(melt) = self.project.deformer_mut(id) else {
                continue;
            };
            for edit in &edits {
                match edit {
                    InspectorEdit::Param(key, value) => {
                        if let Err(err) = melt.set_param(key, *value) {
                            tracing::warn!("failed to set {}: {}", key, err);
                        }
                    }
                    InspectorEdit::Axis(axis) => melt.axis = *axis,
                }
            }
        }
    }
}

fn param_rows(ui: &mut Ui, melt: &MeltDeformer) -> Vec<InspectorEdit> {
    let mut edits = Vec::new();
    let mut section: &[&str] = &[];
    for spec in melt_param_specs() {
        if spec.section != section {
            section = spec.section;
            if !section.is_empty() {
                ui.add_space(4.0);
                ui.strong(section.join(" / "));
            }
        }
        if let Some(value) = param_row(ui, melt, &spec) {
            edits.push(InspectorEdit::Param(spec.key, value));
        }
    }
    edits
}

fn param_row(ui: &mut Ui, melt: &MeltDeformer, spec: &ParamSpec) -> Option<ParamValue> {
    let mut changed = false;
    let value = match spec.kind {
        ParamKind::Float => {
            let mut value = melt.get_float(spec.key, 0.0);
            let (min, max) = melt.float_limits(spec.key);
            let range = min.unwrap_or(f32::MIN)..=max.unwrap_or(f32::MAX);
            ui.horizontal(|ui| {
                let label = ui.label(spec.label);
                let response = match (spec.widget, spec.range) {
                    (ParamWidget::Slider, Some(ParamRange::Float { min, max })) => {
                        ui.add(egui::Slider::new(&mut value, min..=max))
                    }
                    _ => ui.add(egui::DragValue::new(&mut value).speed(0.01).range(range)),
                };
                if let Some(help) = spec.help {
                    label.on_hover_text(help);
                }
                changed = response.changed();
            });
            ParamValue::Float(value)
        }
        ParamKind::Bool => {
            let mut value = melt.get_bool(spec.key, false);
            let response = ui.checkbox(&mut value, spec.label);
            changed = response.changed();
            if let Some(help) = spec.help {
                response.on_hover_text(help);
            }
            ParamValue::Bool(value)
        }
    };
    changed.then_some(value)
}

fn axis_rows(ui: &mut Ui, axis: &AxisTransform) -> Option<AxisTransform> {
    let mut edited = *axis;
    let mut changed = false;
    ui.strong("Axis");
    ui.horizontal(|ui| {
        ui.label("Position");
        for value in &mut edited.position {
            changed |= ui
                .add(egui::DragValue::new(value).speed(0.01))
                .changed();
        }
    });
    ui.horizontal(|ui| {
        ui.label("Rotation");
        for value in &mut edited.rotation_deg {
            changed |= ui
                .add(egui::DragValue::new(value).speed(0.5).suffix("°"))
                .changed();
        }
    });
    changed.then_some(edited)
}
