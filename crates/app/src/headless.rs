use std::path::{Path, PathBuf};

use glam::Vec3;
use melt_core::{MeltEditor, Project, RecordingRenderer};
use melt_scene::{HandleId, HandlePart};

use crate::app::{parse_project, save_project};

#[derive(Debug, Default, PartialEq)]
struct HeadlessArgs {
    project_path: Option<PathBuf>,
    drags: Vec<(HandlePart, Vec3)>,
    save_path: Option<PathBuf>,
    print: bool,
    help: bool,
}

pub fn maybe_run_headless(args: &[String]) -> Result<bool, String> {
    if !args
        .iter()
        .any(|arg| arg == "--headless" || arg == "-headless")
    {
        return Ok(false);
    }

    let parsed = parse_headless_args(args)?;
    if parsed.help {
        print_headless_help();
        return Ok(true);
    }

    let mut project = match &parsed.project_path {
        Some(path) => load_project(path)?,
        None => Project::with_default_deformer(),
    };

    for (part, world) in &parsed.drags {
        let edits = apply_drag(&mut project, *part, *world);
        tracing::info!("headless: drag {:?} to {} produced {} edit(s)", part, world, edits);
    }

    if let Some(path) = parsed.save_path {
        save_project(&project, &path).map_err(|err| err.to_string())?;
        tracing::info!("headless: saved project to {:?}", path);
    }

    if parsed.print {
        let json = serde_json::to_string_pretty(&project).map_err(|err| err.to_string())?;
        println!("{json}");
    }

    tracing::info!("headless: completed");
    Ok(true)
}

fn parse_headless_args(args: &[String]) -> Result<HeadlessArgs, String> {
    let mut parsed = HeadlessArgs::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--headless" | "-headless" => {}
            "--project" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--project requires a path".to_string())?;
                parsed.project_path = Some(PathBuf::from(value));
            }
            "--drag" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--drag requires part=x,y,z".to_string())?;
                parsed.drags.push(parse_drag(value)?);
            }
            "--save" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--save requires a path".to_string())?;
                parsed.save_path = Some(PathBuf::from(value));
            }
            "--print" => {
                parsed.print = true;
            }
            "--help" | "-h" => {
                parsed.help = true;
            }
            other => return Err(format!("unknown argument {other}")),
        }
    }

    Ok(parsed)
}

fn parse_drag(value: &str) -> Result<(HandlePart, Vec3), String> {
    let (part, position) = value
        .split_once('=')
        .ok_or_else(|| format!("expected part=x,y,z, got {value}"))?;
    let part = match part.trim() {
        "top" => HandlePart::Top,
        "bottom" => HandlePart::Bottom,
        "radius" => HandlePart::Radius,
        other => return Err(format!("unknown handle {other}; use top, bottom or radius")),
    };
    let coords = position
        .split(',')
        .map(|c| c.trim().parse::<f32>().map_err(|err| format!("{c}: {err}")))
        .collect::<Result<Vec<_>, _>>()?;
    let [x, y, z] = coords[..] else {
        return Err(format!("expected three coordinates, got {}", coords.len()));
    };
    Ok((part, Vec3::new(x, y, z)))
}

fn print_headless_help() {
    println!(
        "Headless mode options:\n  --headless | -headless\n  --project <path>\n  \
         --drag <top|bottom|radius>=x,y,z (repeatable)\n  --save <path>\n  --print"
    );
}

fn load_project(path: &Path) -> Result<Project, String> {
    let data = std::fs::read(path).map_err(|err| err.to_string())?;
    parse_project(&data).map_err(|err| err.to_string())
}

/// Runs one handle frame per selected deformer with `part` dragged to `world`.
fn apply_drag(project: &mut Project, part: HandlePart, world: Vec3) -> usize {
    let settings = project.settings.editor.clone();
    let mut applied = 0;
    for id in project.selection.clone() {
        let Some(melt) = project.deformer(id).cloned() else {
            continue;
        };
        let mut editor = MeltEditor::new(id);
        let mut renderer = RecordingRenderer::new().with_drag(HandleId::new(id, part), world);
        for edit in editor.scene_gui(&melt, &settings, &mut renderer) {
            if let Some(melt) = project.deformer_mut(edit.deformer) {
                edit.apply(melt);
                applied += 1;
            }
        }
    }
    applied
}
