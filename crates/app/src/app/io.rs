use std::io;
use std::path::{Path, PathBuf};

use rfd::FileDialog;

use melt_core::Project;

use super::MeltApp;

impl MeltApp {
    pub(super) fn new_project(&mut self) {
        self.project = Project::with_default_deformer();
        self.project_path = None;
        self.reset_session();
        tracing::info!("new project created");
    }

    pub(super) fn save_project_to(&self, path: &Path) -> io::Result<()> {
        save_project(&self.project, path)
    }

    pub(crate) fn load_project_from(&mut self, path: &Path) -> io::Result<()> {
        let data = std::fs::read(path)?;
        self.load_project_from_bytes(&data, Some(path.to_path_buf()))
    }

    pub(super) fn save_project(&mut self) {
        let Some(path) = self.project_path.clone() else {
            tracing::warn!("no project path set; use Save As");
            return;
        };
        match self.save_project_to(&path) {
            Ok(()) => tracing::info!("project saved"),
            Err(err) => tracing::error!("failed to save project: {}", err),
        }
    }

    pub(super) fn open_project_dialog(&mut self) {
        if let Some(path) = FileDialog::new()
            .add_filter("Melt Project", &["json"])
            .pick_file()
        {
            match self.load_project_from(&path) {
                Ok(()) => tracing::info!("project loaded"),
                Err(err) => tracing::error!("failed to load project: {}", err),
            }
        }
    }

    pub(super) fn save_project_dialog(&mut self) {
        if let Some(path) = FileDialog::new()
            .add_filter("Melt Project", &["json"])
            .set_file_name("melt.json")
            .save_file()
        {
            match self.save_project_to(&path) {
                Ok(()) => {
                    self.project_path = Some(path);
                    tracing::info!("project saved");
                }
                Err(err) => tracing::error!("failed to save project: {}", err),
            }
        }
    }

    fn load_project_from_bytes(&mut self, data: &[u8], path: Option<PathBuf>) -> io::Result<()> {
        self.project = parse_project(data)?;
        self.project_path = path;
        self.reset_session();
        Ok(())
    }

    fn reset_session(&mut self) {
        self.undo_stack.clear();
        self.slider_drag = None;
        self.hovered_slider = None;
        self.last_draw_list.clear();
        self.editors.clear();
        self.sync_editors();
    }
}

pub(crate) fn parse_project(data: &[u8]) -> io::Result<Project> {
    let mut project: Project = serde_json::from_slice(data)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    project.migrate_to_latest();
    Ok(project)
}

pub(crate) fn save_project(project: &Project, path: &Path) -> io::Result<()> {
    let data = serde_json::to_vec_pretty(project).map_err(io::Error::other)?;
    std::fs::write(path, data)
}
