use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicU8;
use std::sync::Arc;

use melt_core::{MeltEditor, Project, ProjectSnapshot, UndoStack};
use melt_scene::{HandleDrawList, HandleId};
use tracing_subscriber::filter::LevelFilter;

mod io;
mod logging;
mod ui;
mod ui_inspector;
mod ui_preferences;
mod ui_side_panels;
mod ui_top_bar;
mod viewport;
mod viewport_handles;

pub(crate) use io::{parse_project, save_project};
pub(crate) use logging::ConsoleBuffer;

use logging::level_filter_to_u8;
use viewport_handles::SliderDrag;

pub(crate) struct MeltApp {
    project: Project,
    project_path: Option<PathBuf>,
    console: ConsoleBuffer,
    log_level: LevelFilter,
    log_level_state: Arc<AtomicU8>,
    editors: BTreeMap<u64, MeltEditor>,
    undo_stack: UndoStack<ProjectSnapshot>,
    slider_drag: Option<SliderDrag>,
    hovered_slider: Option<HandleId>,
    last_draw_list: HandleDrawList,
    show_preferences: bool,
}

pub(crate) fn setup_tracing() -> (ConsoleBuffer, Arc<AtomicU8>) {
    logging::setup_tracing()
}

impl MeltApp {
    pub(crate) fn new(console: ConsoleBuffer, log_level_state: Arc<AtomicU8>) -> Self {
        Self {
            project: Project::with_default_deformer(),
            project_path: None,
            console,
            log_level: LevelFilter::INFO,
            log_level_state,
            editors: BTreeMap::new(),
            undo_stack: UndoStack::new(),
            slider_drag: None,
            hovered_slider: None,
            last_draw_list: HandleDrawList::default(),
            show_preferences: false,
        }
    }

    fn set_log_level(&mut self, new_level: LevelFilter) {
        if new_level == self.log_level {
            return;
        }

        self.log_level_state.store(
            level_filter_to_u8(new_level),
            std::sync::atomic::Ordering::Relaxed,
        );
        self.log_level = new_level;
    }

    fn record_undo(&mut self, label: &str, pointer_down: bool) {
        let snapshot = self.project.snapshot();
        self.undo_stack.record(label, snapshot, pointer_down);
    }

    fn restore_snapshot(&mut self, snapshot: ProjectSnapshot) {
        self.project.restore(snapshot);
        self.slider_drag = None;
        self.sync_editors();
    }

    fn try_undo(&mut self) {
        let current = self.project.snapshot();
        if let Some(entry) = self.undo_stack.undo(current) {
            tracing::info!("undo: {}", entry.label);
            self.restore_snapshot(entry.snapshot);
        }
    }

    fn try_redo(&mut self) {
        let current = self.project.snapshot();
        if let Some(entry) = self.undo_stack.redo(current) {
            tracing::info!("redo: {}", entry.label);
            self.restore_snapshot(entry.snapshot);
        }
    }

    /// Keeps one handle editor per selected deformer.
    fn sync_editors(&mut self) {
        let selection = &self.project.selection;
        self.editors.retain(|id, _| selection.contains(id));
        for id in selection {
            self.editors
                .entry(*id)
                .or_insert_with(|| MeltEditor::new(*id));
        }
    }

    fn add_deformer(&mut self) {
        self.record_undo("Add Melt Deformer", false);
        let id = self.project.add_deformer();
        self.project.selection = vec![id];
        self.sync_editors();
    }

    fn remove_selected_deformers(&mut self) {
        if self.project.selection.is_empty() {
            return;
        }
        self.record_undo("Remove Melt Deformer", false);
        for id in self.project.selection.clone() {
            self.project.remove_deformer(id);
        }
        self.sync_editors();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> MeltApp {
        let mut app = MeltApp::new(ConsoleBuffer::new(), Arc::new(AtomicU8::new(0)));
        app.sync_editors();
        app
    }

    #[test]
    fn undoing_remove_brings_back_selection_and_handles() {
        let mut app = app();
        assert_eq!(app.editors.keys().copied().collect::<Vec<_>>(), vec![1]);

        app.remove_selected_deformers();
        assert!(app.project.deformers.is_empty());
        assert!(app.editors.is_empty());

        app.try_undo();
        assert_eq!(app.project.selection, vec![1]);
        assert_eq!(app.editors.keys().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn undoing_add_restores_previous_selection() {
        let mut app = app();
        app.add_deformer();
        assert_eq!(app.project.selection, vec![2]);

        app.try_undo();
        assert_eq!(app.project.selection, vec![1]);
        assert!(app.project.deformer(2).is_none());
        assert_eq!(app.editors.keys().copied().collect::<Vec<_>>(), vec![1]);

        app.try_redo();
        assert_eq!(app.project.selection, vec![2]);
        assert!(app.editors.contains_key(&2));
    }
}
