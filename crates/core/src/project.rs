use serde::{Deserialize, Serialize};

use crate::deformer::MeltDeformer;
use crate::settings::EditorSettings;

pub const PROJECT_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub version: u32,
    #[serde(default)]
    pub settings: ProjectSettings,
    #[serde(default)]
    pub deformers: Vec<MeltDeformer>,
    #[serde(default)]
    pub selection: Vec<u64>,
    #[serde(default = "default_next_id")]
    pub next_id: u64,
}

fn default_next_id() -> u64 {
    1
}

impl Default for Project {
    fn default() -> Self {
        Self {
            version: PROJECT_VERSION,
            settings: ProjectSettings::default(),
            deformers: Vec::new(),
            selection: Vec::new(),
            next_id: default_next_id(),
        }
    }
}

impl Project {
    /// Project with a single selected melt deformer, used when nothing is loaded.
    pub fn with_default_deformer() -> Self {
        let mut project = Self::default();
        let id = project.add_deformer();
        project.selection.push(id);
        project
    }

    pub fn add_deformer(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.deformers.push(MeltDeformer::new(id));
        tracing::debug!(deformer = id, "melt deformer added");
        id
    }

    pub fn remove_deformer(&mut self, id: u64) -> bool {
        let before = self.deformers.len();
        self.deformers.retain(|melt| melt.id != id);
        self.selection.retain(|selected| *selected != id);
        self.deformers.len() != before
    }

    pub fn deformer(&self, id: u64) -> Option<&MeltDeformer> {
        self.deformers.iter().find(|melt| melt.id == id)
    }

    pub fn deformer_mut(&mut self, id: u64) -> Option<&mut MeltDeformer> {
        self.deformers.iter_mut().find(|melt| melt.id == id)
    }

    pub fn selected(&self) -> impl Iterator<Item = &MeltDeformer> {
        self.deformers
            .iter()
            .filter(|melt| self.selection.contains(&melt.id))
    }

    /// Deformers and selection as one undoable state.
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            deformers: self.deformers.clone(),
            selection: self.selection.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: ProjectSnapshot) {
        self.deformers = snapshot.deformers;
        self.selection = snapshot.selection;
        self.migrate_to_latest();
    }

    pub fn migrate_to_latest(&mut self) {
        if self.version < 2 {
            // version 1 stored deformers without ids
            let mut next = 1;
            for melt in &mut self.deformers {
                if melt.id == 0 {
                    melt.id = next;
                }
                next = next.max(melt.id + 1);
            }
            self.version = 2;
        }
        let max_id = self.deformers.iter().map(|melt| melt.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        let deformers = &self.deformers;
        self.selection
            .retain(|id| deformers.iter().any(|melt| melt.id == *id));
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectSnapshot {
    pub deformers: Vec<MeltDeformer>,
    pub selection: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    pub inspector_width: f32,
    pub panels: PanelSettings,
    pub camera: CameraSettings,
    pub editor: EditorSettings,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            inspector_width: 300.0,
            panels: PanelSettings::default(),
            camera: CameraSettings::default(),
            editor: EditorSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub show_inspector: bool,
    pub show_console: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            show_inspector: true,
            show_console: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub target: [f32; 3],
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            target: [0.0, 0.5, 0.0],
            distance: 5.0,
            yaw: 0.8,
            pitch: 0.4,
        }
    }
}
