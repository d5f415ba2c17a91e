//! Configuration for the projector window.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::controllers::ProjectionController;
use crate::error::Result;

// ─────────────────────────────────────────────────────────────────────────────
// File-backed settings
// ─────────────────────────────────────────────────────────────────────────────

/// The part of [`ProjectorConfig`] that can be read from a YAML file.
///
/// ```yaml
/// title: "Embedding projector"
/// variances: [0.42, 0.21, 0.09]
/// components: [0, 1, 2]
/// state_path: /tmp/projection.json
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorSettings {
    pub title: String,
    /// Explained-variance fraction per PCA component, by rank.
    pub variances: Vec<f64>,
    /// Initial `[x, y]` or `[x, y, z]` selection.
    pub components: Vec<usize>,
    /// Where the selection is saved when the window closes.
    pub state_path: Option<PathBuf>,
}

impl Default for ProjectorSettings {
    fn default() -> Self {
        Self {
            title: "Projector".to_string(),
            variances: Vec::new(),
            components: vec![0, 1],
            state_path: None,
        }
    }
}

impl ProjectorSettings {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        let settings = Self::from_yaml_str(&s)?;
        log::info!("loaded projector settings from {:?}", path);
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Everything [`crate::run_projector`] needs to open the panel.
pub struct ProjectorConfig {
    pub settings: ProjectorSettings,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    /// Handle for the rendering layer to observe the selection.
    pub projection_controller: Option<ProjectionController>,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self::from_settings(ProjectorSettings::default())
    }
}

impl ProjectorConfig {
    pub fn from_settings(settings: ProjectorSettings) -> Self {
        Self {
            settings,
            native_options: None,
            projection_controller: None,
        }
    }
}
