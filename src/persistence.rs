//! State persistence: save and load the projection selection to/from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::projection::ProjectionSelection;
use crate::error::Result;

/// Serializable view of the panel state.
///
/// `z_component` is kept even in 2D so toggling 3D after a reload brings back
/// the previous Z axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionStateSerde {
    pub components: Vec<usize>,
    pub is_3d: bool,
    #[serde(default)]
    pub z_component: Option<usize>,
}

impl From<&ProjectionSelection> for ProjectionStateSerde {
    fn from(s: &ProjectionSelection) -> Self {
        Self {
            components: s.components(),
            is_3d: s.is_3d,
            z_component: Some(s.component_z),
        }
    }
}

impl ProjectionStateSerde {
    /// Apply stored state on top of `base`. Missing entries keep `base`'s values.
    pub fn apply_to(&self, base: &mut ProjectionSelection) {
        if let Some(&x) = self.components.first() {
            base.component_x = x;
        }
        if let Some(&y) = self.components.get(1) {
            base.component_y = y;
        }
        if let Some(z) = self.components.get(2).copied().or(self.z_component) {
            base.component_z = z;
        }
        base.is_3d = self.is_3d && self.components.len() >= 3;
    }
}

/// Serialize the state as pretty JSON.
pub fn state_to_json(state: &ProjectionStateSerde) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Deserialize state from JSON.
pub fn state_from_json(json: &str) -> Result<ProjectionStateSerde> {
    Ok(serde_json::from_str(json)?)
}

/// Save the state to a JSON file at the given path.
pub fn save_state_to_path(state: &ProjectionStateSerde, path: &Path) -> Result<()> {
    let txt = state_to_json(state)?;
    std::fs::write(path, txt)?;
    log::info!("saved projection state to {:?}", path);
    Ok(())
}

/// Load the state from a JSON file at the given path.
pub fn load_state_from_path(path: &Path) -> Result<ProjectionStateSerde> {
    let txt = std::fs::read_to_string(path)?;
    state_from_json(&txt)
}
