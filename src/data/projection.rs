//! Axis-to-PCA-component mapping of the projections panel.
//!
//! [`ProjectionComponentSelector`] owns the current [`ProjectionSelection`] and
//! keeps the Z-axis dropdown in sync with the dimensionality: after every
//! [`ProjectionComponentSelector::set_components`] call the injected
//! [`ZDropdown`] is told whether a third component is active.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectorError, Result};

/// Which PCA components feed the X, Y and (in 3D) Z axes.
///
/// `component_z` is only meaningful while `is_3d` is set; in 2D it keeps
/// whatever was last assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSelection {
    pub component_x: usize,
    pub component_y: usize,
    pub component_z: usize,
    pub is_3d: bool,
}

impl Default for ProjectionSelection {
    fn default() -> Self {
        Self {
            component_x: 0,
            component_y: 1,
            component_z: 2,
            is_3d: false,
        }
    }
}

impl ProjectionSelection {
    /// Component indices in axis order: `[x, y]` or `[x, y, z]`.
    pub fn components(&self) -> Vec<usize> {
        if self.is_3d {
            vec![self.component_x, self.component_y, self.component_z]
        } else {
            vec![self.component_x, self.component_y]
        }
    }
}

/// The control that picks the Z component.
pub trait ZDropdown {
    fn set_z_dropdown_enabled(&mut self, enabled: bool);
}

/// Enabled flag shared between the selector and whoever draws the dropdown.
#[derive(Debug, Clone, Default)]
pub struct ZDropdownState {
    enabled: Rc<Cell<bool>>,
}

impl ZDropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }
}

impl ZDropdown for ZDropdownState {
    fn set_z_dropdown_enabled(&mut self, enabled: bool) {
        self.enabled.set(enabled);
    }
}

pub struct ProjectionComponentSelector {
    selection: ProjectionSelection,
    z_dropdown: Box<dyn ZDropdown>,
}

impl ProjectionComponentSelector {
    pub fn new(z_dropdown: Box<dyn ZDropdown>) -> Self {
        Self {
            selection: ProjectionSelection::default(),
            z_dropdown,
        }
    }

    /// Assign `[x, y]` (2D) or `[x, y, z]` (3D) and enable the Z dropdown
    /// exactly when three components were given.
    ///
    /// Any other length is rejected without touching the selection or the
    /// dropdown.
    pub fn set_components(&mut self, indices: &[usize]) -> Result<()> {
        match *indices {
            [x, y] => {
                self.selection.component_x = x;
                self.selection.component_y = y;
                self.selection.is_3d = false;
            }
            [x, y, z] => {
                self.selection.component_x = x;
                self.selection.component_y = y;
                self.selection.component_z = z;
                self.selection.is_3d = true;
            }
            _ => {
                log::warn!(
                    "rejecting PCA component list of length {}",
                    indices.len()
                );
                return Err(ProjectorError::InvalidArgument { len: indices.len() });
            }
        }
        log::debug!("PCA components set to {:?}", self.selection.components());
        self.z_dropdown.set_z_dropdown_enabled(self.selection.is_3d);
        Ok(())
    }

    pub fn components(&self) -> Vec<usize> {
        self.selection.components()
    }

    pub fn selection(&self) -> ProjectionSelection {
        self.selection
    }

    pub fn is_3d(&self) -> bool {
        self.selection.is_3d
    }

    /// Toggle dimensionality while keeping the stored components.
    pub fn set_is_3d(&mut self, is_3d: bool) {
        self.selection.is_3d = is_3d;
        self.z_dropdown.set_z_dropdown_enabled(is_3d);
    }

    /// Restore a full selection, including a stale Z for 2D selections.
    pub fn set_selection(&mut self, selection: ProjectionSelection) {
        self.selection = selection;
        log::debug!("PCA components restored to {:?}", selection.components());
        self.z_dropdown.set_z_dropdown_enabled(selection.is_3d);
    }
}

impl Default for ProjectionComponentSelector {
    fn default() -> Self {
        Self::new(Box::new(ZDropdownState::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_first_two_components_in_2d() {
        let sel = ProjectionSelection::default();
        assert_eq!(sel.components(), vec![0, 1]);
        assert_eq!(sel.component_z, 2);
    }

    #[test]
    fn stale_z_is_hidden_in_2d() {
        let sel = ProjectionSelection {
            component_x: 3,
            component_y: 4,
            component_z: 7,
            is_3d: false,
        };
        assert_eq!(sel.components(), vec![3, 4]);
    }

    #[test]
    fn toggling_3d_reuses_stored_z() {
        let state = ZDropdownState::new();
        let mut selector = ProjectionComponentSelector::new(Box::new(state.clone()));
        selector.set_components(&[0, 1, 5]).unwrap();
        selector.set_components(&[2, 3]).unwrap();
        assert!(!state.is_enabled());

        selector.set_is_3d(true);
        assert!(state.is_enabled());
        assert_eq!(selector.components(), vec![2, 3, 5]);
    }

    #[test]
    fn restoring_2d_selection_keeps_z() {
        let mut selector = ProjectionComponentSelector::default();
        selector.set_selection(ProjectionSelection {
            component_x: 1,
            component_y: 2,
            component_z: 6,
            is_3d: false,
        });
        assert_eq!(selector.components(), vec![1, 2]);
        assert_eq!(selector.selection().component_z, 6);
    }

    #[test]
    fn restoring_selection_syncs_z_dropdown() {
        let state = ZDropdownState::new();
        let mut selector = ProjectionComponentSelector::new(Box::new(state.clone()));
        selector.set_selection(ProjectionSelection {
            component_x: 0,
            component_y: 3,
            component_z: 1,
            is_3d: true,
        });
        assert!(state.is_enabled());
        assert_eq!(selector.components(), vec![0, 3, 1]);

        selector.set_selection(ProjectionSelection::default());
        assert!(!state.is_enabled());
    }
}
