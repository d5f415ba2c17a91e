//! Projections panel: pick which PCA components drive the X/Y/Z axes.

use eframe::egui;
use egui_phosphor::regular::CUBE;

use crate::controllers::ProjectionController;
use crate::data::components::ComponentCatalog;
use crate::data::projection::{ProjectionComponentSelector, ProjectionSelection, ZDropdownState};
use crate::error::{ProjectorError, Result};

use super::panel_trait::{Panel, PanelState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

pub struct ProjectionsPanel {
    state: PanelState,
    selector: ProjectionComponentSelector,
    z_dropdown: ZDropdownState, // shared with the selector
    catalog: ComponentCatalog,
    controller: ProjectionController,
}

impl ProjectionsPanel {
    pub const SHOW_LABEL: &'static str = "Show Projections";

    pub fn new(controller: ProjectionController) -> Self {
        let z_dropdown = ZDropdownState::new();
        Self {
            state: PanelState::new("Projections", CUBE),
            selector: ProjectionComponentSelector::new(Box::new(z_dropdown.clone())),
            z_dropdown,
            catalog: ComponentCatalog::default(),
            controller,
        }
    }

    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// Replace the offered components with new explained-variance fractions.
    pub fn set_variances(&mut self, variances: &[f64]) {
        self.catalog = ComponentCatalog::from_variances(variances);
        log::debug!("projections panel now offers {} components", self.catalog.len());
        if self.catalog.is_empty()
            || self
                .check_in_catalog(&self.pca_component_ui_values())
                .is_ok()
        {
            return;
        }
        let last = self.catalog.len() - 1;
        let fallback = ProjectionSelection {
            component_x: 0,
            component_y: last.min(1),
            component_z: last.min(2),
            is_3d: false,
        };
        log::info!(
            "selection {:?} no longer fits {} components, resetting to {:?}",
            self.pca_component_ui_values(),
            self.catalog.len(),
            fallback.components()
        );
        self.selector.set_selection(fallback);
        self.publish();
    }

    /// Every index must be in the catalog, once a catalog is loaded.
    fn check_in_catalog(&self, components: &[usize]) -> Result<()> {
        if self.catalog.is_empty() {
            return Ok(());
        }
        match components.iter().find(|&&i| !self.catalog.contains(i)) {
            Some(&index) => Err(ProjectorError::ComponentOutOfRange {
                index,
                available: self.catalog.len(),
            }),
            None => Ok(()),
        }
    }

    /// Set the axis components from `[x, y]` or `[x, y, z]`.
    ///
    /// Indices are checked against the catalog once one is loaded. The new
    /// selection is published on the controller.
    pub fn set_pca_component_ui_values(&mut self, components: &[usize]) -> Result<()> {
        self.check_in_catalog(components)?;
        self.selector.set_components(components)?;
        self.publish();
        Ok(())
    }

    pub fn pca_component_ui_values(&self) -> Vec<usize> {
        self.selector.components()
    }

    pub fn selection(&self) -> ProjectionSelection {
        self.selector.selection()
    }

    /// Restore a previously saved selection. The active axes must exist in
    /// the catalog; a stale Z of a 2D selection is kept as is.
    pub fn restore_selection(&mut self, selection: ProjectionSelection) -> Result<()> {
        self.check_in_catalog(&selection.components())?;
        self.selector.set_selection(selection);
        self.publish();
        Ok(())
    }

    pub fn is_3d(&self) -> bool {
        self.selector.is_3d()
    }

    /// Switch between 2D and 3D.
    ///
    /// Going 3D with a stored Z outside the catalog moves Z to the first
    /// component not used by X or Y. Fails when no such component exists.
    pub fn set_3d(&mut self, is_3d: bool) -> Result<()> {
        let sel = self.selection();
        if is_3d && !self.catalog.is_empty() && !self.catalog.contains(sel.component_z) {
            let free = self
                .catalog
                .iter()
                .map(|c| c.index)
                .find(|&i| i != sel.component_x && i != sel.component_y)
                .ok_or(ProjectorError::ComponentOutOfRange {
                    index: sel.component_z,
                    available: self.catalog.len(),
                })?;
            self.selector.set_selection(ProjectionSelection {
                component_z: free,
                ..sel
            });
        }
        self.selector.set_is_3d(is_3d);
        self.publish();
        Ok(())
    }

    pub fn z_dropdown_enabled(&self) -> bool {
        self.z_dropdown.is_enabled()
    }

    /// Fraction of the total variance the current axes describe.
    pub fn described_variance(&self) -> f64 {
        self.catalog.total_variance(&self.pca_component_ui_values())
    }

    fn publish(&self) {
        self.controller.publish(self.pca_component_ui_values());
    }

    /// Apply one frame's worth of edits: axis picks first, in the current
    /// dimensionality, then the 3D toggle.
    fn apply_frame_edits(&mut self, next: ProjectionSelection, toggle_3d: Option<bool>) {
        if next != self.selection() {
            if let Err(e) = self.set_pca_component_ui_values(&next.components()) {
                log::warn!("ignoring PCA component change: {e}");
            }
        }
        if let Some(is_3d) = toggle_3d {
            if let Err(e) = self.set_3d(is_3d) {
                log::warn!("cannot switch to 3D: {e}");
            }
        }
    }

    /// Combo box for one axis. Returns the newly picked index, if any.
    fn axis_combo(&self, ui: &mut egui::Ui, axis: Axis, current: usize) -> Option<usize> {
        let mut picked = None;
        egui::ComboBox::from_id_salt(("pca_axis", axis.label()))
            .selected_text(self.catalog.label(current))
            .show_ui(ui, |ui| {
                for c in self.catalog.iter() {
                    if ui
                        .selectable_label(c.index == current, c.label())
                        .clicked()
                        && c.index != current
                    {
                        picked = Some(c.index);
                    }
                }
            });
        picked
    }
}

impl Default for ProjectionsPanel {
    fn default() -> Self {
        Self::new(ProjectionController::new())
    }
}

impl Panel for ProjectionsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button(self.title_and_icon(), |ui| {
            if ui.button(Self::SHOW_LABEL).clicked() {
                let st = self.state_mut();
                st.visible = true;
                st.request_focus = true;
                ui.close();
            }
            let mut is_3d = self.is_3d();
            if ui.checkbox(&mut is_3d, "3D").changed() {
                if let Err(e) = self.set_3d(is_3d) {
                    log::warn!("cannot switch to 3D: {e}");
                }
            }
        });
    }

    fn render_panel(&mut self, ui: &mut egui::Ui) {
        if self.catalog.is_empty() {
            ui.label(egui::RichText::new("No PCA components available yet.").weak());
            return;
        }

        let sel = self.selection();
        let mut next = sel;

        egui::Grid::new("pca_axes").num_columns(2).show(ui, |ui| {
            ui.label(Axis::X.label());
            if let Some(i) = self.axis_combo(ui, Axis::X, sel.component_x) {
                next.component_x = i;
            }
            ui.end_row();

            ui.label(Axis::Y.label());
            if let Some(i) = self.axis_combo(ui, Axis::Y, sel.component_y) {
                next.component_y = i;
            }
            ui.end_row();

            ui.label(Axis::Z.label());
            ui.add_enabled_ui(self.z_dropdown_enabled(), |ui| {
                if let Some(i) = self.axis_combo(ui, Axis::Z, sel.component_z) {
                    next.component_z = i;
                }
            });
            ui.end_row();
        });

        let mut is_3d = sel.is_3d;
        let toggled = ui
            .checkbox(&mut is_3d, "3D")
            .on_hover_text("Use a third component for the Z axis")
            .changed();
        self.apply_frame_edits(next, toggled.then_some(is_3d));

        ui.separator();
        ui.label(format!(
            "Total variance described: {:.1}%",
            self.described_variance() * 100.0
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_title_and_icon() {
        let p = ProjectionsPanel::default();
        assert_eq!(p.title(), "Projections");
        assert_eq!(p.icon_only(), Some(CUBE));
        assert!(p.title_and_icon().ends_with("Projections"));
    }

    #[test]
    fn two_components_disable_z_dropdown() {
        let mut p = ProjectionsPanel::default();
        p.set_variances(&[0.4, 0.3, 0.2, 0.1]);
        p.set_pca_component_ui_values(&[0, 1]).unwrap();
        assert_eq!(p.pca_component_ui_values(), vec![0, 1]);
        assert!(!p.z_dropdown_enabled());
    }

    #[test]
    fn axis_pick_survives_3d_toggle_in_same_frame() {
        let mut p = ProjectionsPanel::default();
        p.set_variances(&[0.4, 0.3, 0.2, 0.1]);
        p.set_pca_component_ui_values(&[0, 1]).unwrap();

        let next = ProjectionSelection {
            component_x: 3,
            ..p.selection()
        };
        p.apply_frame_edits(next, Some(true));
        assert_eq!(p.pca_component_ui_values(), vec![3, 1, 2]);
        assert!(p.z_dropdown_enabled());
    }

    #[test]
    fn z_pick_is_kept_when_leaving_3d_in_same_frame() {
        let mut p = ProjectionsPanel::default();
        p.set_variances(&[0.4, 0.3, 0.2, 0.1]);
        p.set_pca_component_ui_values(&[0, 1, 2]).unwrap();

        let next = ProjectionSelection {
            component_z: 3,
            ..p.selection()
        };
        p.apply_frame_edits(next, Some(false));
        assert_eq!(p.pca_component_ui_values(), vec![0, 1]);
        assert_eq!(p.selection().component_z, 3);
    }
}
