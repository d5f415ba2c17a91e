//! eframe application hosting the projections panel.

use std::path::PathBuf;

use eframe::egui;

use crate::config::ProjectorConfig;
use crate::controllers::ProjectionController;
use crate::data::projection::ProjectionSelection;
use crate::panels::{Panel, ProjectionsPanel};
use crate::persistence::{load_state_from_path, save_state_to_path, ProjectionStateSerde};

pub struct ProjectorApp {
    pub projections: ProjectionsPanel,
    state_path: Option<PathBuf>,
    saved: Option<ProjectionSelection>,
}

impl ProjectorApp {
    /// Build the app from `cfg`: load the catalog, apply the initial
    /// selection, then overlay any saved state found at `state_path`.
    pub fn from_config(cfg: &mut ProjectorConfig) -> Self {
        let controller = cfg
            .projection_controller
            .take()
            .unwrap_or_else(ProjectionController::new);
        let mut projections = ProjectionsPanel::new(controller);
        projections.set_variances(&cfg.settings.variances);
        if let Err(e) = projections.set_pca_component_ui_values(&cfg.settings.components) {
            log::warn!("invalid initial components {:?}: {e}", cfg.settings.components);
        }

        let state_path = cfg.settings.state_path.clone();
        if let Some(path) = state_path.as_deref().filter(|p| p.exists()) {
            match load_state_from_path(path) {
                Ok(state) => {
                    let mut sel = projections.selection();
                    state.apply_to(&mut sel);
                    if let Err(e) = projections.restore_selection(sel) {
                        log::warn!("ignoring saved projection state from {:?}: {e}", path);
                    }
                }
                Err(e) => log::warn!("failed to load projection state from {:?}: {e}", path),
            }
        }

        let saved = Some(projections.selection());
        Self {
            projections,
            state_path,
            saved,
        }
    }

    /// Write the selection to `state_path` whenever it differs from the last
    /// saved one.
    fn save_state_if_changed(&mut self) {
        let Some(path) = &self.state_path else {
            return;
        };
        let current = self.projections.selection();
        if self.saved == Some(current) {
            return;
        }
        let state = ProjectionStateSerde::from(&current);
        match save_state_to_path(&state, path) {
            Ok(()) => self.saved = Some(current),
            Err(e) => log::error!("failed to save projection state: {e}"),
        }
    }
}

impl eframe::App for ProjectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                self.projections.render_menu(ui);
            });
        });

        if self.projections.state().visible {
            egui::SidePanel::left("projections")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| {
                    ui.heading(self.projections.title_and_icon());
                    ui.separator();
                    self.projections.render_panel(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(format!(
                    "Projection axes: {:?}",
                    self.projections.pca_component_ui_values()
                ));
            });
        });

        self.save_state_if_changed();
    }
}
