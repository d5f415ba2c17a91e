//! Top-level entry point for running the projector as a native window.

use eframe::egui;

use crate::config::ProjectorConfig;

use super::projector_app::ProjectorApp;

/// Open the projections panel in a native window.
///
/// The call blocks until the window is closed.
pub fn run_projector(mut cfg: ProjectorConfig) -> eframe::Result<()> {
    let app = ProjectorApp::from_config(&mut cfg);

    let title = cfg.settings.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(960.0, 640.0));
    }

    log::info!("starting projector window {title:?}");
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
