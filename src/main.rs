use std::path::PathBuf;

use projector::{run_projector, ProjectorConfig, ProjectorSettings};

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Optional YAML settings file as the only argument.
    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ProjectorSettings::load_from_path(&path).unwrap_or_else(|e| {
            log::error!("failed to read settings {:?}: {e}", path);
            ProjectorSettings::default()
        }),
        None => ProjectorSettings {
            title: "Projector demo".to_string(),
            variances: vec![0.38, 0.22, 0.14, 0.09, 0.06, 0.04, 0.03, 0.02, 0.01, 0.01],
            components: vec![0, 1, 2],
            state_path: None,
        },
    };

    let cfg = ProjectorConfig::from_settings(settings);
    let controller = projector::ProjectionController::new();
    let rx = controller.subscribe();
    std::thread::spawn(move || {
        while let Ok(components) = rx.recv() {
            log::info!("projection changed: {components:?}");
        }
    });

    run_projector(ProjectorConfig {
        projection_controller: Some(controller),
        ..cfg
    })
}
