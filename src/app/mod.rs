mod projector_app;
mod run;

pub use projector_app::ProjectorApp;
pub use run::run_projector;
