pub mod panel_trait;
pub mod projections_ui;

pub use panel_trait::{Panel, PanelState};
pub use projections_ui::ProjectionsPanel;
