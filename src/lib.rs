//! Projector crate root: re-exports and module wiring.
//!
//! A projections panel built on egui/eframe that lets the user choose which
//! PCA components are mapped to the X/Y/(optionally Z) axes of an embedding
//! view. Computing the components and drawing the point cloud happen
//! elsewhere; this crate only owns the selection.
//!
//! - `data`: selection state, the Z-dropdown hook and the component catalog
//! - `panels`: the `Panel` trait and the projections panel
//! - `controllers`: observe the selection from non-UI code
//! - `persistence`: JSON save/load of the selection
//! - `config`: window and initial-state configuration
//! - `app`: eframe app and run helper

pub mod app;
pub mod config;
pub mod controllers;
pub mod data;
pub mod error;
pub mod panels;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run_projector, ProjectorApp};
pub use config::{ProjectorConfig, ProjectorSettings};
pub use controllers::ProjectionController;
pub use data::components::{ComponentCatalog, PcaComponent, MAX_PCA_COMPONENTS};
pub use data::projection::{
    ProjectionComponentSelector, ProjectionSelection, ZDropdown, ZDropdownState,
};
pub use error::{ProjectorError, Result};
pub use panels::{Panel, PanelState, ProjectionsPanel};
