//! Error type shared by the projector crate.

use std::io;

use thiserror::Error;

/// Errors produced while configuring or persisting a projection.
#[derive(Error, Debug)]
pub enum ProjectorError {
    /// A component list that is neither `[x, y]` nor `[x, y, z]`.
    #[error("expected 2 or 3 PCA component indices, got {len}")]
    InvalidArgument { len: usize },

    /// A component index past the end of the available components.
    #[error("PCA component {index} out of range ({available} available)")]
    ComponentOutOfRange { index: usize, available: usize },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("YAML error: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProjectorError>;
