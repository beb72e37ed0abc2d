use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Failed to access {}: {message}", path.display())]
    Resource { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Input produced no lines; refusing to render an empty cloud")]
    EmptyInput,

    #[error("Rendering failed: {0}")]
    Render(String),
}

impl CloudError {
    /// Build a Resource error from a path and any displayable cause.
    pub fn resource(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        Self::Resource {
            path: path.into(),
            message: cause.to_string(),
        }
    }
}
