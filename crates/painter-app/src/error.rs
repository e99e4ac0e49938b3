//! Application errors.

use painter_render::RendererError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid event script {}: {source}", path.display())]
    Events {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Render(#[from] RendererError),
}

pub type AppResult<T> = Result<T, AppError>;

/// Read a whole file, tagging failures with the path.
pub(crate) fn read_file(path: &std::path::Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}
