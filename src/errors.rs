use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::core::SnapshotError;
use crate::io::IoError;
use crate::logging::LoggingError;
use crate::ui::UiError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("Serialization error (JSON): {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid mind map document: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("Invalid file path: {0}")]
    InvalidPath(PathBuf),

    #[error("UI error: {0}")]
    Ui(#[from] UiError),
}

pub type AppResult<T> = Result<T, AppError>;
