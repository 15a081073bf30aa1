use crate::config::ConfigError;
use crate::dispatcher::DispatchError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("config file already exists: {0}")]
    ConfigExists(PathBuf),
}
